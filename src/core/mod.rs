//! # Core Codec Components
//!
//! The generic serialization engine: primitive field encodings, message
//! framing, and the async adapter for framed transports.
//!
//! ## Wire Format
//! ```text
//! [Length(2, BE)] [Cmd(1)] [Fields(N)]
//! ```

pub mod codec;
pub mod frame;
pub mod wire;
