//! # poker-protocol
//!
//! Binary message codec for a length-prefixed, command-tagged protocol
//! driving a multiplayer Texas hold'em server.
//!
//! The crate turns typed in-memory messages into wire bytes and wire bytes
//! back into typed messages. It owns no sockets and no game rules: a
//! byte-oriented transport supplies the streams, and application logic
//! interprets the decoded messages.
//!
//! ## Layers
//! - [`core::wire`] — primitive field encodings with per-field consumption
//!   accounting
//! - [`core::frame`] — the length-prefixed frame envelope and its two-sided
//!   length validation
//! - [`core::codec`] — `tokio_util` adapter for framed async transports
//! - [`protocol`] — the message catalog, tag registry, and client request
//!   helpers
//!
//! ## Example
//! ```
//! use std::io::Cursor;
//! use poker_protocol::protocol::client::write_login;
//! use poker_protocol::{read_frame, Message};
//!
//! let mut out = Vec::new();
//! write_login(&mut out, "alice", "secret").unwrap();
//!
//! match read_frame(&mut Cursor::new(&out[..])).unwrap() {
//!     Message::Login { nick, .. } => assert_eq!(nick.as_str(), "alice"),
//!     other => panic!("unexpected message: {other:?}"),
//! }
//! ```
//!
//! ## Concurrency
//! The codec is pure, stateless computation over caller-supplied byte
//! streams. Encode and decode may run concurrently on independent streams;
//! a single stream must be driven by one logical sequence of calls, since
//! each call advances that stream's position.

#![warn(clippy::unwrap_used, clippy::expect_used)]

pub mod core;
pub mod error;
pub mod protocol;

pub use crate::core::codec::FrameCodec;
pub use crate::core::frame::{read_frame, write_frame};
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::message::Message;
