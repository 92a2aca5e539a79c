//! # Protocol Layer
//!
//! The declarative side of the codec: field types, the message catalog with
//! its command-tag registry, and the per-command client request helpers.

pub mod client;
pub mod message;
pub mod types;
