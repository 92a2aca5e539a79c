//! # Error Types
//!
//! All error variants that can occur while encoding or decoding protocol
//! frames, from low-level I/O failures to frame-length violations.
//!
//! ## Error Categories
//! - **I/O Errors**: failures of the underlying byte source or sink,
//!   propagated verbatim
//! - **Dispatch Errors**: command tags with no registered schema
//! - **Framing Errors**: declared frame length disagreeing with the bytes
//!   the schema actually consumed (short/long frames)
//! - **Contract Errors**: caller-supplied values that cannot be represented
//!   on the wire (oversized text, card lists, amounts)
//!
//! Short and long frames indicate stream desynchronization: the byte stream
//! can no longer be trusted to be frame-aligned, so callers should treat them
//! as fatal to the connection. An unknown command leaves the stream
//! positioned at the next frame boundary, so a caller may choose to log and
//! skip instead.

use std::io;
use thiserror::Error;

use crate::protocol::types::Cmd;

/// Primary error type for all codec operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot deserialize unknown command tag {0}")]
    UnknownCommand(u8),

    #[error("the {cmd} message was too short to populate all fields")]
    ShortFrame { cmd: Cmd },

    #[error("the {cmd} message was too long: {leftover} trailing bytes")]
    LongFrame { cmd: Cmd, leftover: u16 },

    #[error("text field of {0} bytes exceeds the 255-byte wire limit")]
    TextTooLong(usize),

    #[error("card list of {0} entries exceeds the 255-entry wire limit")]
    CardListTooLong(usize),

    #[error("amount {0} is not representable as 32-bit integer hundredths")]
    AmountOutOfRange(f64),

    #[error("frame body of {0} bytes exceeds the u16 length prefix")]
    FrameTooLarge(usize),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
