//! # Frame Codec
//!
//! Wraps encoded fields in the wire-level envelope and validates the
//! envelope on the way back in.
//!
//! ## Wire Format
//! ```text
//! [Length(2, BE)] [Cmd(1)] [Fields(N)]
//! ```
//! The length counts the command tag and every field byte, not itself.
//!
//! Decoding cross-checks the declared length against the bytes each field
//! actually consumed. The two-sided check is the core correctness guarantee
//! of the decode path: it catches truncated frames (a field reading past the
//! intended boundary) and schema drift (trailing bytes the current schema
//! does not account for) without a checksum. Both violations mean the stream
//! is no longer frame-aligned and should be treated as fatal to the
//! connection.
//!
//! Decode is stateless across frames: each call consumes exactly one frame
//! and leaves the source positioned at the start of the next.

use std::io::{self, Read, Write};

use tracing::{trace, warn};

use crate::core::wire::{read_u8, read_u16, Decode, Encode};
use crate::error::{ProtocolError, Result};
use crate::protocol::message::Message;
use crate::protocol::types::Cmd;

/// Writes one complete frame: tag, then fields in caller-supplied order.
///
/// The caller is responsible for supplying fields in schema order; encode
/// trusts the parameter list and does not re-derive the schema. Fails only
/// on sink I/O errors or values that cannot be represented on the wire.
pub fn write_frame<W: Write>(w: &mut W, cmd: Cmd, fields: &[&dyn Encode]) -> Result<()> {
    let mut body = Vec::with_capacity(16);
    cmd.encode(&mut body)?;
    for field in fields {
        field.encode(&mut body)?;
    }
    if body.len() > usize::from(u16::MAX) {
        return Err(ProtocolError::FrameTooLarge(body.len()));
    }

    trace!(cmd = %cmd, len = body.len(), "writing frame");
    w.write_all(&(body.len() as u16).to_be_bytes())?;
    w.write_all(&body)?;
    Ok(())
}

/// Reads one frame and decodes it into its registered message shape.
///
/// On [`ProtocolError::UnknownCommand`] the remaining declared bytes are
/// consumed first, leaving the source at the next frame boundary so the
/// caller can skip and resynchronize. Short and long frames leave the source
/// mid-frame and are fatal.
pub fn read_frame<R: Read>(r: &mut R) -> Result<Message> {
    let declared = read_u16(r)?;
    let cmd = Cmd(read_u8(r)?);
    if declared == 0 {
        // No room for the tag byte just read.
        return Err(ProtocolError::ShortFrame { cmd });
    }

    let mut frame = FrameReader {
        inner: r,
        cmd,
        remaining: declared - 1,
    };

    if !Message::is_registered(cmd) {
        frame.skip_remaining()?;
        warn!(cmd = cmd.0, "unknown command tag, skipped frame");
        return Err(ProtocolError::UnknownCommand(cmd.0));
    }

    let msg = Message::decode(cmd, &mut frame)?;
    frame.finish()?;
    trace!(cmd = %cmd, "decoded frame");
    Ok(msg)
}

/// Tracks the declared-length budget while a frame's fields are decoded.
pub struct FrameReader<'a, R: Read> {
    inner: &'a mut R,
    cmd: Cmd,
    remaining: u16,
}

impl<R: Read> FrameReader<'_, R> {
    /// Decodes the next field and charges its consumed bytes against the
    /// declared length. Explicit comparison, no wraparound: overrunning the
    /// budget fails immediately with a short-frame error.
    pub(crate) fn field<T: Decode>(&mut self) -> Result<T> {
        let (value, consumed) = T::decode(self.inner)?;
        if consumed > self.remaining {
            return Err(ProtocolError::ShortFrame { cmd: self.cmd });
        }
        self.remaining -= consumed;
        Ok(value)
    }

    /// Rejects frames whose declared length exceeds what the schema read.
    fn finish(&self) -> Result<()> {
        if self.remaining > 0 {
            return Err(ProtocolError::LongFrame {
                cmd: self.cmd,
                leftover: self.remaining,
            });
        }
        Ok(())
    }

    /// Drains the rest of the declared length without interpreting it.
    fn skip_remaining(&mut self) -> Result<()> {
        io::copy(
            &mut (&mut *self.inner).take(u64::from(self.remaining)),
            &mut io::sink(),
        )?;
        self.remaining = 0;
        Ok(())
    }
}
