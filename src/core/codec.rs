//! # Async Framing Adapter
//!
//! [`FrameCodec`] adapts the frame codec for `tokio_util::codec::Framed`
//! transports: the decoder waits until a connection's read buffer holds one
//! complete declared frame before handing it to [`read_frame`], and the
//! encoder appends whole frames to the write buffer.
//!
//! The codec holds no state between frames; buffering, timeouts and
//! connection lifecycle belong to the transport wrapping it.

use std::io::Cursor;

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::core::frame::read_frame;
use crate::error::ProtocolError;
use crate::protocol::message::Message;

#[derive(Debug, Default, Clone, Copy)]
pub struct FrameCodec;

impl Decoder for FrameCodec {
    type Item = Message;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Message>, ProtocolError> {
        if src.len() < 2 {
            return Ok(None);
        }
        let declared = usize::from(u16::from_be_bytes([src[0], src[1]]));
        if src.len() < 2 + declared {
            src.reserve(2 + declared - src.len());
            return Ok(None);
        }

        // The whole frame is buffered, so read_frame cannot block and any
        // unknown-command skip stays within this slice.
        let frame = src.split_to(2 + declared);
        read_frame(&mut Cursor::new(&frame[..])).map(Some)
    }
}

impl Encoder<Message> for FrameCodec {
    type Error = ProtocolError;

    fn encode(&mut self, msg: Message, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        let mut buf = Vec::new();
        msg.write_to(&mut buf)?;
        dst.put_slice(&buf);
        Ok(())
    }
}
