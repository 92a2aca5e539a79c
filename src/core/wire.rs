//! # Primitive Codec
//!
//! Wire encodings for the protocol's scalar field types.
//!
//! The encode and decode halves are split into two traits, mirroring the two
//! directions of the wire:
//! - [`Encode`] is object-safe so a frame writer can take a heterogeneous
//!   field list as `&[&dyn Encode]`.
//! - [`Decode`] reports the exact number of bytes each field consumed; that
//!   figure is the unit the frame codec uses for its declared-length
//!   accounting.
//!
//! Every encoding is either fixed-width or length-prefixed, so decoding
//! never needs lookahead beyond the current field. All multi-byte integers
//! are big-endian.
//!
//! Enumeration bytes are not validated here: an unrecognized stage or suit
//! value decodes into its newtype unchanged, leaving contextual handling to
//! the application layer.

use std::io::Read;

use crate::error::{ProtocolError, Result};
use crate::protocol::types::{
    Amount, Big, Card, Cmd, GameStage, GameType, Id, LimitType, Op, PlayerState, Rank, Small,
    Suit, Text, CARD_LIST_MAX,
};

/// Serializes one field value into a frame body buffer.
///
/// Encoding is a pure function of the value: no partial writes, no buffer
/// state outliving the message being assembled.
pub trait Encode {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()>;
}

/// Deserializes one field value from a byte source.
pub trait Decode: Sized {
    /// Reads one value and returns it along with the number of bytes
    /// consumed from `r`.
    fn decode<R: Read>(r: &mut R) -> Result<(Self, u16)>;
}

pub(crate) fn read_u8<R: Read>(r: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

pub(crate) fn read_u16<R: Read>(r: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

pub(crate) fn read_i32<R: Read>(r: &mut R) -> Result<i32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
}

pub(crate) fn read_u32<R: Read>(r: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

// Single-byte fields share one encoding: the raw byte. Unknown enumeration
// values pass through both directions unchanged.
macro_rules! byte_field {
    ($($ty:ident),+ $(,)?) => {$(
        impl Encode for $ty {
            fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
                buf.push(self.0);
                Ok(())
            }
        }

        impl Decode for $ty {
            fn decode<R: Read>(r: &mut R) -> Result<(Self, u16)> {
                Ok(($ty(read_u8(r)?), 1))
            }
        }
    )+};
}

byte_field!(Cmd, Small, LimitType, GameType, GameStage, PlayerState, Op, Rank, Suit);

impl Encode for Big {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.extend_from_slice(&self.0.to_be_bytes());
        Ok(())
    }
}

impl Decode for Big {
    fn decode<R: Read>(r: &mut R) -> Result<(Self, u16)> {
        Ok((Big(read_u32(r)?), 4))
    }
}

impl Encode for Id {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.extend_from_slice(&self.0.to_be_bytes());
        Ok(())
    }
}

impl Decode for Id {
    fn decode<R: Read>(r: &mut R) -> Result<(Self, u16)> {
        Ok((Id(read_i32(r)?), 4))
    }
}

impl Encode for Amount {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.extend_from_slice(&self.hundredths().to_be_bytes());
        Ok(())
    }
}

impl Decode for Amount {
    fn decode<R: Read>(r: &mut R) -> Result<(Self, u16)> {
        Ok((Amount::from_hundredths(read_i32(r)?), 4))
    }
}

impl Encode for Text {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        // Length <= 255 is guaranteed by the Text constructor.
        let bytes = self.as_str().as_bytes();
        buf.push(bytes.len() as u8);
        buf.extend_from_slice(bytes);
        Ok(())
    }
}

impl Decode for Text {
    /// Consumed count is computed as `1 + len` in 16-bit arithmetic so a
    /// 255-byte payload cannot wrap the accounting.
    fn decode<R: Read>(r: &mut R) -> Result<(Self, u16)> {
        let len = read_u8(r)?;
        let mut bytes = vec![0u8; usize::from(len)];
        r.read_exact(&mut bytes)?;
        let text = Text(String::from_utf8_lossy(&bytes).into_owned());
        Ok((text, 1 + u16::from(len)))
    }
}

impl Encode for Vec<Card> {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        if self.len() > CARD_LIST_MAX {
            return Err(ProtocolError::CardListTooLong(self.len()));
        }
        buf.push(self.len() as u8);
        for card in self {
            buf.push(card.rank.0);
            buf.push(card.suit.0);
        }
        Ok(())
    }
}

impl Decode for Vec<Card> {
    fn decode<R: Read>(r: &mut R) -> Result<(Self, u16)> {
        let count = read_u8(r)?;
        let mut cards = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            cards.push(Card {
                rank: Rank(read_u8(r)?),
                suit: Suit(read_u8(r)?),
            });
        }
        Ok((cards, 1 + 2 * u16::from(count)))
    }
}
