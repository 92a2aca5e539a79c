//! # Field Types
//!
//! The scalar field types that appear in protocol messages, purely
//! declarative: the wire encodings live in [`crate::core::wire`].
//!
//! Byte-sized enumerations (`LimitType`, `GameStage`, `PlayerState`, `Op`,
//! `Rank`, `Suit`, ...) are newtypes over `u8` with associated constants
//! rather than closed Rust enums: the codec passes unrecognized values
//! through unchanged so callers can apply contextual handling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Maximum payload length of a length-prefixed text field.
pub const TEXT_MAX: usize = 255;

/// Maximum entry count of a card list field.
pub const CARD_LIST_MAX: usize = 255;

/// One-byte command tag selecting a message's schema and meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cmd(pub u8);

impl Cmd {
    pub const GOOD: Cmd = Cmd(0);
    pub const LOGIN: Cmd = Cmd(1);
    pub const LOGOUT: Cmd = Cmd(2);
    pub const WATCH: Cmd = Cmd(3);
    pub const UNWATCH: Cmd = Cmd(4);
    pub const RAISE: Cmd = Cmd(6);
    pub const FOLD: Cmd = Cmd(7);
    pub const JOIN: Cmd = Cmd(8);
    pub const LEAVE: Cmd = Cmd(9);
    pub const SIT_OUT: Cmd = Cmd(10);
    pub const COME_BACK: Cmd = Cmd(11);
    pub const CHAT: Cmd = Cmd(12);
    pub const GAME_QUERY: Cmd = Cmd(13);
    pub const SEAT_QUERY: Cmd = Cmd(14);
    pub const PLAYER_QUERY: Cmd = Cmd(15);
    pub const BALANCE_QUERY: Cmd = Cmd(16);
    pub const START_GAME: Cmd = Cmd(17);
    pub const GAME_INFO: Cmd = Cmd(18);
    pub const PLAYER_INFO: Cmd = Cmd(19);
    pub const BET_REQ: Cmd = Cmd(20);
    pub const NOTIFY_DRAW: Cmd = Cmd(21);
    pub const NOTIFY_SHARED: Cmd = Cmd(22);
    pub const NOTIFY_START_GAME: Cmd = Cmd(23);
    pub const NOTIFY_END_GAME: Cmd = Cmd(24);
    pub const NOTIFY_CANCEL_GAME: Cmd = Cmd(25);
    pub const NOTIFY_WIN: Cmd = Cmd(26);
    pub const NOTIFY_HAND: Cmd = Cmd(27);
    pub const GAME_STAGE: Cmd = Cmd(29);
    pub const SEAT_INFO: Cmd = Cmd(30);
    pub const YOU_ARE: Cmd = Cmd(31);
    pub const BALANCE: Cmd = Cmd(33);
    pub const NOTIFY_BUTTON: Cmd = Cmd(35);
    pub const NOTIFY_SB: Cmd = Cmd(36);
    pub const NOTIFY_BB: Cmd = Cmd(37);
    pub const YOUR_GAME: Cmd = Cmd(39);
    pub const SHOW_CARDS: Cmd = Cmd(40);
    pub const NOTIFY_RAISE: Cmd = Cmd(42);
    pub const NOTIFY_CHAT: Cmd = Cmd(43);
    pub const NOTIFY_JOIN: Cmd = Cmd(44);
    pub const NOTIFY_LEAVE: Cmd = Cmd(45);
    pub const BAD: Cmd = Cmd(255);
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Cmd::GOOD => "GOOD",
            Cmd::LOGIN => "LOGIN",
            Cmd::LOGOUT => "LOGOUT",
            Cmd::WATCH => "WATCH",
            Cmd::UNWATCH => "UNWATCH",
            Cmd::RAISE => "RAISE",
            Cmd::FOLD => "FOLD",
            Cmd::JOIN => "JOIN",
            Cmd::LEAVE => "LEAVE",
            Cmd::SIT_OUT => "SIT_OUT",
            Cmd::COME_BACK => "COME_BACK",
            Cmd::CHAT => "CHAT",
            Cmd::GAME_QUERY => "GAME_QUERY",
            Cmd::SEAT_QUERY => "SEAT_QUERY",
            Cmd::PLAYER_QUERY => "PLAYER_QUERY",
            Cmd::BALANCE_QUERY => "BALANCE_QUERY",
            Cmd::START_GAME => "START_GAME",
            Cmd::GAME_INFO => "GAME_INFO",
            Cmd::PLAYER_INFO => "PLAYER_INFO",
            Cmd::BET_REQ => "BET_REQ",
            Cmd::NOTIFY_DRAW => "NOTIFY_DRAW",
            Cmd::NOTIFY_SHARED => "NOTIFY_SHARED",
            Cmd::NOTIFY_START_GAME => "NOTIFY_START_GAME",
            Cmd::NOTIFY_END_GAME => "NOTIFY_END_GAME",
            Cmd::NOTIFY_CANCEL_GAME => "NOTIFY_CANCEL_GAME",
            Cmd::NOTIFY_WIN => "NOTIFY_WIN",
            Cmd::NOTIFY_HAND => "NOTIFY_HAND",
            Cmd::GAME_STAGE => "GAME_STAGE",
            Cmd::SEAT_INFO => "SEAT_INFO",
            Cmd::YOU_ARE => "YOU_ARE",
            Cmd::BALANCE => "BALANCE",
            Cmd::NOTIFY_BUTTON => "NOTIFY_BUTTON",
            Cmd::NOTIFY_SB => "NOTIFY_SB",
            Cmd::NOTIFY_BB => "NOTIFY_BB",
            Cmd::YOUR_GAME => "YOUR_GAME",
            Cmd::SHOW_CARDS => "SHOW_CARDS",
            Cmd::NOTIFY_RAISE => "NOTIFY_RAISE",
            Cmd::NOTIFY_CHAT => "NOTIFY_CHAT",
            Cmd::NOTIFY_JOIN => "NOTIFY_JOIN",
            Cmd::NOTIFY_LEAVE => "NOTIFY_LEAVE",
            Cmd::BAD => "BAD",
            Cmd(other) => return write!(f, "Unknown Command ({other})"),
        };
        f.write_str(name)
    }
}

/// One-byte unsigned integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Small(pub u8);

/// Four-byte big-endian unsigned integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Big(pub u32);

/// Four-byte big-endian signed identifier (player or game id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub i32);

/// Currency value stored as an exact integer number of hundredths.
///
/// The wire carries the hundredths as a 4-byte big-endian signed integer,
/// so every value with two decimal digits round-trips exactly. There is no
/// floating-point carrier anywhere in the encode/decode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount(i32);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Exact constructor from integer hundredths.
    pub fn from_hundredths(hundredths: i32) -> Amount {
        Amount(hundredths)
    }

    /// Converts a floating-point value, rounding to the nearest hundredth
    /// with ties away from zero (19.995 becomes 20.00).
    ///
    /// Fails when the value is not finite or its hundredths representation
    /// overflows 32 bits.
    pub fn from_f64(value: f64) -> Result<Amount> {
        let scaled = (value * 100.0).round();
        if !scaled.is_finite() || scaled < i32::MIN as f64 || scaled > i32::MAX as f64 {
            return Err(ProtocolError::AmountOutOfRange(value));
        }
        Ok(Amount(scaled as i32))
    }

    pub fn hundredths(self) -> i32 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = i64::from(self.0).unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Length-prefixed text field, at most [`TEXT_MAX`] payload bytes.
///
/// The length limit is enforced at construction, so encoding a `Text` never
/// fails: a caller holding one is already within the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Text(pub(crate) String);

impl Text {
    /// Fails fast with [`ProtocolError::TextTooLong`] instead of silently
    /// truncating oversized input.
    pub fn new(s: impl Into<String>) -> Result<Text> {
        let s = s.into();
        if s.len() > TEXT_MAX {
            return Err(ProtocolError::TextTooLong(s.len()));
        }
        Ok(Text(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Betting limit structure of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitType(pub u8);

impl LimitType {
    pub const FIXED: LimitType = LimitType(1);
    pub const NONE: LimitType = LimitType(2);
    pub const POT: LimitType = LimitType(3);
}

/// Game variant. Only Texas hold'em is defined today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameType(pub u8);

impl GameType {
    pub const TEXAS_HOLDEM: GameType = GameType(1);
}

/// Stage of the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStage(pub u8);

impl GameStage {
    pub const PREFLOP: GameStage = GameStage(0);
    pub const FLOP: GameStage = GameStage(1);
    pub const TURN: GameStage = GameStage(2);
    pub const RIVER: GameStage = GameStage(3);
    pub const DELAYED_START: GameStage = GameStage(4);
    pub const BLINDS: GameStage = GameStage(5);
    pub const SHOWDOWN: GameStage = GameStage(6);
}

impl fmt::Display for GameStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            GameStage::PREFLOP => "Pre-flop",
            GameStage::FLOP => "Flop",
            GameStage::TURN => "Turn",
            GameStage::RIVER => "River",
            GameStage::DELAYED_START => "Delayed start",
            GameStage::BLINDS => "Blinds",
            GameStage::SHOWDOWN => "Showdown",
            GameStage(_) => "Unknown game stage",
        };
        f.write_str(name)
    }
}

/// Bitmask describing a seat's state. Bits combine freely on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState(pub u8);

impl PlayerState {
    pub const EMPTY: PlayerState = PlayerState(0);
    pub const PLAY: PlayerState = PlayerState(1);
    pub const FOLD: PlayerState = PlayerState(2);
    pub const WAIT_BB: PlayerState = PlayerState(4);
    pub const SIT_OUT: PlayerState = PlayerState(8);
    pub const MAKEUP_BB: PlayerState = PlayerState(16);
    pub const ALL_IN: PlayerState = PlayerState(32);
    pub const BET: PlayerState = PlayerState(64);
    /// Reserved seat.
    pub const RESERVED: PlayerState = PlayerState(128);

    /// True when every bit of `other` is set in `self`.
    pub fn contains(self, other: PlayerState) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Comparison operator used by game query filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Op(pub u8);

impl Op {
    pub const IGNORE: Op = Op(0);
    pub const EQ: Op = Op(1);
    pub const LT: Op = Op(2);
    pub const GT: Op = Op(3);
}

/// Card rank, numbered 1 (two) through 13 (ace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub const TWO: Rank = Rank(1);
    pub const THREE: Rank = Rank(2);
    pub const FOUR: Rank = Rank(3);
    pub const FIVE: Rank = Rank(4);
    pub const SIX: Rank = Rank(5);
    pub const SEVEN: Rank = Rank(6);
    pub const EIGHT: Rank = Rank(7);
    pub const NINE: Rank = Rank(8);
    pub const TEN: Rank = Rank(9);
    pub const JACK: Rank = Rank(10);
    pub const QUEEN: Rank = Rank(11);
    pub const KING: Rank = Rank(12);
    pub const ACE: Rank = Rank(13);
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suit(pub u8);

impl Suit {
    pub const CLUBS: Suit = Suit(1);
    pub const DIAMONDS: Suit = Suit(2);
    pub const HEARTS: Suit = Suit(3);
    pub const SPADES: Suit = Suit(4);
}

/// A single playing card as carried in card list fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }
}
