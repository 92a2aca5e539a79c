//! # Message Catalog & Schema Registry
//!
//! One struct variant per registered message shape, plus the closed mapping
//! from command tag to that shape's field-by-field decoder.
//!
//! The field order of each variant is exactly the byte order on the wire.
//! The decode table is a compile-time `match`, so adding a variant without
//! wiring its decoder (or vice versa) fails to round-trip in tests rather
//! than silently drifting; there is no runtime registration.
//!
//! Most shapes are server-to-client notifications and replies. Client
//! requests are written ad hoc by [`crate::protocol::client`]; only `LOGIN`
//! is registered for decode as well, for the server side of the exchange.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::core::frame::{write_frame, FrameReader};
use crate::error::{ProtocolError, Result};
use crate::protocol::types::{
    Amount, Big, Card, Cmd, GameStage, GameType, Id, LimitType, PlayerState, Rank, Small, Suit,
    Text,
};

/// A decoded protocol message. Immutable once built; the codec never
/// retains instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    /// Positive acknowledgement of the command in `cmd`.
    Good { cmd: Cmd, extra: Big },
    /// Negative acknowledgement of the command in `cmd`, with an error code.
    Bad { cmd: Cmd, error: Small },
    YouAre { pid: Id },
    YourGame { gid: Id },
    SeatInfo {
        gid: Id,
        seat_num: Small,
        state: PlayerState,
        pid: Id,
        in_play: Amount,
    },
    GameInfo {
        gid: Id,
        table_name: Text,
        game_type: GameType,
        limit_type: LimitType,
        low: Amount,
        high: Amount,
        num_seats: Big,
        required: Big,
        joined: Big,
        waiting: Big,
    },
    NotifyJoin {
        gid: Id,
        pid: Id,
        seat: Small,
        amount: Amount,
    },
    NotifyCancelGame { gid: Id },
    NotifyLeave { gid: Id, pid: Id },
    NotifyStartGame { gid: Id },
    NotifyButton { gid: Id, button: Small },
    NotifySb { gid: Id, sb: Small },
    NotifyBb { gid: Id, bb: Small },
    BetReq {
        gid: Id,
        call_amount: Amount,
        raise_min: Amount,
        raise_max: Amount,
    },
    Balance { balance: Amount, in_play: Amount },
    NotifyRaise {
        gid: Id,
        pid: Id,
        raise_amount: Amount,
        call_amount: Amount,
    },
    /// A hole card dealt to one player.
    NotifyDraw {
        gid: Id,
        pid: Id,
        rank: Rank,
        suit: Suit,
    },
    /// A community card dealt to the table.
    NotifyShared { gid: Id, rank: Rank, suit: Suit },
    NotifyHand {
        gid: Id,
        pid: Id,
        rank: Small,
        face1: Small,
        face2: Small,
    },
    NotifyEndGame { gid: Id },
    NotifyChat { gid: Id, pid: Id, msg: Text },
    GameStage { gid: Id, stage: GameStage },
    ShowCards {
        gid: Id,
        pid: Id,
        cards: Vec<Card>,
    },
    NotifyWin { gid: Id, pid: Id, amount: Amount },
    PlayerInfo {
        pid: Id,
        total_in_play: Amount,
        nick: Text,
        location: Text,
    },
    Login { nick: Text, pass: Text },
}

/// Every command tag with a registered decode schema.
pub const REGISTERED: [Cmd; 26] = [
    Cmd::GOOD,
    Cmd::BAD,
    Cmd::YOU_ARE,
    Cmd::YOUR_GAME,
    Cmd::SEAT_INFO,
    Cmd::GAME_INFO,
    Cmd::NOTIFY_JOIN,
    Cmd::NOTIFY_CANCEL_GAME,
    Cmd::NOTIFY_LEAVE,
    Cmd::NOTIFY_START_GAME,
    Cmd::NOTIFY_BUTTON,
    Cmd::NOTIFY_SB,
    Cmd::NOTIFY_BB,
    Cmd::BET_REQ,
    Cmd::BALANCE,
    Cmd::NOTIFY_RAISE,
    Cmd::NOTIFY_DRAW,
    Cmd::NOTIFY_SHARED,
    Cmd::NOTIFY_HAND,
    Cmd::NOTIFY_END_GAME,
    Cmd::NOTIFY_CHAT,
    Cmd::GAME_STAGE,
    Cmd::SHOW_CARDS,
    Cmd::NOTIFY_WIN,
    Cmd::PLAYER_INFO,
    Cmd::LOGIN,
];

impl Message {
    /// Schema lookup. A `false` here is a normal outcome for tags this side
    /// never decodes, not a crash condition.
    pub fn is_registered(cmd: Cmd) -> bool {
        REGISTERED.contains(&cmd)
    }

    /// The command tag selecting this message's schema.
    pub fn cmd(&self) -> Cmd {
        match self {
            Message::Good { .. } => Cmd::GOOD,
            Message::Bad { .. } => Cmd::BAD,
            Message::YouAre { .. } => Cmd::YOU_ARE,
            Message::YourGame { .. } => Cmd::YOUR_GAME,
            Message::SeatInfo { .. } => Cmd::SEAT_INFO,
            Message::GameInfo { .. } => Cmd::GAME_INFO,
            Message::NotifyJoin { .. } => Cmd::NOTIFY_JOIN,
            Message::NotifyCancelGame { .. } => Cmd::NOTIFY_CANCEL_GAME,
            Message::NotifyLeave { .. } => Cmd::NOTIFY_LEAVE,
            Message::NotifyStartGame { .. } => Cmd::NOTIFY_START_GAME,
            Message::NotifyButton { .. } => Cmd::NOTIFY_BUTTON,
            Message::NotifySb { .. } => Cmd::NOTIFY_SB,
            Message::NotifyBb { .. } => Cmd::NOTIFY_BB,
            Message::BetReq { .. } => Cmd::BET_REQ,
            Message::Balance { .. } => Cmd::BALANCE,
            Message::NotifyRaise { .. } => Cmd::NOTIFY_RAISE,
            Message::NotifyDraw { .. } => Cmd::NOTIFY_DRAW,
            Message::NotifyShared { .. } => Cmd::NOTIFY_SHARED,
            Message::NotifyHand { .. } => Cmd::NOTIFY_HAND,
            Message::NotifyEndGame { .. } => Cmd::NOTIFY_END_GAME,
            Message::NotifyChat { .. } => Cmd::NOTIFY_CHAT,
            Message::GameStage { .. } => Cmd::GAME_STAGE,
            Message::ShowCards { .. } => Cmd::SHOW_CARDS,
            Message::NotifyWin { .. } => Cmd::NOTIFY_WIN,
            Message::PlayerInfo { .. } => Cmd::PLAYER_INFO,
            Message::Login { .. } => Cmd::LOGIN,
        }
    }

    /// Encodes this message as one complete frame on `w`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        match self {
            Message::Good { cmd, extra } => write_frame(w, Cmd::GOOD, &[cmd, extra]),
            Message::Bad { cmd, error } => write_frame(w, Cmd::BAD, &[cmd, error]),
            Message::YouAre { pid } => write_frame(w, Cmd::YOU_ARE, &[pid]),
            Message::YourGame { gid } => write_frame(w, Cmd::YOUR_GAME, &[gid]),
            Message::SeatInfo {
                gid,
                seat_num,
                state,
                pid,
                in_play,
            } => write_frame(w, Cmd::SEAT_INFO, &[gid, seat_num, state, pid, in_play]),
            Message::GameInfo {
                gid,
                table_name,
                game_type,
                limit_type,
                low,
                high,
                num_seats,
                required,
                joined,
                waiting,
            } => write_frame(
                w,
                Cmd::GAME_INFO,
                &[
                    gid, table_name, game_type, limit_type, low, high, num_seats, required,
                    joined, waiting,
                ],
            ),
            Message::NotifyJoin {
                gid,
                pid,
                seat,
                amount,
            } => write_frame(w, Cmd::NOTIFY_JOIN, &[gid, pid, seat, amount]),
            Message::NotifyCancelGame { gid } => write_frame(w, Cmd::NOTIFY_CANCEL_GAME, &[gid]),
            Message::NotifyLeave { gid, pid } => write_frame(w, Cmd::NOTIFY_LEAVE, &[gid, pid]),
            Message::NotifyStartGame { gid } => write_frame(w, Cmd::NOTIFY_START_GAME, &[gid]),
            Message::NotifyButton { gid, button } => {
                write_frame(w, Cmd::NOTIFY_BUTTON, &[gid, button])
            }
            Message::NotifySb { gid, sb } => write_frame(w, Cmd::NOTIFY_SB, &[gid, sb]),
            Message::NotifyBb { gid, bb } => write_frame(w, Cmd::NOTIFY_BB, &[gid, bb]),
            Message::BetReq {
                gid,
                call_amount,
                raise_min,
                raise_max,
            } => write_frame(w, Cmd::BET_REQ, &[gid, call_amount, raise_min, raise_max]),
            Message::Balance { balance, in_play } => {
                write_frame(w, Cmd::BALANCE, &[balance, in_play])
            }
            Message::NotifyRaise {
                gid,
                pid,
                raise_amount,
                call_amount,
            } => write_frame(w, Cmd::NOTIFY_RAISE, &[gid, pid, raise_amount, call_amount]),
            Message::NotifyDraw {
                gid,
                pid,
                rank,
                suit,
            } => write_frame(w, Cmd::NOTIFY_DRAW, &[gid, pid, rank, suit]),
            Message::NotifyShared { gid, rank, suit } => {
                write_frame(w, Cmd::NOTIFY_SHARED, &[gid, rank, suit])
            }
            Message::NotifyHand {
                gid,
                pid,
                rank,
                face1,
                face2,
            } => write_frame(w, Cmd::NOTIFY_HAND, &[gid, pid, rank, face1, face2]),
            Message::NotifyEndGame { gid } => write_frame(w, Cmd::NOTIFY_END_GAME, &[gid]),
            Message::NotifyChat { gid, pid, msg } => {
                write_frame(w, Cmd::NOTIFY_CHAT, &[gid, pid, msg])
            }
            Message::GameStage { gid, stage } => write_frame(w, Cmd::GAME_STAGE, &[gid, stage]),
            Message::ShowCards { gid, pid, cards } => {
                write_frame(w, Cmd::SHOW_CARDS, &[gid, pid, cards])
            }
            Message::NotifyWin { gid, pid, amount } => {
                write_frame(w, Cmd::NOTIFY_WIN, &[gid, pid, amount])
            }
            Message::PlayerInfo {
                pid,
                total_in_play,
                nick,
                location,
            } => write_frame(w, Cmd::PLAYER_INFO, &[pid, total_in_play, nick, location]),
            Message::Login { nick, pass } => write_frame(w, Cmd::LOGIN, &[nick, pass]),
        }
    }

    /// Decodes the body of a frame whose tag resolved to `cmd`, reading each
    /// schema field in wire order through the frame's length accounting.
    pub(crate) fn decode<R: Read>(cmd: Cmd, f: &mut FrameReader<'_, R>) -> Result<Message> {
        match cmd {
            Cmd::GOOD => Ok(Message::Good {
                cmd: f.field()?,
                extra: f.field()?,
            }),
            Cmd::BAD => Ok(Message::Bad {
                cmd: f.field()?,
                error: f.field()?,
            }),
            Cmd::YOU_ARE => Ok(Message::YouAre { pid: f.field()? }),
            Cmd::YOUR_GAME => Ok(Message::YourGame { gid: f.field()? }),
            Cmd::SEAT_INFO => Ok(Message::SeatInfo {
                gid: f.field()?,
                seat_num: f.field()?,
                state: f.field()?,
                pid: f.field()?,
                in_play: f.field()?,
            }),
            Cmd::GAME_INFO => Ok(Message::GameInfo {
                gid: f.field()?,
                table_name: f.field()?,
                game_type: f.field()?,
                limit_type: f.field()?,
                low: f.field()?,
                high: f.field()?,
                num_seats: f.field()?,
                required: f.field()?,
                joined: f.field()?,
                waiting: f.field()?,
            }),
            Cmd::NOTIFY_JOIN => Ok(Message::NotifyJoin {
                gid: f.field()?,
                pid: f.field()?,
                seat: f.field()?,
                amount: f.field()?,
            }),
            Cmd::NOTIFY_CANCEL_GAME => Ok(Message::NotifyCancelGame { gid: f.field()? }),
            Cmd::NOTIFY_LEAVE => Ok(Message::NotifyLeave {
                gid: f.field()?,
                pid: f.field()?,
            }),
            Cmd::NOTIFY_START_GAME => Ok(Message::NotifyStartGame { gid: f.field()? }),
            Cmd::NOTIFY_BUTTON => Ok(Message::NotifyButton {
                gid: f.field()?,
                button: f.field()?,
            }),
            Cmd::NOTIFY_SB => Ok(Message::NotifySb {
                gid: f.field()?,
                sb: f.field()?,
            }),
            Cmd::NOTIFY_BB => Ok(Message::NotifyBb {
                gid: f.field()?,
                bb: f.field()?,
            }),
            Cmd::BET_REQ => Ok(Message::BetReq {
                gid: f.field()?,
                call_amount: f.field()?,
                raise_min: f.field()?,
                raise_max: f.field()?,
            }),
            Cmd::BALANCE => Ok(Message::Balance {
                balance: f.field()?,
                in_play: f.field()?,
            }),
            Cmd::NOTIFY_RAISE => Ok(Message::NotifyRaise {
                gid: f.field()?,
                pid: f.field()?,
                raise_amount: f.field()?,
                call_amount: f.field()?,
            }),
            Cmd::NOTIFY_DRAW => Ok(Message::NotifyDraw {
                gid: f.field()?,
                pid: f.field()?,
                rank: f.field()?,
                suit: f.field()?,
            }),
            Cmd::NOTIFY_SHARED => Ok(Message::NotifyShared {
                gid: f.field()?,
                rank: f.field()?,
                suit: f.field()?,
            }),
            Cmd::NOTIFY_HAND => Ok(Message::NotifyHand {
                gid: f.field()?,
                pid: f.field()?,
                rank: f.field()?,
                face1: f.field()?,
                face2: f.field()?,
            }),
            Cmd::NOTIFY_END_GAME => Ok(Message::NotifyEndGame { gid: f.field()? }),
            Cmd::NOTIFY_CHAT => Ok(Message::NotifyChat {
                gid: f.field()?,
                pid: f.field()?,
                msg: f.field()?,
            }),
            Cmd::GAME_STAGE => Ok(Message::GameStage {
                gid: f.field()?,
                stage: f.field()?,
            }),
            Cmd::SHOW_CARDS => Ok(Message::ShowCards {
                gid: f.field()?,
                pid: f.field()?,
                cards: f.field()?,
            }),
            Cmd::NOTIFY_WIN => Ok(Message::NotifyWin {
                gid: f.field()?,
                pid: f.field()?,
                amount: f.field()?,
            }),
            Cmd::PLAYER_INFO => Ok(Message::PlayerInfo {
                pid: f.field()?,
                total_in_play: f.field()?,
                nick: f.field()?,
                location: f.field()?,
            }),
            Cmd::LOGIN => Ok(Message::Login {
                nick: f.field()?,
                pass: f.field()?,
            }),
            Cmd(other) => Err(ProtocolError::UnknownCommand(other)),
        }
    }
}
