//! # Client Request Helpers
//!
//! Thin per-command write helpers for the client-to-server direction.
//! Each builds one frame from a caller-ordered parameter list; no schema
//! lookup happens on encode. Text parameters are validated against the
//! 255-byte wire limit before anything is written.

use std::io::Write;

use crate::core::frame::write_frame;
use crate::error::Result;
use crate::protocol::types::{Amount, Big, Cmd, GameType, Id, LimitType, Op, Small, Text};

pub fn write_login<W: Write>(w: &mut W, nick: &str, pass: &str) -> Result<()> {
    let nick = Text::new(nick)?;
    let pass = Text::new(pass)?;
    write_frame(w, Cmd::LOGIN, &[&nick, &pass])
}

pub fn write_logout<W: Write>(w: &mut W) -> Result<()> {
    write_frame(w, Cmd::LOGOUT, &[])
}

pub fn write_watch<W: Write>(w: &mut W, gid: Id) -> Result<()> {
    write_frame(w, Cmd::WATCH, &[&gid])
}

pub fn write_unwatch<W: Write>(w: &mut W, gid: Id) -> Result<()> {
    write_frame(w, Cmd::UNWATCH, &[&gid])
}

pub fn write_join<W: Write>(w: &mut W, gid: Id, seat: Small, amount: Amount) -> Result<()> {
    write_frame(w, Cmd::JOIN, &[&gid, &seat, &amount])
}

pub fn write_leave<W: Write>(w: &mut W, gid: Id) -> Result<()> {
    write_frame(w, Cmd::LEAVE, &[&gid])
}

pub fn write_raise<W: Write>(w: &mut W, gid: Id, raise_amount: Amount) -> Result<()> {
    write_frame(w, Cmd::RAISE, &[&gid, &raise_amount])
}

pub fn write_fold<W: Write>(w: &mut W, gid: Id) -> Result<()> {
    write_frame(w, Cmd::FOLD, &[&gid])
}

pub fn write_sit_out<W: Write>(w: &mut W, gid: Id) -> Result<()> {
    write_frame(w, Cmd::SIT_OUT, &[&gid])
}

pub fn write_come_back<W: Write>(w: &mut W, gid: Id) -> Result<()> {
    write_frame(w, Cmd::COME_BACK, &[&gid])
}

pub fn write_chat<W: Write>(w: &mut W, msg: &str) -> Result<()> {
    let msg = Text::new(msg)?;
    write_frame(w, Cmd::CHAT, &[&msg])
}

/// Filtered lobby query. Each (op, value) pair narrows one game property;
/// pass [`Op::IGNORE`] to leave a property unconstrained.
#[allow(clippy::too_many_arguments)]
pub fn write_game_query<W: Write>(
    w: &mut W,
    limit: LimitType,
    op_seats: Op,
    num_seats: Small,
    op_joined: Op,
    joined: Small,
    op_waiting: Op,
    waiting: Small,
) -> Result<()> {
    write_frame(
        w,
        Cmd::GAME_QUERY,
        &[
            &GameType::TEXAS_HOLDEM,
            &limit,
            &op_seats,
            &num_seats,
            &op_joined,
            &joined,
            &op_waiting,
            &waiting,
        ],
    )
}

pub fn write_seat_query<W: Write>(w: &mut W, gid: Id) -> Result<()> {
    write_frame(w, Cmd::SEAT_QUERY, &[&gid])
}

pub fn write_balance_query<W: Write>(w: &mut W) -> Result<()> {
    write_frame(w, Cmd::BALANCE_QUERY, &[])
}

pub fn write_player_query<W: Write>(w: &mut W, pid: Id) -> Result<()> {
    write_frame(w, Cmd::PLAYER_QUERY, &[&pid])
}

pub fn write_start_game<W: Write>(
    w: &mut W,
    num_seats: Big,
    required: Big,
    limit: LimitType,
    low: Amount,
    high: Amount,
) -> Result<()> {
    let table_name = Text::new("Test Table")?;
    write_frame(
        w,
        Cmd::START_GAME,
        &[
            &table_name,
            &GameType::TEXAS_HOLDEM,
            &limit,
            &low,
            &high,
            &num_seats,
            &required,
            &Big(14_000),    // start delay, ms
            &Big(3_600_000), // player timeout, ms
            &Small(0),
        ],
    )
}
