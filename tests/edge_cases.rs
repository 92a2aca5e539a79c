#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Frame-boundary edge cases: short frames, long frames, unknown tags, and
//! truncated streams must surface as distinct, inspectable errors rather
//! than partial or garbage messages.

use std::io::Cursor;

use poker_protocol::protocol::message::Message;
use poker_protocol::protocol::types::*;
use poker_protocol::{read_frame, ProtocolError};

// ============================================================================
// SHORT FRAME DETECTION
// ============================================================================

#[test]
fn test_short_frame_is_rejected() {
    // YOUR_GAME needs a 4-byte id, but the frame declares only 3 bytes of
    // body beyond the tag.
    let mut wire = vec![0x00, 0x04, Cmd::YOUR_GAME.0];
    wire.extend_from_slice(&[0x00, 0x00, 0x00, 0x2A]);

    let result = read_frame(&mut Cursor::new(&wire[..]));
    match result {
        Err(ProtocolError::ShortFrame { cmd }) => assert_eq!(cmd, Cmd::YOUR_GAME),
        other => panic!("expected ShortFrame, got {other:?}"),
    }
}

#[test]
fn test_short_frame_fails_on_first_overrunning_field() {
    // SEAT_INFO is five fields; declare only enough for the first two.
    let mut wire = vec![0x00, 0x06, Cmd::SEAT_INFO.0];
    wire.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // gid
    wire.push(2); // seat_num
    wire.push(PlayerState::PLAY.0); // state, already past the declared length
    wire.extend_from_slice(&[0x00, 0x00, 0x00, 0x09]);
    wire.extend_from_slice(&[0x00, 0x00, 0x03, 0xE8]);

    let result = read_frame(&mut Cursor::new(&wire[..]));
    assert!(matches!(
        result,
        Err(ProtocolError::ShortFrame { cmd: Cmd::SEAT_INFO })
    ));
}

#[test]
fn test_zero_length_frame_is_short() {
    let wire = [0x00, 0x00, Cmd::GOOD.0];
    let result = read_frame(&mut Cursor::new(&wire[..]));
    assert!(matches!(result, Err(ProtocolError::ShortFrame { .. })));
}

// ============================================================================
// LONG FRAME DETECTION
// ============================================================================

#[test]
fn test_long_frame_is_rejected() {
    // A valid NOTIFY_END_GAME body plus two trailing bytes covered by the
    // declared length: schema/version drift.
    let mut wire = vec![0x00, 0x07, Cmd::NOTIFY_END_GAME.0];
    wire.extend_from_slice(&[0x00, 0x00, 0x00, 0x0C]); // gid
    wire.extend_from_slice(&[0xBE, 0xEF]); // trailing bytes

    let result = read_frame(&mut Cursor::new(&wire[..]));
    match result {
        Err(ProtocolError::LongFrame { cmd, leftover }) => {
            assert_eq!(cmd, Cmd::NOTIFY_END_GAME);
            assert_eq!(leftover, 2);
        }
        other => panic!("expected LongFrame, got {other:?}"),
    }
}

// ============================================================================
// UNKNOWN COMMAND HANDLING
// ============================================================================

#[test]
fn test_unknown_tag_carries_the_tag() {
    let wire = [0x00, 0x03, 0xEE, 0x01, 0x02];
    let result = read_frame(&mut Cursor::new(&wire[..]));
    assert!(matches!(result, Err(ProtocolError::UnknownCommand(0xEE))));
}

#[test]
fn test_unknown_tag_leaves_stream_at_next_frame() {
    // An unknown frame followed by a valid one: after the error the caller
    // can keep reading and stay frame-aligned.
    let mut wire = vec![0x00, 0x05, 0xEE, 0xDE, 0xAD, 0xBE, 0xEF];
    Message::NotifyStartGame { gid: Id(3) }
        .write_to(&mut wire)
        .expect("encode");

    let mut cursor = Cursor::new(&wire[..]);
    assert!(matches!(
        read_frame(&mut cursor),
        Err(ProtocolError::UnknownCommand(0xEE))
    ));

    let next = read_frame(&mut cursor).expect("stream should be resynchronized");
    assert_eq!(next, Message::NotifyStartGame { gid: Id(3) });
}

#[test]
fn test_unregistered_request_tags_are_unknown_to_decode() {
    // FOLD is encode-only: the registry holds no schema for it, which is a
    // normal outcome rather than a crash.
    assert!(!Message::is_registered(Cmd::FOLD));

    let mut wire = Vec::new();
    poker_protocol::protocol::client::write_fold(&mut wire, Id(9)).expect("encode");

    let result = read_frame(&mut Cursor::new(&wire[..]));
    assert!(matches!(
        result,
        Err(ProtocolError::UnknownCommand(tag)) if tag == Cmd::FOLD.0
    ));
}

// ============================================================================
// TRUNCATED STREAMS
// ============================================================================

#[test]
fn test_truncated_length_prefix_is_io_error() {
    let wire = [0x00];
    let result = read_frame(&mut Cursor::new(&wire[..]));
    assert!(matches!(result, Err(ProtocolError::Io(_))));
}

#[test]
fn test_stream_ending_mid_field_is_io_error() {
    // Declared length promises more bytes than the source holds.
    let wire = [0x00, 0x05, Cmd::YOUR_GAME.0, 0x00, 0x00];
    let result = read_frame(&mut Cursor::new(&wire[..]));
    assert!(matches!(result, Err(ProtocolError::Io(_))));
}

#[test]
fn test_clean_eof_is_io_error() {
    let result = read_frame(&mut Cursor::new(&[][..]));
    assert!(matches!(result, Err(ProtocolError::Io(_))));
}

// ============================================================================
// ERROR FORMATTING
// ============================================================================

#[test]
fn test_errors_name_the_offending_command() {
    let err = ProtocolError::ShortFrame { cmd: Cmd::GAME_INFO };
    assert!(err.to_string().contains("GAME_INFO"));

    let err = ProtocolError::LongFrame {
        cmd: Cmd::BALANCE,
        leftover: 4,
    };
    assert!(err.to_string().contains("BALANCE"));
    assert!(err.to_string().contains('4'));

    let err = ProtocolError::UnknownCommand(0xEE);
    assert!(err.to_string().contains("238"));
}
