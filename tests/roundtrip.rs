#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Round-trip coverage for every registered message schema: encode followed
//! by decode must yield a message equal to the original.

use std::io::Cursor;

use poker_protocol::protocol::message::{Message, REGISTERED};
use poker_protocol::protocol::types::*;
use poker_protocol::read_frame;

fn sample_messages() -> Vec<Message> {
    vec![
        Message::Good {
            cmd: Cmd::JOIN,
            extra: Big(0),
        },
        Message::Bad {
            cmd: Cmd::JOIN,
            error: Small(3),
        },
        Message::YouAre { pid: Id(1001) },
        Message::YourGame { gid: Id(-4) },
        Message::SeatInfo {
            gid: Id(12),
            seat_num: Small(4),
            state: PlayerState(PlayerState::PLAY.0 | PlayerState::BET.0),
            pid: Id(77),
            in_play: Amount::from_hundredths(123_456),
        },
        Message::GameInfo {
            gid: Id(12),
            table_name: Text::new("High Rollers").unwrap(),
            game_type: GameType::TEXAS_HOLDEM,
            limit_type: LimitType::POT,
            low: Amount::from_hundredths(100),
            high: Amount::from_hundredths(200),
            num_seats: Big(9),
            required: Big(2),
            joined: Big(5),
            waiting: Big(0),
        },
        Message::NotifyJoin {
            gid: Id(12),
            pid: Id(77),
            seat: Small(4),
            amount: Amount::from_f64(19.99).unwrap(),
        },
        Message::NotifyCancelGame { gid: Id(12) },
        Message::NotifyLeave {
            gid: Id(12),
            pid: Id(77),
        },
        Message::NotifyStartGame { gid: Id(12) },
        Message::NotifyButton {
            gid: Id(12),
            button: Small(2),
        },
        Message::NotifySb {
            gid: Id(12),
            sb: Small(3),
        },
        Message::NotifyBb {
            gid: Id(12),
            bb: Small(4),
        },
        Message::BetReq {
            gid: Id(12),
            call_amount: Amount::from_hundredths(250),
            raise_min: Amount::from_hundredths(250),
            raise_max: Amount::from_hundredths(10_000),
        },
        Message::Balance {
            balance: Amount::from_hundredths(0),
            in_play: Amount::from_hundredths(-500),
        },
        Message::NotifyRaise {
            gid: Id(12),
            pid: Id(77),
            raise_amount: Amount::from_hundredths(500),
            call_amount: Amount::from_hundredths(250),
        },
        Message::NotifyDraw {
            gid: Id(12),
            pid: Id(77),
            rank: Rank::ACE,
            suit: Suit::SPADES,
        },
        Message::NotifyShared {
            gid: Id(12),
            rank: Rank::TEN,
            suit: Suit::DIAMONDS,
        },
        Message::NotifyHand {
            gid: Id(12),
            pid: Id(77),
            rank: Small(6),
            face1: Small(13),
            face2: Small(12),
        },
        Message::NotifyEndGame { gid: Id(12) },
        Message::NotifyChat {
            gid: Id(12),
            pid: Id(77),
            msg: Text::new("nice hand").unwrap(),
        },
        Message::GameStage {
            gid: Id(12),
            stage: GameStage::RIVER,
        },
        Message::ShowCards {
            gid: Id(12),
            pid: Id(77),
            cards: vec![
                Card::new(Rank::ACE, Suit::HEARTS),
                Card::new(Rank::ACE, Suit::CLUBS),
            ],
        },
        Message::NotifyWin {
            gid: Id(12),
            pid: Id(77),
            amount: Amount::from_hundredths(987_654),
        },
        Message::PlayerInfo {
            pid: Id(77),
            total_in_play: Amount::from_hundredths(500_000),
            nick: Text::new("alice").unwrap(),
            location: Text::new("").unwrap(),
        },
        Message::Login {
            nick: Text::new("alice").unwrap(),
            pass: Text::new("secret").unwrap(),
        },
    ]
}

#[test]
fn test_every_registered_schema_round_trips() {
    let messages = sample_messages();
    assert_eq!(
        messages.len(),
        REGISTERED.len(),
        "sample set must cover the whole registry"
    );

    for original in messages {
        let mut wire = Vec::new();
        original
            .write_to(&mut wire)
            .unwrap_or_else(|e| panic!("{} should encode: {e}", original.cmd()));

        let mut cursor = Cursor::new(&wire[..]);
        let decoded = read_frame(&mut cursor)
            .unwrap_or_else(|e| panic!("{} should decode: {e}", original.cmd()));

        assert_eq!(decoded, original);
        assert_eq!(decoded.cmd(), original.cmd());
        assert_eq!(
            cursor.position() as usize,
            wire.len(),
            "decode must consume exactly one frame"
        );
    }
}

#[test]
fn test_sample_set_tags_match_registry() {
    let mut tags: Vec<Cmd> = sample_messages().iter().map(Message::cmd).collect();
    let mut registered = REGISTERED.to_vec();
    tags.sort_by_key(|c| c.0);
    registered.sort_by_key(|c| c.0);
    assert_eq!(tags, registered);
}

#[test]
fn test_consecutive_frames_on_one_stream() {
    let mut wire = Vec::new();
    for msg in sample_messages() {
        msg.write_to(&mut wire).expect("encode");
    }

    let mut cursor = Cursor::new(&wire[..]);
    for expected in sample_messages() {
        let decoded = read_frame(&mut cursor).expect("each frame should decode in sequence");
        assert_eq!(decoded, expected);
    }
    assert_eq!(cursor.position() as usize, wire.len());
}

#[test]
fn test_empty_card_list_round_trips() {
    let original = Message::ShowCards {
        gid: Id(1),
        pid: Id(2),
        cards: vec![],
    };
    let mut wire = Vec::new();
    original.write_to(&mut wire).expect("encode");

    let decoded = read_frame(&mut Cursor::new(&wire[..])).expect("decode");
    assert_eq!(decoded, original);
}

#[test]
fn test_full_card_list_round_trips() {
    let cards: Vec<Card> = (0u8..255)
        .map(|i| Card::new(Rank(i % 13 + 1), Suit(i % 4 + 1)))
        .collect();
    let original = Message::ShowCards {
        gid: Id(1),
        pid: Id(2),
        cards,
    };

    let mut wire = Vec::new();
    original.write_to(&mut wire).expect("encode");

    let decoded = read_frame(&mut Cursor::new(&wire[..])).expect("decode");
    assert_eq!(decoded, original);
}

#[test]
fn test_text_255_round_trips_in_chat() {
    let original = Message::NotifyChat {
        gid: Id(1),
        pid: Id(2),
        msg: Text::new("m".repeat(255)).expect("255 bytes is within limit"),
    };

    let mut wire = Vec::new();
    original.write_to(&mut wire).expect("encode");

    let decoded = read_frame(&mut Cursor::new(&wire[..])).expect("decode");
    assert_eq!(decoded, original);
}

#[test]
fn test_unrecognized_enumeration_values_round_trip() {
    // Enumeration bytes are not validated by the codec; contextual handling
    // is the application's job.
    let original = Message::GameStage {
        gid: Id(1),
        stage: GameStage(250),
    };

    let mut wire = Vec::new();
    original.write_to(&mut wire).expect("encode");

    let decoded = read_frame(&mut Cursor::new(&wire[..])).expect("decode");
    assert_eq!(decoded, original);
}
