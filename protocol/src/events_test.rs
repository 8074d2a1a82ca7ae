use super::*;
use crate::types::{Phase, Resource};

// =============================================================
// Decoding server events
// =============================================================

#[test]
fn decodes_a_board_state_push() {
    let text = r#"{
        "event": "board_state",
        "data": { "hexes": [
            { "id": 0, "resource": "desert", "number": null, "q": 0, "r": 0 },
            { "id": 1, "resource": "lumber", "number": 8, "q": 1, "r": -1 }
        ]}
    }"#;

    let event = decode_server_event(text).expect("board_state");
    let ServerEvent::BoardState(board) = event else {
        panic!("expected a board_state event");
    };
    assert_eq!(board.hexes.len(), 2);
    assert_eq!(board.hexes[0].resource, Resource::Desert);
    assert_eq!(board.hexes[1].number, Some(8));
}

#[test]
fn decodes_a_game_state_push() {
    let text = r#"{
        "event": "game_state",
        "data": {
            "players": ["red", "blue"],
            "current_turn_index": 0,
            "phase": "GAME_LOOP",
            "turn_sub_phase": "ROLL_DICE"
        }
    }"#;

    let event = decode_server_event(text).expect("game_state");
    let ServerEvent::GameState(game) = event else {
        panic!("expected a game_state event");
    };
    assert_eq!(game.phase, Phase::GameLoop);
}

#[test]
fn unknown_event_names_are_reported_as_such() {
    let err = decode_server_event(r#"{"event": "trade_offer", "data": {}}"#).unwrap_err();
    assert!(matches!(err, CodecError::UnknownEvent(name) if name == "trade_offer"));
}

#[test]
fn malformed_json_is_a_codec_error() {
    assert!(matches!(
        decode_server_event("not json"),
        Err(CodecError::Malformed(_))
    ));
}

#[test]
fn mismatched_payload_is_a_codec_error() {
    let err = decode_server_event(r#"{"event": "board_state", "data": {"hexes": 7}}"#).unwrap_err();
    assert!(matches!(err, CodecError::Malformed(_)));
}

// =============================================================
// Encoding intents
// =============================================================

#[test]
fn build_intents_carry_their_location_payload() {
    let text = encode_intent(&ClientIntent::BuildSettlement { q: 2, r: 1, corner: 3 });
    assert_eq!(text, r#"{"event":"build_settlement","data":{"q":2,"r":1,"corner":3}}"#);

    let text = encode_intent(&ClientIntent::BuildRoad { q: -1, r: 0, edge: 5 });
    assert_eq!(text, r#"{"event":"build_road","data":{"q":-1,"r":0,"edge":5}}"#);
}

#[test]
fn payloadless_intents_omit_data() {
    assert_eq!(encode_intent(&ClientIntent::RollDice), r#"{"event":"roll_dice"}"#);
    assert_eq!(encode_intent(&ClientIntent::EndTurn), r#"{"event":"end_turn"}"#);
    assert_eq!(
        encode_intent(&ClientIntent::TestResources),
        r#"{"event":"test_resources"}"#
    );
}

#[test]
fn intents_round_trip_through_the_envelope() {
    let intent = ClientIntent::BuildCity { q: 0, r: -2, corner: 4 };
    let decoded: ClientIntent =
        serde_json::from_str(&encode_intent(&intent)).expect("round trip");
    assert_eq!(decoded, intent);
}
