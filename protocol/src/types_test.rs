use super::*;

fn sample_game_state_json() -> serde_json::Value {
    serde_json::json!({
        "players": ["red", "blue", "orange", "white"],
        "current_turn_index": 1,
        "phase": "GAME_LOOP",
        "buildings": [
            {
                "owner": "red",
                "type": "settlement",
                "location": { "q": 0, "r": -1, "corner": 2 }
            },
            {
                "owner": "blue",
                "type": "city",
                "location": { "q": 1, "r": 0, "corner": 0 }
            }
        ],
        "roads": [
            { "owner": "red", "location": { "q": 0, "r": 0, "edge": 0 } }
        ],
        "inventories": {
            "blue": { "lumber": 2, "brick": 1 }
        },
        "last_dice_result": 8,
        "turn_sub_phase": "BUILD_TRADE",
        "logs": [
            { "message": "rolled 8", "player_color": "blue", "timestamp": 1000.5 },
            { "message": "game started", "timestamp": 999.0 }
        ]
    })
}

// =============================================================
// Phase / SubPhase wire tags
// =============================================================

#[test]
fn phase_round_trips_known_tags() {
    for tag in ["INITIAL_PLACEMENT_1", "INITIAL_PLACEMENT_2", "GAME_LOOP"] {
        assert_eq!(Phase::from_wire(tag).as_str(), tag);
    }
}

#[test]
fn phase_maps_unrecognized_tags_to_unknown() {
    assert_eq!(Phase::from_wire("ROBBER_PLACEMENT"), Phase::Unknown);
    assert!(!Phase::from_wire("ROBBER_PLACEMENT").is_game_loop());
}

#[test]
fn only_game_loop_is_the_main_loop() {
    assert!(Phase::GameLoop.is_game_loop());
    assert!(!Phase::InitialPlacement1.is_game_loop());
    assert!(!Phase::InitialPlacement2.is_game_loop());
}

#[test]
fn sub_phase_parses_wire_tags() {
    assert_eq!(SubPhase::from_wire("ROLL_DICE"), SubPhase::RollDice);
    assert_eq!(SubPhase::from_wire("BUILD_TRADE"), SubPhase::BuildTrade);
    assert_eq!(SubPhase::from_wire("DISCARD"), SubPhase::Unknown);
}

#[test]
fn phase_deserializes_from_a_json_string() {
    let phase: Phase = serde_json::from_value(serde_json::json!("GAME_LOOP")).expect("phase");
    assert_eq!(phase, Phase::GameLoop);
}

// =============================================================
// GameState deserialization
// =============================================================

#[test]
fn game_state_deserializes_the_full_server_shape() {
    let state: GameState = serde_json::from_value(sample_game_state_json()).expect("game state");

    assert_eq!(state.players.len(), 4);
    assert_eq!(state.current_turn_index, 1);
    assert_eq!(state.phase, Phase::GameLoop);
    assert_eq!(state.turn_sub_phase, Some(SubPhase::BuildTrade));
    assert_eq!(state.last_dice_result, Some(8));
    assert_eq!(state.buildings.len(), 2);
    assert_eq!(state.buildings[1].kind, BuildingKind::City);
    assert_eq!(state.roads[0].location, EdgeLocation { q: 0, r: 0, edge: 0 });
    assert_eq!(state.logs.len(), 2);
    assert_eq!(state.logs[1].player_color, None);
}

#[test]
fn game_state_tolerates_missing_optional_fields() {
    let state: GameState = serde_json::from_value(serde_json::json!({
        "players": ["red", "blue"],
        "current_turn_index": 0,
        "phase": "INITIAL_PLACEMENT_1"
    }))
    .expect("minimal game state");

    assert!(state.buildings.is_empty());
    assert!(state.roads.is_empty());
    assert!(state.inventories.is_empty());
    assert_eq!(state.last_dice_result, None);
    assert_eq!(state.turn_sub_phase, None);
}

#[test]
fn building_kind_uses_the_type_wire_field() {
    let json = serde_json::to_value(Building {
        owner: PlayerColor::Red,
        kind: BuildingKind::Settlement,
        location: VertexLocation { q: 0, r: 0, corner: 0 },
    })
    .expect("serialize building");
    assert_eq!(json.get("type"), Some(&serde_json::json!("settlement")));
}

// =============================================================
// GameState helpers
// =============================================================

#[test]
fn current_player_follows_the_turn_index() {
    let state: GameState = serde_json::from_value(sample_game_state_json()).expect("game state");
    assert_eq!(state.current_player(), Some(PlayerColor::Blue));
}

#[test]
fn current_player_is_none_when_the_index_is_out_of_range() {
    let state = GameState { current_turn_index: 9, ..GameState::default() };
    assert_eq!(state.current_player(), None);
}

#[test]
fn resource_count_defaults_missing_entries_to_zero() {
    let state: GameState = serde_json::from_value(sample_game_state_json()).expect("game state");
    assert_eq!(state.resource_count(PlayerColor::Blue, Resource::Lumber), 2);
    assert_eq!(state.resource_count(PlayerColor::Blue, Resource::Ore), 0);
    assert_eq!(state.resource_count(PlayerColor::Red, Resource::Lumber), 0);
}

// =============================================================
// Costs and metadata tables
// =============================================================

#[test]
fn cost_tables_match_the_ruleset() {
    assert_eq!(ROAD_COST, [(Resource::Lumber, 1), (Resource::Brick, 1)]);
    assert_eq!(CITY_COST, [(Resource::Grain, 2), (Resource::Ore, 3)]);
    assert_eq!(SETTLEMENT_COST.len(), 4);
}

#[test]
fn cost_emojis_repeats_per_unit() {
    assert_eq!(cost_emojis(&CITY_COST), "🌾🌾🪨🪨🪨");
    assert_eq!(cost_emojis(&[]), "");
}

#[test]
fn every_resource_has_metadata() {
    for resource in Resource::ALL {
        assert!(!resource.emoji().is_empty());
        assert!(resource.tile_color().starts_with('#'));
        assert!(!resource.as_str().is_empty());
    }
}

#[test]
fn player_colors_serialize_lowercase() {
    let json = serde_json::to_value(PlayerColor::Orange).expect("serialize color");
    assert_eq!(json, serde_json::json!("orange"));
    assert!(PlayerColor::White.css_color().starts_with('#'));
}
