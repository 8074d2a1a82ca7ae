//! Shared wire model for the game channel.
//!
//! This crate owns the payload shapes the server pushes (`board_state`,
//! `game_state`) and the intent events the client emits back. Messages are
//! JSON text envelopes of the form `{"event": <name>, "data": <payload>}`.
//! The codec keeps decode failures typed so the channel adapter can log and
//! drop a bad frame without tearing down the connection.

pub mod events;
pub mod types;

pub use events::{ClientIntent, CodecError, ServerEvent, decode_server_event, encode_intent};
pub use types::{
    BoardData, Building, BuildingKind, CITY_COST, EdgeLocation, GameLog, GameState, Hex, Phase,
    PlayerColor, ROAD_COST, Resource, Road, SETTLEMENT_COST, SubPhase, VertexLocation, cost_emojis,
};
