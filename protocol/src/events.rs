//! The named-event envelope codec.
//!
//! Every channel message is a JSON object `{"event": <name>, "data":
//! <payload>}`; unit-payload intents omit `data`. Decode is a two-step
//! match on the event name so an unknown event is distinguishable from a
//! malformed payload.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::{Deserialize, Serialize};

use crate::types::{BoardData, GameState};

/// Error returned by [`decode_server_event`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text was not a valid JSON event envelope, or the payload did not
    /// match the event's schema.
    #[error("malformed event envelope: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The envelope named an event this client does not handle.
    #[error("unknown event: {0}")]
    UnknownEvent(String),
}

/// A snapshot push from the server. Each replaces its state slot wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Full board replacement (`board_state`).
    BoardState(BoardData),
    /// Full game-state replacement (`game_state`).
    GameState(GameState),
}

/// An outbound player intent.
///
/// Fire-and-forget: no acknowledgement is expected and nothing is tracked
/// in flight; the next snapshot reflects whatever the server accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientIntent {
    BuildSettlement { q: i32, r: i32, corner: u8 },
    BuildCity { q: i32, r: i32, corner: u8 },
    BuildRoad { q: i32, r: i32, edge: u8 },
    RollDice,
    EndTurn,
    /// Diagnostic resource grant for exercising build flows.
    TestResources,
}

#[derive(Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Decode one inbound text message.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] for invalid JSON or a payload that
/// does not match the named event, and [`CodecError::UnknownEvent`] for an
/// event name this client does not handle.
pub fn decode_server_event(text: &str) -> Result<ServerEvent, CodecError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    match envelope.event.as_str() {
        "board_state" => Ok(ServerEvent::BoardState(serde_json::from_value(envelope.data)?)),
        "game_state" => Ok(ServerEvent::GameState(serde_json::from_value(envelope.data)?)),
        other => Err(CodecError::UnknownEvent(other.to_owned())),
    }
}

/// Encode an intent as a JSON event envelope.
///
/// # Panics
///
/// Never panics in practice; these types contain only plain data and
/// serialize infallibly.
#[must_use]
pub fn encode_intent(intent: &ClientIntent) -> String {
    serde_json::to_string(intent).unwrap_or_default()
}
