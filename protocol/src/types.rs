//! Snapshot payload shapes and the closed game enumerations.
//!
//! DESIGN
//! ======
//! These types mirror the server's serialized state so deserialization is
//! lossless and rendering stays schema-driven. Both snapshots replace the
//! client's copy wholesale; nothing here is patched field by field. The
//! small closed sets (resources, player colors, build costs) are tagged
//! enums with total per-variant tables so a missing entry is a compile
//! error rather than a runtime lookup miss.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A resource kind, including the inert desert tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Brick,
    Lumber,
    Wool,
    Grain,
    Ore,
    Desert,
}

impl Resource {
    /// Every variant, in display order.
    pub const ALL: [Self; 6] = [
        Self::Brick,
        Self::Lumber,
        Self::Wool,
        Self::Grain,
        Self::Ore,
        Self::Desert,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brick => "brick",
            Self::Lumber => "lumber",
            Self::Wool => "wool",
            Self::Grain => "grain",
            Self::Ore => "ore",
            Self::Desert => "desert",
        }
    }

    /// Display symbol used in inventories and cost listings.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Brick => "🧱",
            Self::Lumber => "🌲",
            Self::Wool => "🐑",
            Self::Grain => "🌾",
            Self::Ore => "🪨",
            Self::Desert => "❓",
        }
    }

    /// Tile fill color (hex CSS).
    #[must_use]
    pub fn tile_color(self) -> &'static str {
        match self {
            Self::Lumber => "#228B22",
            Self::Brick => "#A52A2A",
            Self::Wool => "#7FFF00",
            Self::Grain => "#FFD700",
            Self::Ore => "#808080",
            Self::Desert => "#F4A460",
        }
    }
}

/// A player, identified by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
    Orange,
    White,
}

impl PlayerColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::White => "white",
        }
    }

    /// Marker color for buildings, roads, and panels (hex CSS).
    #[must_use]
    pub fn css_color(self) -> &'static str {
        match self {
            Self::Red => "#EF4444",
            Self::Blue => "#3B82F6",
            Self::Orange => "#F97316",
            Self::White => "#F8FAFC",
        }
    }
}

/// One board tile, positioned by axial coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hex {
    pub id: i64,
    pub resource: Resource,
    /// Dice pip value; absent for the desert.
    pub number: Option<u8>,
    pub q: i32,
    pub r: i32,
}

/// A corner location as the server addresses it: hex-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexLocation {
    pub q: i32,
    pub r: i32,
    pub corner: u8,
}

/// An edge location as the server addresses it: hex-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeLocation {
    pub q: i32,
    pub r: i32,
    pub edge: u8,
}

/// Settlement or its city upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingKind {
    Settlement,
    City,
}

impl BuildingKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Settlement => "settlement",
            Self::City => "city",
        }
    }
}

/// A placed building. Created and upgraded only by server snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub owner: PlayerColor,
    #[serde(rename = "type")]
    pub kind: BuildingKind,
    pub location: VertexLocation,
}

/// A placed road. Same lifecycle as [`Building`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub owner: PlayerColor,
    pub location: EdgeLocation,
}

/// One entry of the server's append-only event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLog {
    pub message: String,
    #[serde(default)]
    pub player_color: Option<PlayerColor>,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
}

/// Top-level game phase tag.
///
/// Unrecognized tags map to [`Phase::Unknown`], which gates like the setup
/// phases: anything that is not the main loop allows free placement only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    InitialPlacement1,
    InitialPlacement2,
    GameLoop,
    Unknown,
}

impl Phase {
    #[must_use]
    pub fn from_wire(tag: &str) -> Self {
        match tag {
            "INITIAL_PLACEMENT_1" => Self::InitialPlacement1,
            "INITIAL_PLACEMENT_2" => Self::InitialPlacement2,
            "GAME_LOOP" => Self::GameLoop,
            _ => Self::Unknown,
        }
    }

    /// Wire tag; [`Phase::Unknown`] is client-side only and never sent.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialPlacement1 => "INITIAL_PLACEMENT_1",
            Self::InitialPlacement2 => "INITIAL_PLACEMENT_2",
            Self::GameLoop => "GAME_LOOP",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub fn is_game_loop(self) -> bool {
        self == Self::GameLoop
    }
}

impl Serialize for Phase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Phase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&tag))
    }
}

/// Sub-phase within a main-loop turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubPhase {
    /// Dice must be rolled before anything else.
    RollDice,
    /// Building and trading are open until the turn ends.
    BuildTrade,
    Unknown,
}

impl SubPhase {
    #[must_use]
    pub fn from_wire(tag: &str) -> Self {
        match tag {
            "ROLL_DICE" => Self::RollDice,
            "BUILD_TRADE" => Self::BuildTrade,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RollDice => "ROLL_DICE",
            Self::BuildTrade => "BUILD_TRADE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl Serialize for SubPhase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SubPhase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&tag))
    }
}

/// The full authoritative game state, replaced wholesale on every push.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<PlayerColor>,
    pub current_turn_index: usize,
    pub phase: Phase,
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub roads: Vec<Road>,
    #[serde(default)]
    pub inventories: HashMap<PlayerColor, HashMap<Resource, u32>>,
    #[serde(default)]
    pub last_dice_result: Option<u8>,
    #[serde(default)]
    pub turn_sub_phase: Option<SubPhase>,
    #[serde(default)]
    pub logs: Vec<GameLog>,
}

impl GameState {
    /// The player whose turn it currently is, if the index is in range.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerColor> {
        self.players.get(self.current_turn_index).copied()
    }

    /// Known count of one resource in one player's inventory.
    #[must_use]
    pub fn resource_count(&self, player: PlayerColor, resource: Resource) -> u32 {
        self.inventories
            .get(&player)
            .and_then(|inventory| inventory.get(&resource))
            .copied()
            .unwrap_or(0)
    }
}

/// The full board, replaced wholesale on every push.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardData {
    pub hexes: Vec<Hex>,
}

/// Build costs mirrored from the server ruleset; advisory only, the server
/// re-checks every intent.
pub const ROAD_COST: [(Resource, u32); 2] = [(Resource::Lumber, 1), (Resource::Brick, 1)];

pub const SETTLEMENT_COST: [(Resource, u32); 4] = [
    (Resource::Lumber, 1),
    (Resource::Brick, 1),
    (Resource::Wool, 1),
    (Resource::Grain, 1),
];

pub const CITY_COST: [(Resource, u32); 2] = [(Resource::Grain, 2), (Resource::Ore, 3)];

/// Emoji strip for a cost table, one symbol per unit.
#[must_use]
pub fn cost_emojis(cost: &[(Resource, u32)]) -> String {
    let mut out = String::new();
    for &(resource, amount) in cost {
        for _ in 0..amount {
            out.push_str(resource.emoji());
        }
    }
    out
}
