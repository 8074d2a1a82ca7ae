//! Interaction rules: which controls are offered for the current game state
//! and what a pointer event on a board feature should do.
//!
//! DESIGN
//! ======
//! Everything here is a pure function of the latest snapshot plus the armed
//! build mode, so the whole gate is testable without a browser. The rules
//! are advisory: the server remains the sole arbiter of legality, and the
//! next snapshot is rendered as-is even when it contradicts a local
//! estimate. Nothing is rolled back.

#[cfg(test)]
#[path = "interact_test.rs"]
mod interact_test;

use hexgrid::{Edge, Vertex};
use protocol::{ClientIntent, GameState, SubPhase};

use crate::state::ui::BuildMode;

/// Decision for a pointer event on a board feature.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Emit immediately.
    Emit(ClientIntent),
    /// Emit only after the user confirms the upgrade.
    ConfirmCity(ClientIntent),
    /// Silently ignore the click.
    Ignore(IgnoreReason),
}

/// Why a click was ignored; used only for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No game snapshot has arrived yet.
    NotSynced,
    /// Dice must be rolled before building.
    AwaitingDice,
    /// No matching build mode is armed.
    NoModeArmed,
}

impl IgnoreReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotSynced => "no game state yet",
            Self::AwaitingDice => "cannot build, roll dice first",
            Self::NoModeArmed => "no matching build mode armed",
        }
    }
}

fn awaiting_dice(game: &GameState) -> bool {
    game.turn_sub_phase == Some(SubPhase::RollDice)
}

/// Decide what a click on a vertex hit target does.
///
/// During the main loop the armed build mode selects settlement or city
/// placement. Outside it, setup placement has no cost and no mode: a
/// settlement intent is emitted unconditionally.
#[must_use]
pub fn vertex_click(game: Option<&GameState>, mode: BuildMode, vertex: Vertex) -> ClickOutcome {
    let Some(game) = game else {
        return ClickOutcome::Ignore(IgnoreReason::NotSynced);
    };

    let settlement = ClientIntent::BuildSettlement { q: vertex.q, r: vertex.r, corner: vertex.c };

    if game.phase.is_game_loop() {
        if awaiting_dice(game) {
            return ClickOutcome::Ignore(IgnoreReason::AwaitingDice);
        }
        match mode {
            BuildMode::City => ClickOutcome::ConfirmCity(ClientIntent::BuildCity {
                q: vertex.q,
                r: vertex.r,
                corner: vertex.c,
            }),
            BuildMode::Settlement => ClickOutcome::Emit(settlement),
            BuildMode::None | BuildMode::Road => ClickOutcome::Ignore(IgnoreReason::NoModeArmed),
        }
    } else {
        ClickOutcome::Emit(settlement)
    }
}

/// Decide what a click on an edge hit target does.
///
/// Same two-branch split as [`vertex_click`]: mode-gated during the main
/// loop, unconditional during setup.
#[must_use]
pub fn edge_click(game: Option<&GameState>, mode: BuildMode, edge: Edge) -> ClickOutcome {
    let Some(game) = game else {
        return ClickOutcome::Ignore(IgnoreReason::NotSynced);
    };

    let intent = ClientIntent::BuildRoad { q: edge.q, r: edge.r, edge: edge.e };

    if game.phase.is_game_loop() {
        if awaiting_dice(game) {
            return ClickOutcome::Ignore(IgnoreReason::AwaitingDice);
        }
        if mode != BuildMode::Road {
            return ClickOutcome::Ignore(IgnoreReason::NoModeArmed);
        }
        ClickOutcome::Emit(intent)
    } else {
        ClickOutcome::Emit(intent)
    }
}

/// Resolve an outcome into the intent to send (if any) and the next build
/// mode.
///
/// The mode clears as soon as an intent is emitted, before any server
/// acknowledgement. `confirmed` carries the answer from the synchronous
/// confirmation gate and is consulted only for city upgrades; a declined
/// confirmation leaves the armed mode in place.
#[must_use]
pub fn resolve_outcome(
    outcome: ClickOutcome,
    current_mode: BuildMode,
    confirmed: bool,
) -> (Option<ClientIntent>, BuildMode) {
    match outcome {
        ClickOutcome::Emit(intent) => (Some(intent), BuildMode::None),
        ClickOutcome::ConfirmCity(intent) => {
            if confirmed {
                (Some(intent), BuildMode::None)
            } else {
                (None, current_mode)
            }
        }
        ClickOutcome::Ignore(_) => (None, current_mode),
    }
}

/// The end-turn action: its intent plus the unconditional mode clear.
#[must_use]
pub fn end_turn() -> (ClientIntent, BuildMode) {
    (ClientIntent::EndTurn, BuildMode::None)
}

/// Whether the roll-dice control is offered.
///
/// An unset sub-phase defaults to the roll action.
#[must_use]
pub fn can_roll(game: &GameState) -> bool {
    game.phase.is_game_loop() && matches!(game.turn_sub_phase, None | Some(SubPhase::RollDice))
}

/// Whether the build and end-turn controls are offered.
#[must_use]
pub fn build_controls_open(game: &GameState) -> bool {
    game.phase.is_game_loop() && !can_roll(game)
}

/// Whether the acting player's known inventory covers the cost of `mode`.
///
/// The acting player is the player whose turn it is; affordance is an
/// optimistic estimate and the server re-checks every intent.
#[must_use]
pub fn can_afford(game: &GameState, mode: BuildMode) -> bool {
    let Some(player) = game.current_player() else {
        return false;
    };
    mode.cost()
        .iter()
        .all(|&(resource, amount)| game.resource_count(player, resource) >= amount)
}
