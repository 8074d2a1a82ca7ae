#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use protocol::{CITY_COST, ROAD_COST, Resource, SETTLEMENT_COST};

/// Client-local interaction state.
///
/// `build_mode` is advisory only: it selects what the next board click
/// attempts, is cleared whenever a build intent is emitted or the turn
/// ends, and is never sent to the server on its own.
#[derive(Clone, Debug)]
pub struct UiState {
    pub build_mode: BuildMode,
    /// Latest known viewport width in CSS pixels; drives board sizing.
    pub container_width: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self { build_mode: BuildMode::None, container_width: 800.0 }
    }
}

/// Which structure the next board click attempts to place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildMode {
    #[default]
    None,
    Road,
    Settlement,
    City,
}

impl BuildMode {
    /// Resource cost of the selected structure; empty when nothing is armed.
    #[must_use]
    pub fn cost(self) -> &'static [(Resource, u32)] {
        match self {
            Self::None => &[],
            Self::Road => &ROAD_COST,
            Self::Settlement => &SETTLEMENT_COST,
            Self::City => &CITY_COST,
        }
    }

    /// Lowercase display label for the build banner.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Road => "road",
            Self::Settlement => "settlement",
            Self::City => "city",
        }
    }
}
