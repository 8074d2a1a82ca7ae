#[cfg(test)]
#[path = "axial_test.rs"]
mod axial_test;

use serde::{Deserialize, Serialize};

/// Clockwise neighbor offsets, starting at the top-right side.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [(1, -1), (1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1)];

/// An axial coordinate on a pointy-top hex grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    #[must_use]
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The hex across side `side` (0..6, clockwise from top-right).
    #[must_use]
    pub fn neighbor(self, side: u8) -> Self {
        debug_assert!(side < 6, "hex side index out of range");
        let (dq, dr) = NEIGHBOR_OFFSETS[usize::from(side % 6)];
        Self { q: self.q + dq, r: self.r + dr }
    }
}
