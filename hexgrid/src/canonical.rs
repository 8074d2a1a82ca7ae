//! Canonical identifiers for shared board corners and edges.
//!
//! Up to three hexes touch each corner and two share each edge, and each of
//! them addresses the feature with its own local `(q, r, index)` triple.
//! The canonical form is the lexicographically smallest of the co-incident
//! triples, so every hex that touches a feature arrives at the same
//! identifier regardless of iteration order. Alias triples may name hexes
//! that do not exist on the board; they feed the ordering arithmetic only
//! and are never looked up against the hex collection.

#[cfg(test)]
#[path = "canonical_test.rs"]
mod canonical_test;

use serde::{Deserialize, Serialize};

/// For each corner index, the two other `(dq, dr, corner)` local names of
/// the same physical corner under the pointy-top neighbor layout.
const CORNER_ALIASES: [[(i32, i32, u8); 2]; 6] = [
    [(0, -1, 2), (1, -1, 4)],
    [(1, -1, 3), (1, 0, 5)],
    [(1, 0, 4), (0, 1, 0)],
    [(0, 1, 5), (-1, 1, 1)],
    [(-1, 1, 0), (-1, 0, 2)],
    [(-1, 0, 1), (0, -1, 3)],
];

/// For each edge index, the single `(dq, dr, edge)` local name the adjacent
/// hex uses for the same physical edge.
const EDGE_ALIASES: [(i32, i32, u8); 6] = [
    (1, -1, 3),
    (1, 0, 4),
    (0, 1, 5),
    (-1, 1, 0),
    (-1, 0, 1),
    (0, -1, 2),
];

/// Canonical identifier for a physical corner of the board.
///
/// Ordering is lexicographic over `(q, r, c)`; the derives rely on field
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    pub q: i32,
    pub r: i32,
    pub c: u8,
}

impl Vertex {
    /// Canonicalize a hex-local corner reference.
    ///
    /// Idempotent: normalizing an already-canonical vertex returns itself.
    #[must_use]
    pub fn normalize(q: i32, r: i32, c: u8) -> Self {
        debug_assert!(c < 6, "corner index out of range");
        let c = c % 6;
        let [a, b] = CORNER_ALIASES[usize::from(c)];
        let mut candidates = [(q, r, c), (q + a.0, r + a.1, a.2), (q + b.0, r + b.1, b.2)];
        candidates.sort_unstable();
        let (q, r, c) = candidates[0];
        Self { q, r, c }
    }
}

/// Canonical identifier for a physical edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub q: i32,
    pub r: i32,
    pub e: u8,
}

impl Edge {
    /// Canonicalize a hex-local edge reference.
    ///
    /// Idempotent, with the same ordering rule as [`Vertex::normalize`].
    #[must_use]
    pub fn normalize(q: i32, r: i32, e: u8) -> Self {
        debug_assert!(e < 6, "edge index out of range");
        let e = e % 6;
        let (dq, dr, alias) = EDGE_ALIASES[usize::from(e)];
        let mut candidates = [(q, r, e), (q + dq, r + dr, alias)];
        candidates.sort_unstable();
        let (q, r, e) = candidates[0];
        Self { q, r, e }
    }
}
