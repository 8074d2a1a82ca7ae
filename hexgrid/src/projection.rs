//! Deduplicated board geometry for rendering and hit-testing.
//!
//! The server addresses corners and edges per hex, so walking every hex
//! visits each physical feature up to three (corners) or two (edges) times.
//! The projection canonicalizes each visit and keeps first-seen geometry
//! only; hexes sharing a feature compute identical pixel placement for it
//! by symmetry, so which hex wins is immaterial. The derivation is pure and
//! total with no caching: it is cheap enough to recompute on every change
//! of the hex collection or the sizing parameter.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use std::collections::HashSet;

use crate::axial::Axial;
use crate::canonical::{Edge, Vertex};
use crate::layout::{Point, corner_offset, edge_midpoint_offset, edge_rotation_degrees, hex_center};

/// A canonical vertex with its pixel placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertex {
    pub vertex: Vertex,
    pub at: Point,
}

/// A canonical edge with its midpoint placement and drawing rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedEdge {
    pub edge: Edge,
    pub at: Point,
    pub rotation_degrees: f64,
}

/// The full deduplicated vertex and edge sets, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardGeometry {
    pub vertices: Vec<ProjectedVertex>,
    pub edges: Vec<ProjectedEdge>,
}

/// Derive the board geometry for the given hexes and hex size.
#[must_use]
pub fn project_board(hexes: &[Axial], size: f64) -> BoardGeometry {
    let mut seen_vertices = HashSet::new();
    let mut seen_edges = HashSet::new();
    let mut geometry = BoardGeometry::default();

    for &hex in hexes {
        let center = hex_center(hex, size);

        for c in 0..6u8 {
            let vertex = Vertex::normalize(hex.q, hex.r, c);
            if seen_vertices.insert(vertex) {
                let offset = corner_offset(c, size);
                geometry.vertices.push(ProjectedVertex {
                    vertex,
                    at: Point::new(center.x + offset.x, center.y + offset.y),
                });
            }
        }

        for e in 0..6u8 {
            let edge = Edge::normalize(hex.q, hex.r, e);
            if seen_edges.insert(edge) {
                let offset = edge_midpoint_offset(e, size);
                geometry.edges.push(ProjectedEdge {
                    edge,
                    at: Point::new(center.x + offset.x, center.y + offset.y),
                    rotation_degrees: edge_rotation_degrees(e),
                });
            }
        }
    }

    geometry
}
