use super::*;

/// The 19 axial coordinates of a radius-2 hex board, in scan order.
fn radius_two_board() -> Vec<Axial> {
    let mut hexes = Vec::new();
    for q in -2..=2 {
        for r in -2..=2 {
            if (-2..=2).contains(&(q + r)) {
                hexes.push(Axial::new(q, r));
            }
        }
    }
    hexes
}

// =============================================================
// Deduplication
// =============================================================

#[test]
fn radius_two_board_has_54_vertices_and_72_edges() {
    let geometry = project_board(&radius_two_board(), 40.0);
    assert_eq!(geometry.vertices.len(), 54);
    assert_eq!(geometry.edges.len(), 72);
}

#[test]
fn every_corner_resolves_to_a_projected_vertex() {
    let hexes = radius_two_board();
    let geometry = project_board(&hexes, 40.0);
    let ids: std::collections::HashSet<Vertex> =
        geometry.vertices.iter().map(|v| v.vertex).collect();

    for hex in &hexes {
        for c in 0..6 {
            assert!(
                ids.contains(&Vertex::normalize(hex.q, hex.r, c)),
                "corner {c} of ({},{}) missing from projection",
                hex.q,
                hex.r
            );
        }
    }
}

#[test]
fn every_side_resolves_to_a_projected_edge() {
    let hexes = radius_two_board();
    let geometry = project_board(&hexes, 40.0);
    let ids: std::collections::HashSet<Edge> = geometry.edges.iter().map(|e| e.edge).collect();

    for hex in &hexes {
        for e in 0..6 {
            assert!(ids.contains(&Edge::normalize(hex.q, hex.r, e)));
        }
    }
}

#[test]
fn single_hex_projects_six_of_each() {
    let geometry = project_board(&[Axial::new(0, 0)], 40.0);
    assert_eq!(geometry.vertices.len(), 6);
    assert_eq!(geometry.edges.len(), 6);
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn projection_is_deterministic() {
    let hexes = radius_two_board();
    let first = project_board(&hexes, 40.0);
    let second = project_board(&hexes, 40.0);
    assert_eq!(first, second);
}

#[test]
fn first_encounter_order_is_preserved() {
    let hexes = radius_two_board();
    let geometry = project_board(&hexes, 40.0);

    // The first projected vertex is the canonical form of the first hex's
    // corner 0, placed relative to that hex.
    let first_hex = hexes[0];
    assert_eq!(
        geometry.vertices[0].vertex,
        Vertex::normalize(first_hex.q, first_hex.r, 0)
    );
}

#[test]
fn shared_features_keep_first_seen_geometry() {
    // Two adjacent hexes: the shared edge appears once.
    let hexes = [Axial::new(0, 0), Axial::new(1, -1)];
    let geometry = project_board(&hexes, 40.0);
    assert_eq!(geometry.edges.len(), 11);

    let shared = Edge::normalize(0, 0, 0);
    let occurrences = geometry
        .edges
        .iter()
        .filter(|e| e.edge == shared)
        .count();
    assert_eq!(occurrences, 1);
}
