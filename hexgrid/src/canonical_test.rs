use super::*;

// =============================================================
// Vertex normalization
// =============================================================

#[test]
fn vertex_normalize_is_idempotent() {
    for q in -2..=2 {
        for r in -2..=2 {
            for c in 0..6 {
                let once = Vertex::normalize(q, r, c);
                let twice = Vertex::normalize(once.q, once.r, once.c);
                assert_eq!(once, twice, "({q},{r},{c}) re-normalized differently");
            }
        }
    }
}

#[test]
fn vertex_aliases_agree_on_the_canonical_id() {
    // All three local names of the corner above the origin hex.
    let from_origin = Vertex::normalize(0, 0, 0);
    let from_top_left = Vertex::normalize(0, -1, 2);
    let from_top_right = Vertex::normalize(1, -1, 4);

    assert_eq!(from_origin, from_top_left);
    assert_eq!(from_origin, from_top_right);
}

#[test]
fn vertex_aliases_agree_for_every_corner_index() {
    for q in -2..=2 {
        for r in -2..=2 {
            for c in 0..6 {
                let canonical = Vertex::normalize(q, r, c);
                for (dq, dr, alias) in CORNER_ALIASES[usize::from(c) % 6] {
                    assert_eq!(
                        Vertex::normalize(q + dq, r + dr, alias),
                        canonical,
                        "alias of ({q},{r},{c}) normalized differently"
                    );
                }
            }
        }
    }
}

#[test]
fn vertex_canonical_is_lexicographically_smallest() {
    // Candidates for (0,0,0) are (0,0,0), (0,-1,2), and (1,-1,4).
    assert_eq!(Vertex::normalize(0, 0, 0), Vertex { q: 0, r: -1, c: 2 });
}

#[test]
fn vertex_ordering_follows_field_order() {
    assert!(Vertex { q: 0, r: -1, c: 5 } < Vertex { q: 0, r: 0, c: 0 });
    assert!(Vertex { q: -1, r: 9, c: 5 } < Vertex { q: 0, r: -9, c: 0 });
}

// =============================================================
// Edge normalization
// =============================================================

#[test]
fn edge_normalize_is_idempotent() {
    for q in -2..=2 {
        for r in -2..=2 {
            for e in 0..6 {
                let once = Edge::normalize(q, r, e);
                let twice = Edge::normalize(once.q, once.r, once.e);
                assert_eq!(once, twice, "({q},{r},{e}) re-normalized differently");
            }
        }
    }
}

#[test]
fn edge_aliases_agree_on_the_canonical_id() {
    assert_eq!(Edge::normalize(0, 0, 0), Edge::normalize(1, -1, 3));
}

#[test]
fn edge_aliases_agree_for_every_edge_index() {
    for q in -2..=2 {
        for r in -2..=2 {
            for e in 0..6 {
                let canonical = Edge::normalize(q, r, e);
                let (dq, dr, alias) = EDGE_ALIASES[usize::from(e) % 6];
                assert_eq!(
                    Edge::normalize(q + dq, r + dr, alias),
                    canonical,
                    "alias of ({q},{r},{e}) normalized differently"
                );
            }
        }
    }
}

#[test]
fn edge_canonical_keeps_the_local_name_when_it_is_smallest() {
    assert_eq!(Edge::normalize(0, 0, 0), Edge { q: 0, r: 0, e: 0 });
}
