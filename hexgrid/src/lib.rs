//! Hex-grid coordinate model and board projection.
//!
//! This crate owns the pure geometry of the pointy-top hex board: axial
//! coordinates, the canonical identifiers for corners and edges shared by
//! adjacent hexes, pixel layout, and the deduplicated projection used to
//! place hit targets. It has no DOM, network, or framework dependencies, so
//! every rule here is unit-testable on any platform.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`axial`] | Axial coordinates and neighbor offsets |
//! | [`canonical`] | Canonical vertex/edge identifiers |
//! | [`layout`] | Pixel placement for hexes, corners, and edges |
//! | [`projection`] | Deduplicated board geometry for rendering |

pub mod axial;
pub mod canonical;
pub mod layout;
pub mod projection;

pub use axial::Axial;
pub use canonical::{Edge, Vertex};
pub use layout::Point;
pub use projection::{BoardGeometry, ProjectedEdge, ProjectedVertex, project_board};
