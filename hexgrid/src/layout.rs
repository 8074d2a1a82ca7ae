//! Pixel placement for the pointy-top hex layout.
//!
//! All placement is a pure function of axial coordinates and the hex size;
//! the size itself is derived from the viewport width so the whole board
//! reflows on resize.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::axial::Axial;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Widest the board area gets regardless of viewport, in CSS pixels.
pub const MAX_BOARD_WIDTH_PX: f64 = 800.0;

/// Fraction of the available width the board occupies.
pub const BOARD_WIDTH_RATIO: f64 = 0.95;

/// Fraction of the full hex size used when drawing a tile, leaving a seam
/// between neighbors.
pub const TILE_FILL_RATIO: f64 = 0.95;

/// A point in board-local pixel space, origin at the center hex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Usable board width for a given viewport width.
#[must_use]
pub fn display_width(viewport_width: f64) -> f64 {
    viewport_width.min(MAX_BOARD_WIDTH_PX) * BOARD_WIDTH_RATIO
}

/// Hex size (center-to-corner radius) that fits a five-hex-wide board into
/// `display_width`.
#[must_use]
pub fn hex_size(display_width: f64) -> f64 {
    display_width / (5.0 * SQRT_3)
}

/// Total pixel height of the board area for a given hex size.
#[must_use]
pub fn board_height(hex_size: f64) -> f64 {
    8.0 * hex_size
}

/// Pixel center of a hex (pointy-top axial-to-pixel transform).
#[must_use]
pub fn hex_center(hex: Axial, size: f64) -> Point {
    Point {
        x: size * (SQRT_3 * f64::from(hex.q) + SQRT_3 / 2.0 * f64::from(hex.r)),
        y: size * (3.0 / 2.0 * f64::from(hex.r)),
    }
}

/// Offset from a hex center to corner `c`, at angle `-90° + 60°·c` and
/// distance `size`.
#[must_use]
pub fn corner_offset(c: u8, size: f64) -> Point {
    let angle = (f64::from(c) * 60.0 - 90.0).to_radians();
    Point { x: size * angle.cos(), y: size * angle.sin() }
}

/// Offset from a hex center to the midpoint of edge `e`, at angle
/// `-60° + 60°·e` and distance `size·√3/2`.
#[must_use]
pub fn edge_midpoint_offset(e: u8, size: f64) -> Point {
    let angle = (f64::from(e) * 60.0 - 60.0).to_radians();
    let dist = size * SQRT_3 / 2.0;
    Point { x: dist * angle.cos(), y: dist * angle.sin() }
}

/// Rotation in degrees for drawing edge `e` as an oriented segment.
#[must_use]
pub fn edge_rotation_degrees(e: u8) -> f64 {
    30.0 + f64::from(e) * 60.0
}
