//! A single resource tile.

use leptos::prelude::*;

use protocol::Resource;

/// Pointy-top hex tile with an optional number token.
///
/// Width is `√3·size`, height `2·size`; the tile is centered on `(x, y)`
/// via a CSS transform and clipped to a hexagon.
#[component]
pub fn Hexagon(x: f64, y: f64, size: f64, resource: Resource, number: Option<u8>) -> impl IntoView {
    let width = 3.0_f64.sqrt() * size;
    let height = 2.0 * size;

    view! {
        <div
            class="hex-tile"
            style:left=format!("{x}px")
            style:top=format!("{y}px")
            style:width=format!("{width}px")
            style:height=format!("{height}px")
        >
            <div class="hex-tile__fill" style:background-color=resource.tile_color()>
                {number.map(|n| {
                    view! {
                        <div class="hex-tile__token">
                            <span
                                class="hex-tile__pips"
                                class:hex-tile__pips--hot={n == 6 || n == 8}
                            >
                                {n}
                            </span>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
