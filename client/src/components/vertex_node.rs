//! A clickable corner hit target.

use leptos::prelude::*;

use protocol::{Building, BuildingKind};

/// Corner hit target, rendered as a building marker when occupied.
///
/// The hit area is fixed-size and centered on the canonical corner's pixel
/// position; clicks are forwarded regardless of occupancy and the server
/// decides what they mean.
#[component]
pub fn VertexNode(x: f64, y: f64, building: Option<Building>, on_click: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="vertex-node"
            style:left=format!("{x}px")
            style:top=format!("{y}px")
            on:click=move |_| on_click.run(())
        >
            {match building {
                Some(b) => view! {
                    <div
                        class="vertex-node__building"
                        style:background-color=b.owner.css_color()
                        title=format!("{}'s {}", b.owner.as_str(), b.kind.as_str())
                    >
                        {if b.kind == BuildingKind::City { "🏙️" } else { "🏠" }}
                    </div>
                }
                .into_any(),
                None => view! { <div class="vertex-node__empty"></div> }.into_any(),
            }}
        </div>
    }
}
