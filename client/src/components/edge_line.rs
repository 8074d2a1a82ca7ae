//! A clickable edge hit target.

use leptos::prelude::*;

use protocol::Road;

/// Edge hit target, drawn as an oriented segment; shows a road when
/// occupied.
#[component]
pub fn EdgeLine(
    x: f64,
    y: f64,
    rotation_degrees: f64,
    length: f64,
    road: Option<Road>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="edge-line"
            style:left=format!("{x}px")
            style:top=format!("{y}px")
            style:width=format!("{length}px")
            style:transform=format!("translate(-50%, -50%) rotate({rotation_degrees}deg)")
            on:click=move |_| on_click.run(())
        >
            {match road {
                Some(r) => view! {
                    <div class="edge-line__road" style:background-color=r.owner.css_color()></div>
                }
                .into_any(),
                None => view! { <div class="edge-line__empty"></div> }.into_any(),
            }}
        </div>
    }
}
