//! Heads-up display: current turn, phase, and the build-mode banner.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::{BuildMode, UiState};

/// Overlay with the current turn/phase and the armed build mode.
#[component]
pub fn Hud() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let turn = move || {
        session
            .get()
            .game
            .and_then(|g| g.current_player())
            .map(|p| (p.as_str(), p.css_color()))
    };
    let phase = move || session.get().game.map(|g| g.phase.as_str());

    view! {
        <div class="hud">
            <h1 class="hud__title">"Catan"</h1>
            {move || {
                turn().map(|(name, color)| view! {
                    <div class="hud__turn">
                        "Turn: "
                        <span class="hud__player" style:color=color>{name}</span>
                    </div>
                })
            }}
            {move || phase().map(|p| view! { <div class="hud__phase">"Phase: " {p}</div> })}
        </div>

        <Show when=move || ui.get().build_mode != BuildMode::None>
            <div class="hud__build-banner">
                {move || format!("BUILD MODE: click to place {}", ui.get().build_mode.label())}
            </div>
        </Show>
    }
}
