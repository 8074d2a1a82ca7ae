//! Game page: loading screen until the first board snapshot, then the
//! board workspace with its overlays.

use leptos::prelude::*;

use crate::components::board::BoardView;
use crate::components::controls::Controls;
use crate::components::game_log::GameLogPanel;
use crate::components::hud::Hud;
use crate::components::player_panel::PlayerPanels;
use crate::components::status_bar::StatusBar;
use crate::state::session::SessionState;

/// The single page of the client.
///
/// Rendering tolerates partial sync: the board snapshot gates the whole
/// workspace, while game-state-driven overlays simply render empty until
/// their snapshot arrives.
#[component]
pub fn GamePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let synced = move || session.get().board.is_some();

    view! {
        <Show
            when=synced
            fallback=move || {
                view! {
                    <div class="loading-screen">
                        <div class="loading-screen__title">"Loading Catan..."</div>
                        <div class="loading-screen__status">
                            "Status: " {move || session.get().status_text()}
                        </div>
                    </div>
                }
            }
        >
            <div class="game-page">
                <Hud/>
                <Controls/>
                <GameLogPanel/>
                <div class="game-page__board">
                    <BoardView/>
                </div>
                <PlayerPanels/>
                <div class="game-page__status-bar">
                    <StatusBar/>
                </div>
            </div>
        </Show>
    }
}
