//! Bottom status bar showing connection status and board telemetry.

use leptos::prelude::*;

use crate::state::session::{ConnectionStatus, SessionState};

/// Status bar at the bottom of the game page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let status_class = move || match session.get().connection_status {
        ConnectionStatus::Connected => "status-bar__dot status-bar__dot--connected",
        ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
        ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--disconnected",
    };
    let status_label = move || session.get().status_text();
    let tile_count = move || session.get().board.map_or(0, |b| b.hexes.len());

    view! {
        <div class="status-bar">
            <span class="status-bar__connection">
                <span class=status_class></span>
                {status_label}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__tiles">{move || format!("{} tiles", tile_count())}</span>
        </div>
    }
}
