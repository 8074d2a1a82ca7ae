//! Scrolling game log, newest entry first.

use leptos::prelude::*;

use protocol::PlayerColor;

use crate::state::session::SessionState;

/// Read-only log panel fed by the server's append-only event list.
#[component]
pub fn GameLogPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="game-log">
            {move || {
                session.get().game.map(|game| {
                    game.logs
                        .iter()
                        .rev()
                        .map(|log| {
                            let speaker = log.player_color.map_or("System", PlayerColor::as_str);
                            view! {
                                <div class="game-log__entry">
                                    <span class="game-log__speaker">{speaker} ": "</span>
                                    <span class="game-log__message">{log.message.clone()}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </div>
    }
}
