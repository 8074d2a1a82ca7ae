//! Per-player resource panels along the bottom of the page.

use leptos::prelude::*;

use protocol::Resource;

use crate::state::session::SessionState;

/// One card per player: color, total hand size, and per-resource counts.
/// The player whose turn it is gets a highlight ring.
#[component]
pub fn PlayerPanels() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="player-panels">
            {move || {
                session.get().game.map(|game| {
                    let current = game.current_player();
                    game.players
                        .iter()
                        .map(|&player| {
                            let total: u32 = Resource::ALL
                                .iter()
                                .map(|&res| game.resource_count(player, res))
                                .sum();
                            let counts = Resource::ALL
                                .iter()
                                .map(|&res| {
                                    view! {
                                        <div class="player-panel__resource" title=res.as_str()>
                                            <span class="player-panel__emoji">{res.emoji()}</span>
                                            <span class="player-panel__count">
                                                {game.resource_count(player, res)}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>();

                            view! {
                                <div
                                    class="player-panel"
                                    class:player-panel--active={current == Some(player)}
                                >
                                    <div class="player-panel__header">
                                        <span
                                            class="player-panel__dot"
                                            style:background-color=player.css_color()
                                        ></span>
                                        <span class="player-panel__name">{player.as_str()}</span>
                                        <span class="player-panel__cards">{total} " cards"</span>
                                    </div>
                                    <div class="player-panel__resources">{counts}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </div>
    }
}
