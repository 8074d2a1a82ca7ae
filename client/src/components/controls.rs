//! Action controls: dice, build selection, end turn, and the dev resource
//! grant.
//!
//! Controls are gated by the server-reported phase and sub-phase; build
//! buttons stay visible but disabled when the acting player's known
//! inventory cannot cover the cost. All gating is advisory and the server
//! re-checks every intent.

use leptos::prelude::*;

use protocol::{CITY_COST, ClientIntent, ROAD_COST, SETTLEMENT_COST, cost_emojis};

use crate::app::IntentSender;
use crate::interact;
use crate::state::session::SessionState;
use crate::state::ui::{BuildMode, UiState};

/// Turn action panel, pinned to the top-right of the board page.
#[component]
pub fn Controls() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<IntentSender>>();

    let can_roll = move || session.get().game.as_ref().is_some_and(interact::can_roll);
    let build_open = move || {
        session.get().game.as_ref().is_some_and(interact::build_controls_open)
    };
    let affordable = move |mode: BuildMode| {
        session.get().game.as_ref().is_some_and(|g| interact::can_afford(g, mode))
    };
    let dice = move || session.get().game.as_ref().and_then(|g| g.last_dice_result);

    let emit = move |intent: ClientIntent| {
        if !sender.get_untracked().send(&intent) {
            leptos::logging::warn!("intent dropped: channel not connected");
        }
    };

    let on_roll = move |_| emit(ClientIntent::RollDice);
    let on_end_turn = move |_| {
        let (intent, next_mode) = interact::end_turn();
        emit(intent);
        ui.update(|u| u.build_mode = next_mode);
    };
    let on_grant = move |_| emit(ClientIntent::TestResources);
    let arm = move |mode: BuildMode| ui.update(|u| u.build_mode = mode);

    view! {
        <div class="controls">
            {move || dice().map(|n| view! { <div class="controls__dice">"🎲 " {n}</div> })}

            <Show when=can_roll>
                <button class="btn controls__roll" on:click=on_roll>
                    "Roll Dice 🎲"
                </button>
            </Show>

            <Show when=build_open>
                <div class="controls__actions">
                    <div class="controls__actions-header">"Actions"</div>

                    <button
                        class="btn controls__build"
                        disabled=move || !affordable(BuildMode::Road)
                        on:click=move |_| arm(BuildMode::Road)
                    >
                        <span>"Build Road"</span>
                        <span class="controls__cost">{cost_emojis(&ROAD_COST)}</span>
                    </button>

                    <button
                        class="btn controls__build"
                        disabled=move || !affordable(BuildMode::Settlement)
                        on:click=move |_| arm(BuildMode::Settlement)
                    >
                        <span>"Build Settlement"</span>
                        <span class="controls__cost">{cost_emojis(&SETTLEMENT_COST)}</span>
                    </button>

                    <button
                        class="btn controls__build"
                        disabled=move || !affordable(BuildMode::City)
                        on:click=move |_| arm(BuildMode::City)
                    >
                        <span>"Build City"</span>
                        <span class="controls__cost">{cost_emojis(&CITY_COST)}</span>
                    </button>

                    <button class="btn controls__end-turn" on:click=on_end_turn>
                        "End Turn ➡️"
                    </button>

                    <button
                        class="btn controls__grant"
                        on:click=on_grant
                        title="Grant test resources"
                    >
                        "+ Resources"
                    </button>
                </div>
            </Show>
        </div>
    }
}
