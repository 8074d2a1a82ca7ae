//! Board area: tiles plus deduplicated vertex and edge hit targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Geometry is a pure derivation over the latest board snapshot and the
//! viewport-driven hex size. It is recomputed whenever either changes; there
//! is no cache to invalidate. Clicks on hit targets run through the rules in
//! [`crate::interact`] and resolve into fire-and-forget intents.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;

use hexgrid::layout::{self, TILE_FILL_RATIO};
use hexgrid::{Axial, Edge, Vertex, project_board};
use protocol::{Building, CITY_COST, GameState, Road, cost_emojis};

use crate::app::IntentSender;
use crate::components::edge_line::EdgeLine;
use crate::components::hexagon::Hexagon;
use crate::components::vertex_node::VertexNode;
use crate::interact::{self, ClickOutcome};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

fn building_at(game: Option<&GameState>, vertex: Vertex) -> Option<Building> {
    game?
        .buildings
        .iter()
        .find(|b| {
            b.location.q == vertex.q && b.location.r == vertex.r && b.location.corner == vertex.c
        })
        .cloned()
}

fn road_at(game: Option<&GameState>, edge: Edge) -> Option<Road> {
    game?
        .roads
        .iter()
        .find(|r| r.location.q == edge.q && r.location.r == edge.r && r.location.edge == edge.e)
        .cloned()
}

fn city_confirm_message() -> String {
    format!("Upgrade this settlement to a City? (Cost: {})", cost_emojis(&CITY_COST))
}

/// Run a click outcome: confirm if needed, emit, and update the build mode.
fn handle_outcome(outcome: ClickOutcome, ui: RwSignal<UiState>, sender: RwSignal<IntentSender>) {
    if let ClickOutcome::Ignore(reason) = outcome {
        leptos::logging::log!("ignoring board click: {}", reason.as_str());
        return;
    }

    let confirmed = matches!(outcome, ClickOutcome::ConfirmCity(_))
        && crate::util::confirm::confirm(&city_confirm_message());
    let current = ui.get_untracked().build_mode;
    let (intent, next_mode) = interact::resolve_outcome(outcome, current, confirmed);

    if let Some(intent) = intent {
        if !sender.get_untracked().send(&intent) {
            leptos::logging::warn!("intent dropped: channel not connected");
        }
    }
    ui.update(|u| u.build_mode = next_mode);
}

/// The board workspace: hex tiles with vertex/edge hit targets on top.
#[component]
pub fn BoardView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<IntentSender>>();

    let hex_size = Memo::new(move |_| {
        layout::hex_size(layout::display_width(ui.get().container_width))
    });

    view! {
        <div
            class="board"
            style:width=move || format!("{}px", layout::display_width(ui.get().container_width))
            style:height=move || format!("{}px", layout::board_height(hex_size.get()))
        >
            <div class="board__origin">
                // Tiles.
                {move || {
                    let size = hex_size.get();
                    session.get().board.map(|board| {
                        board
                            .hexes
                            .iter()
                            .map(|hex| {
                                let center = layout::hex_center(Axial::new(hex.q, hex.r), size);
                                view! {
                                    <Hexagon
                                        x=center.x
                                        y=center.y
                                        size=size * TILE_FILL_RATIO
                                        resource=hex.resource
                                        number=hex.number
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}

                // Edge hit targets, under the vertex nodes.
                {move || {
                    let size = hex_size.get();
                    let state = session.get();
                    state.board.as_ref().map(|board| {
                        let centers: Vec<Axial> =
                            board.hexes.iter().map(|h| Axial::new(h.q, h.r)).collect();
                        project_board(&centers, size)
                            .edges
                            .into_iter()
                            .map(|projected| {
                                let edge = projected.edge;
                                let road = road_at(state.game.as_ref(), edge);
                                let on_click = Callback::new(move |()| {
                                    let game = session.get_untracked().game;
                                    let outcome = interact::edge_click(
                                        game.as_ref(),
                                        ui.get_untracked().build_mode,
                                        edge,
                                    );
                                    handle_outcome(outcome, ui, sender);
                                });
                                view! {
                                    <EdgeLine
                                        x=projected.at.x
                                        y=projected.at.y
                                        rotation_degrees=projected.rotation_degrees
                                        length=size
                                        road=road
                                        on_click=on_click
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}

                // Vertex hit targets.
                {move || {
                    let size = hex_size.get();
                    let state = session.get();
                    state.board.as_ref().map(|board| {
                        let centers: Vec<Axial> =
                            board.hexes.iter().map(|h| Axial::new(h.q, h.r)).collect();
                        project_board(&centers, size)
                            .vertices
                            .into_iter()
                            .map(|projected| {
                                let vertex = projected.vertex;
                                let building = building_at(state.game.as_ref(), vertex);
                                let on_click = Callback::new(move |()| {
                                    let game = session.get_untracked().game;
                                    let outcome = interact::vertex_click(
                                        game.as_ref(),
                                        ui.get_untracked().build_mode,
                                        vertex,
                                    );
                                    handle_outcome(outcome, ui, sender);
                                });
                                view! {
                                    <VertexNode
                                        x=projected.at.x
                                        y=projected.at.y
                                        building=building
                                        on_click=on_click
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </div>
    }
}
