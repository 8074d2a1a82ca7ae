//! # client
//!
//! Leptos + WASM frontend for the hex-grid board game.
//!
//! The client is a thin projector of server snapshots: the channel adapter
//! replaces whole state slots as `board_state`/`game_state` pushes arrive,
//! the `hexgrid` crate derives hit-target geometry from the latest board,
//! and pointer events run through the rules in [`interact`] before anything
//! is emitted back to the server.

pub mod app;
pub mod components;
pub mod interact;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
