//! Viewport width observation driving board layout.
//!
//! Seeds `container_width` from the window and keeps it updated on resize;
//! the board recomputes its projection from the new width on every change.
//! Requires a browser environment.

use leptos::prelude::RwSignal;

use crate::state::ui::UiState;

/// Start observing the window width into `ui.container_width`.
#[cfg(feature = "hydrate")]
pub fn observe_width(ui: RwSignal<UiState>) {
    use leptos::prelude::Update;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    fn inner_width() -> Option<f64> {
        web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|w| w.as_f64())
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    if let Some(width) = inner_width() {
        ui.update(|u| u.container_width = width);
    }

    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Some(width) = inner_width() {
            ui.update(|u| u.container_width = width);
        }
    });
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    // The listener lives for the whole session.
    on_resize.forget();
}

#[cfg(not(feature = "hydrate"))]
pub fn observe_width(_ui: RwSignal<UiState>) {}
