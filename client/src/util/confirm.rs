//! Synchronous confirmation gate.
//!
//! Uses the browser's native confirm dialog so the answer blocks the event
//! handler. Outside a browser the gate always declines.

/// Ask the user a yes/no question; `false` when no browser is available.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
