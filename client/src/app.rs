//! Root application component and shared context wiring.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::game::GamePage;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Handle for emitting intents over the active channel.
///
/// Fire-and-forget: `send` reports only whether a connection existed to
/// accept the message. Delivery is never tracked; a dropped intent shows up
/// as a snapshot that does not reflect the change.
#[derive(Clone, Default)]
pub struct IntentSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl IntentSender {
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    pub fn send(&self, intent: &protocol::ClientIntent) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(protocol::encode_intent(intent)).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = intent;
            false
        }
    }
}

/// Root application component.
///
/// Provides the session, UI, and sender contexts, then mounts the game
/// page. The channel client is spawned once here so reconnect state
/// survives any re-rendering below it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let sender = RwSignal::new(IntentSender::default());

    provide_context(session);
    provide_context(ui);
    provide_context(sender);

    #[cfg(feature = "hydrate")]
    {
        let tx = crate::net::channel::spawn_channel_client(session);
        sender.set(IntentSender::new(tx));
        crate::util::viewport::observe_width(ui);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/catan-client.css"/>
        <Title text="Catan"/>

        <GamePage/>
    }
}
