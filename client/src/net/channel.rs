//! WebSocket channel adapter for server snapshots and outbound intents.
//!
//! The adapter is a connect/receive/emit loop: the server pushes named
//! snapshot events that replace state slots wholesale, and the client fires
//! intent events with no acknowledgement tracking. Reconnection uses capped
//! exponential backoff; connectivity is surfaced only as a status value and
//! an optional error message.
//!
//! All WebSocket plumbing is gated behind `#[cfg(feature = "hydrate")]`
//! since it requires a browser environment. Snapshot application is a pure
//! function so it can be tested anywhere.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use protocol::ServerEvent;

use crate::state::session::SessionState;

/// Apply one inbound snapshot to the session.
///
/// Each event replaces its slot wholesale; there is no field-level merging,
/// and arrival order between board and game pushes is irrelevant.
pub fn apply_server_event(session: &mut SessionState, event: ServerEvent) {
    match event {
        ServerEvent::BoardState(board) => session.board = Some(board),
        ServerEvent::GameState(game) => session.game = Some(game),
    }
}

/// Spawn the channel client lifecycle as a local async task.
///
/// Returns the sender half used for outbound intents; the task reconnects
/// on disconnect with exponential backoff.
#[cfg(feature = "hydrate")]
pub fn spawn_channel_client(
    session: leptos::prelude::RwSignal<SessionState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    leptos::task::spawn_local(channel_loop(session, rx));
    tx
}

/// Channel endpoint derived from the page location.
#[cfg(feature = "hydrate")]
fn channel_url() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:8000".to_owned());
    format!("{ws_proto}://{host}/ws")
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn channel_loop(
    session: leptos::prelude::RwSignal<SessionState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::Update;

    use crate::state::session::ConnectionStatus;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        session.update(|s| s.connection_status = ConnectionStatus::Connecting);

        match connect_and_run(&channel_url(), session, &rx).await {
            Ok(()) => {
                leptos::logging::log!("channel disconnected cleanly");
                session.update(|s| {
                    s.connection_status = ConnectionStatus::Disconnected;
                    s.last_error = None;
                });
            }
            Err(e) => {
                leptos::logging::warn!("channel error: {e}");
                session.update(|s| {
                    s.connection_status = ConnectionStatus::Disconnected;
                    s.last_error = Some(e);
                });
            }
        }

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the WebSocket and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    session: leptos::prelude::RwSignal<SessionState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    use crate::state::session::ConnectionStatus;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    session.update(|s| {
        s.connection_status = ConnectionStatus::Connected;
        s.last_error = None;
    });

    // Forward outgoing intents from the shared channel to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and apply snapshot pushes.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match protocol::decode_server_event(&text) {
                    Ok(event) => session.update(|s| apply_server_event(s, event)),
                    Err(e) => leptos::logging::warn!("dropping bad frame: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("channel recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
