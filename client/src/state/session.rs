#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use protocol::{BoardData, GameState};

/// Latest server snapshots plus channel connectivity.
///
/// Either snapshot may be absent until its first push arrives. No ordering
/// between board and game pushes is assumed, so rendering must tolerate any
/// combination of present and absent slots.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub board: Option<BoardData>,
    pub game: Option<GameState>,
    pub connection_status: ConnectionStatus,
    /// Human-readable message from the last connection failure.
    pub last_error: Option<String>,
}

impl SessionState {
    /// Connectivity line for the loading screen and status bar.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.connection_status {
            ConnectionStatus::Connected => "Connected!".to_owned(),
            ConnectionStatus::Connecting => "Connecting...".to_owned(),
            ConnectionStatus::Disconnected => match &self.last_error {
                Some(message) => format!("Error: {message}"),
                None => "Disconnected".to_owned(),
            },
        }
    }
}

/// Channel connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}
