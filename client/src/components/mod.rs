//! UI components for the game page.

pub mod board;
pub mod controls;
pub mod edge_line;
pub mod game_log;
pub mod hexagon;
pub mod hud;
pub mod player_panel;
pub mod status_bar;
pub mod vertex_node;
