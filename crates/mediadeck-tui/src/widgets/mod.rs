//! Ratatui widgets for the mediadeck TUI.

pub mod content_card;
pub mod debug_overlay;
pub mod deck;
pub mod help;
pub mod location_bar;
pub mod media_preview;
pub mod network_log;
