//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Input is
//! edge-triggered: one key press is one action, with no auto-repeat.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
