//! Terminal presentation for the game.
//!
//! This is a small, game-oriented rendering layer. It avoids widget/layout
//! libraries and instead renders a [`core::GameSnapshot`] into a simple
//! framebuffer that is flushed to the terminal.
//!
//! - [`game_view`]: pure snapshot-to-framebuffer mapping
//! - [`renderer`]: full and diff encoding to a writer
//! - [`bell`]: the terminal bell as the line-clear sound

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use bell::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, CONTROLS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
