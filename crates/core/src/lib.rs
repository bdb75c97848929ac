//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, input devices or audio, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every rule, property tests for the board
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of cells with line clearing
//! - [`shapes`]: constant catalog of rotation states per kind
//! - [`piece`]: falling piece with collision, rotation, movement, drop, ghost and commit
//! - [`rng`]: uniform, seeded piece generation
//! - [`scoring`]: line-clear points, level formula and speed curve
//! - [`game_state`]: the session controller (Running / Paused / GameOver)
//! - [`events`]: events drained by presentation, audio notifier seam
//! - [`clock`]: monotonic clock abstraction and frame deltas
//! - [`snapshot`]: render-side copy of the session
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is equally likely on every draw
//! - **In-place rotation**: rotation either fits where the piece is or fails
//! - **Immediate lock**: a piece locks the moment it cannot move down
//! - **Ghost piece**: shows where the current piece would land
//! - **Scoring**: `lines² × 100 × level` per lock; a level every 10 lines
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::GameState;
//! use tui_blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Gravity accumulates elapsed time; once the total exceeds the fall interval
//! (1000ms at level 1, 50ms less per level, never below 100ms) the piece
//! moves down one row or locks. Call [`GameState::tick`](game_state::GameState::tick)
//! every frame with the elapsed milliseconds.

pub mod board;
pub mod clock;
pub mod events;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use clock::{Clock, FrameSample, FrameTimer, ManualClock, MonotonicClock};
pub use events::{dispatch_audio, AudioNotifier, GameEvent, NullAudio};
pub use game_state::{GameConfig, GameState};
pub use piece::Piece;
pub use rng::PieceGenerator;
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
