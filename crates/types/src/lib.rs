//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! Both are constructor values of the board; other sizes are allowed.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame pacing of the main loop (~60 FPS) |
//! | `BASE_FALL_MS` | 1000 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Interval decrease per level |
//! | `MIN_FALL_MS` | 100 | Interval floor |
//!
//! # Fall Intervals by Level
//!
//! `max(100, 1000 - (level - 1) * 50)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 950ms |
//! | 10 | 550ms |
//! | 19+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_index(piece.index()), Some(piece));
//! assert_eq!(piece.color().r, 128);
//!
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Main loop frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity interval decrease per level above 1
pub const FALL_STEP_MS: u32 = 50;

/// Gravity interval floor
pub const MIN_FALL_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points of a line clear, multiplied by `lines² × level`
pub const LINE_CLEAR_BASE: u32 = 100;

/// Level of a fresh session
pub const START_LEVEL: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
        assert_eq!(BASE_FALL_MS, 1000);
        assert_eq!(FALL_STEP_MS, 50);
        assert_eq!(MIN_FALL_MS, 100);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(LINE_CLEAR_BASE, 100);
        assert_eq!(START_LEVEL, 1);
    }

    #[test]
    fn piece_kind_index_matches_catalog_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(7), None);
        assert_eq!(PieceKind::Z.letter(), 'Z');
    }

    #[test]
    fn piece_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{:?} and {:?} share a color", a, b);
            }
        }
    }

    #[test]
    fn action_names_are_distinct() {
        let actions = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Rotate,
            GameAction::Pause,
            GameAction::Restart,
            GameAction::Quit,
        ];
        for (i, a) in actions.iter().enumerate() {
            for b in &actions[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
        assert_eq!(GameAction::SoftDrop.as_str(), "softDrop");
        assert_eq!(GameStatus::GameOver.as_str(), "game_over");
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven piece kinds
///
/// Each kind has a distinct shape and color:
/// - **I**: Cyan, 4-long bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Position in [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Uppercase letter used by side panels and logs.
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Display color of cells filled by this kind.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 255, 255),
            PieceKind::O => Rgb::new(255, 255, 0),
            PieceKind::T => Rgb::new(128, 0, 128),
            PieceKind::L => Rgb::new(255, 165, 0),
            PieceKind::J => Rgb::new(0, 0, 255),
            PieceKind::S => Rgb::new(0, 255, 0),
            PieceKind::Z => Rgb::new(255, 0, 0),
        }
    }
}

/// Player intents fed into the game controller
///
/// All intents are discrete, edge-triggered events: one key press, one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Advance to the next rotation state (no wall kicks)
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a new session after game over
    Restart,
    /// Leave the program (handled by the runner, not the rules)
    Quit,
}

impl GameAction {
    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// Session lifecycle state
///
/// - **Running**: gravity and player movement are live
/// - **Paused**: only the pause toggle is honored
/// - **GameOver**: a spawned piece collided; only restart is honored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
        }
    }
}
