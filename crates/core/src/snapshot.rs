//! Read-only copy of everything a renderer needs for one frame.

use crate::piece::Piece;
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x(),
            y: value.y(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major cell contents, `None` for empty cells.
    pub board: Vec<Option<PieceKind>>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i32>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Empty snapshot for a board of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            board: vec![None; width * height],
            active: None,
            ghost_y: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: 0,
            status: GameStatus::Running,
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<PieceKind> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board[y * self.width + x]
    }

    pub fn set_cell(&mut self, x: usize, y: usize, kind: Option<PieceKind>) {
        if x < self.width && y < self.height {
            self.board[y * self.width + x] = kind;
        }
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
