//! Game state module - manages the complete game session
//!
//! This module ties together the board, pieces, piece generation and scoring.
//! It handles gravity timing, player actions, locking, line clears and the
//! Running / Paused / GameOver lifecycle.

use crate::board::Board;
use crate::events::GameEvent;
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Constructor-time session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current: Piece,
    next: Piece,
    generator: PieceGenerator,
    /// Queued events, drained by the presentation layer.
    events: Vec<GameEvent>,
    /// Monotonic session counter (increments on restart).
    episode: u32,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    /// Time accumulated since the last gravity step.
    fall_timer_ms: u32,
    status: GameStatus,
}

impl GameState {
    /// Create a new game on the default 10x20 board
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create a new game on an empty board of the configured size
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self::from_board(Board::new(config.width, config.height), seed)
    }

    /// Start a session on an existing board.
    ///
    /// The first piece spawns immediately; if it collides with the board
    /// contents the session starts in `GameOver`.
    pub fn from_board(board: Board, seed: u64) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let current = generator.draw();
        let next = generator.draw();

        let mut state = Self {
            config: GameConfig {
                width: board.width(),
                height: board.height(),
            },
            board,
            current,
            next,
            generator,
            events: Vec::new(),
            episode: 0,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            fall_interval_ms: fall_interval_ms(START_LEVEL),
            fall_timer_ms: 0,
            status: GameStatus::Running,
        };
        state.place_current();
        state
    }

    /// Replace the whole session with a fresh one.
    ///
    /// The board is emptied in place and keeps its size; score and lines go
    /// to zero at level 1 speed with two new pieces. The piece generator keeps
    /// running so the next session differs.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = self.generator.draw();
        self.next = self.generator.draw();
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.fall_interval_ms = fall_interval_ms(START_LEVEL);
        self.fall_timer_ms = 0;
        self.status = GameStatus::Running;
        self.episode = self.episode.wrapping_add(1);
        self.events.push(GameEvent::Restarted);
        log::info!("session {} started", self.episode);
        self.place_current();
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    /// Row the current piece would land on (preview only)
    pub fn ghost_y(&self) -> i32 {
        self.current.ghost_y(&self.board)
    }

    /// Take every queued event in the order it happened
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Copy render-relevant state into `out`, reusing its allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board
            .extend(self.board.rows().flat_map(|row| row.iter().map(|cell| cell.fill)));

        out.active = Some(ActiveSnapshot::from(self.current));
        out.ghost_y = match self.status {
            GameStatus::GameOver => None,
            _ => Some(self.ghost_y()),
        };
        out.next = Some(self.next.kind());
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(self.board.width(), self.board.height());
        self.snapshot_into(&mut s);
        s
    }

    /// Center the current piece on the top row; game over if it collides
    fn place_current(&mut self) -> bool {
        let x = self.current.spawn_x(self.board.width());
        self.current.place(x, 0);

        if self.current.collides(&self.board) {
            self.status = GameStatus::GameOver;
            self.events.push(GameEvent::GameOver);
            log::info!(
                "game over: score {} level {} lines {}",
                self.score,
                self.level,
                self.lines
            );
            return false;
        }
        true
    }

    /// Lock the current piece onto the board and handle line clears
    fn lock_piece(&mut self) {
        self.current.commit(&mut self.board);
        self.events.push(GameEvent::PieceLocked);

        let cleared = self.board.clear_lines() as u32;
        if cleared > 0 {
            self.lines += cleared;
            // Points use the level the lock happened at.
            self.score = self
                .score
                .saturating_add(line_clear_score(cleared, self.level));
            self.events.push(GameEvent::LinesCleared { count: cleared });
            log::debug!("cleared {} line(s), score {}", cleared, self.score);

            let new_level = level_for_lines(self.lines);
            if new_level > self.level {
                self.level = new_level;
                self.fall_interval_ms = fall_interval_ms(new_level);
                self.events.push(GameEvent::LevelUp { level: new_level });
                log::info!(
                    "level {} reached, fall interval {}ms",
                    new_level,
                    self.fall_interval_ms
                );
            }
        }

        let next = self.generator.draw();
        self.current = std::mem::replace(&mut self.next, next);
        self.place_current();
    }

    /// Main game tick - accumulate time and apply gravity.
    ///
    /// Returns true when a gravity step (move or lock) happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms <= self.fall_interval_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        if !self.current.try_move(&self.board, 0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Apply a player action.
    ///
    /// Returns true when the action changed the session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.status, action) {
            (_, GameAction::Quit) => false,

            (GameStatus::GameOver, GameAction::Restart) => {
                self.reset();
                true
            }
            (GameStatus::GameOver, _) => false,

            (GameStatus::Paused, GameAction::Pause) => {
                self.status = GameStatus::Running;
                true
            }
            (GameStatus::Paused, _) => false,

            (GameStatus::Running, GameAction::Pause) => {
                self.status = GameStatus::Paused;
                true
            }
            (GameStatus::Running, GameAction::Restart) => false,
            (GameStatus::Running, GameAction::MoveLeft) => {
                self.current.try_move(&self.board, -1, 0)
            }
            (GameStatus::Running, GameAction::MoveRight) => {
                self.current.try_move(&self.board, 1, 0)
            }
            (GameStatus::Running, GameAction::Rotate) => self.current.rotate(&self.board),
            (GameStatus::Running, GameAction::SoftDrop) => {
                if !self.current.try_move(&self.board, 0, 1) {
                    self.lock_piece();
                }
                true
            }
            (GameStatus::Running, GameAction::HardDrop) => {
                self.current.hard_drop(&self.board);
                self.lock_piece();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
