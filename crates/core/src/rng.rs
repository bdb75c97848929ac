//! RNG module - uniform random piece generation
//!
//! Each draw picks one of the seven kinds uniformly and independently of all
//! previous draws. There is deliberately no 7-bag: long droughts of a kind
//! are possible, exactly like the classic single-die selection.
//!
//! The generator is a seeded PCG so whole sessions are reproducible in tests.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::piece::Piece;
use crate::types::PieceKind;

/// Seeded source of new pieces
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    seed: u64,
    rng: Pcg32,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draw a fresh piece in its first rotation state
    pub fn draw(&mut self) -> Piece {
        Piece::spawn(&mut self.rng)
    }

    /// Draw only the kind
    pub fn draw_kind(&mut self) -> PieceKind {
        self.draw().kind()
    }

    /// Seed the generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
