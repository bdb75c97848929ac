//! Command-line options for the terminal runner.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::core::GameConfig;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Accepted board width and height, in cells.
pub const DIMENSION_RANGE: RangeInclusive<usize> = 4..=40;

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-blockfall")]
#[command(about = "Falling-block puzzle for the terminal", version)]
pub struct Args {
    /// Seed for the piece sequence (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    pub height: usize,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Validated board dimensions.
    pub fn config(&self) -> Result<GameConfig> {
        if !DIMENSION_RANGE.contains(&self.width) {
            bail!(
                "board width {} is outside {}..={}",
                self.width,
                DIMENSION_RANGE.start(),
                DIMENSION_RANGE.end()
            );
        }
        if !DIMENSION_RANGE.contains(&self.height) {
            bail!(
                "board height {} is outside {}..={}",
                self.height,
                DIMENSION_RANGE.start(),
                DIMENSION_RANGE.end()
            );
        }
        Ok(GameConfig {
            width: self.width,
            height: self.height,
        })
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
