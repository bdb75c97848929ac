//! Scoring module - line-clear points, leveling and the speed curve
//!
//! Points for a single lock are computed once from the number of rows it
//! cleared: `lines² × 100 × level`. A four-line clear is therefore worth
//! four times as much as four separate single clears.

use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_BASE, MIN_FALL_MS, START_LEVEL,
};

/// Points for clearing `lines` rows with one lock at `level`
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_CLEAR_BASE)
        .saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval in milliseconds for `level`
///
/// `max(100, 1000 - (level - 1) * 50)`: strictly decreasing until the floor.
pub fn fall_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(START_LEVEL);
    BASE_FALL_MS
        .saturating_sub(steps.saturating_mul(FALL_STEP_MS))
        .max(MIN_FALL_MS)
}
