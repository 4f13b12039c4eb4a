//! Scoring module - line clear points, drop bonus, levels and speed
//!
//! - Line clears score `LINE_SCORES[lines] * level`, using the level in effect
//!   before the clear.
//! - Hard drops add 2 points per row descended, not multiplied by level.
//! - Level is always recomputed from cumulative lines: `lines / 10 + 1`.

use crate::types::{
    DROP_DECREASE_MS, HARD_DROP_POINTS_PER_ROW, INITIAL_DROP_MS, LEVEL_LINES, LINE_SCORES,
    MIN_DROP_MS,
};

/// Points for clearing `lines` rows at once at `level`.
/// More than 4 lines cannot happen on this board and scores 0.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Hard drop bonus: +2 per row
pub fn hard_drop_bonus(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Level for a cumulative line count (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LEVEL_LINES + 1
}

/// Auto-drop interval for a level, in milliseconds.
///
/// `1000 - (level - 1) * 50`, never below 100.
pub fn drop_interval_ms(level: u32) -> u32 {
    let decrease = level.saturating_sub(1).saturating_mul(DROP_DECREASE_MS);
    INITIAL_DROP_MS.saturating_sub(decrease).max(MIN_DROP_MS)
}

/// Score, level, cumulative lines and the best score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub high_score: u32,
}

impl Stats {
    /// Fresh session stats carrying a previously persisted high score
    pub fn new(high_score: u32) -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            high_score,
        }
    }

    /// Stats after a lock that cleared `cleared` rows and earned `bonus` drop points.
    pub fn after_lock(&self, cleared: usize, bonus: u32) -> Self {
        let score = self
            .score
            .saturating_add(line_clear_score(cleared, self.level))
            .saturating_add(bonus);
        let lines = self.lines.saturating_add(cleared as u32);

        Self {
            score,
            level: level_for_lines(lines),
            lines,
            high_score: self.high_score.max(score),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(0)
    }
}
