//! Scoring module - line clear score, level curve and fall intervals
//!
//! Scoring is flat: every cleared row is worth [`POINTS_PER_LINE`] regardless
//! of how many rows a single lock clears. The level is derived from the total
//! line count, and the level drives the gravity interval.

use std::time::Duration;

use crate::types::{
    BASE_FALL_INTERVAL_SECS, INITIAL_LEVEL, LEVEL_SPEEDUP, LINES_PER_LEVEL,
    MIN_FALL_INTERVAL_SECS, POINTS_PER_LINE, SOFT_DROP_DIVISOR,
};

/// Points awarded for clearing `lines` rows in one lock.
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(POINTS_PER_LINE)
}

/// Level for a running total of cleared lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    INITIAL_LEVEL + total_lines / LINES_PER_LEVEL
}

/// Normal gravity interval in seconds: base / (1 + (level - 1) * 0.1).
pub fn fall_interval_secs(level: u32) -> f64 {
    let steps = level.saturating_sub(INITIAL_LEVEL) as f64;
    BASE_FALL_INTERVAL_SECS / (1.0 + steps * LEVEL_SPEEDUP)
}

/// Gravity interval for this tick.
///
/// With soft drop held the normal interval is divided by
/// [`SOFT_DROP_DIVISOR`] and floored at [`MIN_FALL_INTERVAL_SECS`], so the
/// result is always positive.
pub fn fall_interval(level: u32, soft_drop: bool) -> Duration {
    let normal = fall_interval_secs(level);
    let secs = if soft_drop {
        (normal / SOFT_DROP_DIVISOR).max(MIN_FALL_INTERVAL_SECS)
    } else {
        normal
    };
    Duration::from_secs_f64(secs)
}
