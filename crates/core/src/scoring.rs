//! Scoring and difficulty rules
//!
//! - Line clears score `n² × 100`, so one four-line clear (1600) beats four
//!   single clears (400).
//! - Level is driven by play time alone: one level every `LEVEL_TIME_MS`.
//! - Gravity speeds up by `LEVEL_STEP_MS` per level down to `MIN_DROP_INTERVAL_MS`.

use crate::types::{
    BASE_DROP_INTERVAL_MS, LEVEL_STEP_MS, LEVEL_TIME_MS, LINE_CLEAR_BASE_SCORE,
    MIN_DROP_INTERVAL_MS,
};

/// Points for clearing `lines` rows with a single lock.
pub fn line_clear_score(lines: u32) -> u32 {
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_CLEAR_BASE_SCORE)
}

/// Level reached after `total_ms` of play (starts at 1).
pub fn level_for_elapsed(total_ms: u64) -> u32 {
    let steps = total_ms / LEVEL_TIME_MS;
    u32::try_from(steps)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}

/// Gravity interval for a level, floored at `MIN_DROP_INTERVAL_MS`.
pub fn drop_interval_for_level(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(LEVEL_STEP_MS);
    BASE_DROP_INTERVAL_MS
        .saturating_sub(speedup)
        .max(MIN_DROP_INTERVAL_MS)
}
