//! Scoring module - line points, leveling and gravity speed
//!
//! Rules:
//! - Each cleared line is worth `points_per_line * level`.
//! - A level is complete once the score reaches `level * level_threshold`; at most one
//!   level is gained per line clear.
//! - Gravity starts at the level-one tick length and gets faster on every level up:
//!   100ms steps while the interval is at least 150ms, then 50ms steps down to a
//!   floor of [`MIN_TICK_LENGTH_MS`].

/// Fastest gravity interval
pub const MIN_TICK_LENGTH_MS: u32 = 50;

/// Points earned for clearing `lines` rows at `level`
pub fn calculate_line_score(lines: usize, level: u32, points_per_line: u32) -> u32 {
    (lines as u32)
        .saturating_mul(points_per_line)
        .saturating_mul(level)
}

/// Whether `score` completes `level`
pub fn reached_next_level(score: u32, level: u32, level_threshold: u32) -> bool {
    score >= level.saturating_mul(level_threshold)
}

/// Gravity interval after a level up
pub fn tick_length_after_level_up(tick_length_ms: u32) -> u32 {
    let step = if tick_length_ms >= 150 { 100 } else { 50 };
    tick_length_ms
        .saturating_sub(step)
        .max(MIN_TICK_LENGTH_MS)
        .min(tick_length_ms)
}
