//! Scoring, level, and speed rules (classic ruleset).
//!
//! All functions are pure so the tables can be tested in isolation:
//! - line clears award `{40, 100, 300, 1200}[n] * level` (level starts at 1)
//! - hard drops award 2 points per row descended
//! - the level is `lines / 10 + 1`
//! - gravity is `max(100, 1000 - (level - 1) * 100)` milliseconds per row

use crate::types::{
    BASE_DROP_MS, DROP_FLOOR_MS, DROP_STEP_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL,
    LINE_SCORES,
};

/// Calculate line clear score.
/// lines: number of lines cleared (1-4), level: current level (1-based).
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines] * level
}

/// Calculate hard drop score: 2 points per row descended.
pub fn hard_drop_score(rows: u32) -> u32 {
    rows * HARD_DROP_POINTS_PER_ROW
}

/// Level for a total line count. Starts at 1, +1 every 10 lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level (milliseconds per row).
///
/// Monotonically decreasing, 100ms per level, floored at 100ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(DROP_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        // Level 1
        assert_eq!(line_clear_score(1, 1), 40);
        assert_eq!(line_clear_score(2, 1), 100);
        assert_eq!(line_clear_score(3, 1), 300);
        assert_eq!(line_clear_score(4, 1), 1200);

        // Level 5
        assert_eq!(line_clear_score(1, 5), 200);
        assert_eq!(line_clear_score(4, 5), 6000);

        // No reward outside 1..=4
        assert_eq!(line_clear_score(0, 3), 0);
        assert_eq!(line_clear_score(5, 3), 0);
    }

    #[test]
    fn test_hard_drop_score() {
        assert_eq!(hard_drop_score(0), 0);
        assert_eq!(hard_drop_score(5), 10);
        assert_eq!(hard_drop_score(19), 38);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(9), 200);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(50), 100); // floored
    }

    #[test]
    fn test_intervals_monotonic() {
        let mut previous = drop_interval_ms(1);
        for level in 2..30 {
            let interval = drop_interval_ms(level);
            assert!(interval <= previous);
            previous = interval;
        }
    }
}
