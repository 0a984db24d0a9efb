//! Scoring module - line clear points, drop bonus, and level progression
//!
//! Levels start at 1. Line clear points are multiplied by the level that was
//! current when the lines were cleared; the level is recomputed afterwards.

use crate::types::{HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES};

/// Calculate line clear score
/// lines: number of lines cleared by one lock (counts above 4 score as 4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    let base_score = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base_score.saturating_mul(level)
}

/// Calculate hard drop bonus: +2 per row descended
pub fn calculate_drop_score(cells: u32) -> u32 {
    cells.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Level management
/// Level increases every 10 lines cleared, starting at 1
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Automatic descent interval for a level (in milliseconds)
///
/// The base interval is divided by the level, with a 1ms floor.
pub fn fall_interval_ms(base_ms: u32, level: u32) -> u32 {
    (base_ms / level.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_level_one() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 300);
        assert_eq!(calculate_line_score(3, 1), 500);
        assert_eq!(calculate_line_score(4, 1), 800);
    }

    #[test]
    fn test_line_scores_multiply_by_level() {
        assert_eq!(calculate_line_score(4, 3), 2400);
        assert_eq!(calculate_line_score(1, 5), 500);
    }

    #[test]
    fn test_line_scores_clamp_above_four() {
        assert_eq!(calculate_line_score(6, 1), 800);
    }

    #[test]
    fn test_drop_score() {
        assert_eq!(calculate_drop_score(0), 0);
        assert_eq!(calculate_drop_score(5), 10);
        assert_eq!(calculate_drop_score(19), 38);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(19), 2);
        assert_eq!(calculate_level(20), 3);
        assert_eq!(calculate_level(29), 3);
        assert_eq!(calculate_level(105), 11);
    }

    #[test]
    fn test_fall_interval() {
        assert_eq!(fall_interval_ms(500, 1), 500);
        assert_eq!(fall_interval_ms(500, 2), 250);
        assert_eq!(fall_interval_ms(500, 3), 166);
        assert_eq!(fall_interval_ms(500, 1000), 1);
        assert_eq!(fall_interval_ms(500, 0), 500);
    }
}
