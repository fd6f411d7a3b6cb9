//! Scoring and pacing rules.
//!
//! Pure functions over [`GameConfig`] so the award tables and speed curve
//! are testable without standing up an engine.

use crate::config::GameConfig;

/// Points for clearing `layers` layers at once while at `level`.
///
/// The award is the classic single/double/triple/quadruple table scaled
/// by `level + 1`. Clearing nothing scores nothing; counts beyond the
/// table are capped at the quadruple award.
pub fn layer_score(config: &GameConfig, layers: u32, level: u32) -> u32 {
    if layers == 0 {
        return 0;
    }
    let idx = (layers as usize).min(config.score_table.len() - 1);
    config.score_table[idx] * (level + 1)
}

/// Seconds between gravity steps at `level`.
///
/// Speed rises linearly with level and is floored so high levels stay
/// playable rather than instantaneous.
pub fn fall_interval(config: &GameConfig, level: u32) -> f32 {
    let step = config.initial_fall_interval / config.level_speed_factor;
    (config.initial_fall_interval - step * level as f32).max(config.min_fall_interval)
}

/// Level reached after clearing `lines` layers in total.
pub fn level_for_lines(config: &GameConfig, lines: u32) -> u32 {
    lines / config.lines_per_level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_score_table() {
        let config = GameConfig::default();
        assert_eq!(layer_score(&config, 0, 0), 0);
        assert_eq!(layer_score(&config, 1, 0), 40);
        assert_eq!(layer_score(&config, 2, 0), 100);
        assert_eq!(layer_score(&config, 3, 0), 300);
        assert_eq!(layer_score(&config, 4, 0), 1200);
    }

    #[test]
    fn test_layer_score_scales_with_level() {
        let config = GameConfig::default();
        assert_eq!(layer_score(&config, 1, 4), 200);
        assert_eq!(layer_score(&config, 4, 9), 12000);
    }

    #[test]
    fn test_layer_score_caps_beyond_table() {
        let config = GameConfig::default();
        assert_eq!(layer_score(&config, 7, 0), layer_score(&config, 4, 0));
    }

    #[test]
    fn test_fall_interval_starts_at_initial() {
        let config = GameConfig::default();
        assert_eq!(fall_interval(&config, 0), config.initial_fall_interval);
    }

    #[test]
    fn test_fall_interval_shrinks_monotonically() {
        let config = GameConfig::default();
        let mut prev = fall_interval(&config, 0);
        for level in 1..30 {
            let next = fall_interval(&config, level);
            assert!(next <= prev, "interval rose at level {level}");
            prev = next;
        }
    }

    #[test]
    fn test_fall_interval_hits_the_floor() {
        let config = GameConfig::default();
        assert_eq!(fall_interval(&config, 15), config.min_fall_interval);
        assert_eq!(fall_interval(&config, 100), config.min_fall_interval);
    }

    #[test]
    fn test_level_advances_every_ten_lines() {
        let config = GameConfig::default();
        assert_eq!(level_for_lines(&config, 0), 0);
        assert_eq!(level_for_lines(&config, 9), 0);
        assert_eq!(level_for_lines(&config, 10), 1);
        assert_eq!(level_for_lines(&config, 25), 2);
    }
}
