//! Game rule parameters.

use crate::types::{
    Vec3, DEFAULT_WELL_DEPTH, DEFAULT_WELL_HEIGHT, DEFAULT_WELL_WIDTH, INITIAL_FALL_SECONDS,
    LEVEL_SPEED_FACTOR, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_SECONDS,
};

/// Everything that parameterizes a game: well dimensions, gravity pacing
/// and the scoring tables. Construct one, [`validate`](GameConfig::validate)
/// it, and hand it to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Well extent along x.
    pub width: i32,
    /// Well extent along y (vertical).
    pub height: i32,
    /// Well extent along z.
    pub depth: i32,
    /// Seconds between gravity steps at level 0.
    pub initial_fall_interval: f32,
    /// Hard floor for the gravity interval at high levels.
    pub min_fall_interval: f32,
    /// Levels needed to shrink the interval to the floor.
    pub level_speed_factor: f32,
    /// Cleared layers required per level advance.
    pub lines_per_level: u32,
    /// Base awards indexed by layers cleared at once (index 0 unused).
    pub score_table: [u32; 5],
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            width: DEFAULT_WELL_WIDTH,
            height: DEFAULT_WELL_HEIGHT,
            depth: DEFAULT_WELL_DEPTH,
            initial_fall_interval: INITIAL_FALL_SECONDS,
            min_fall_interval: MIN_FALL_SECONDS,
            level_speed_factor: LEVEL_SPEED_FACTOR,
            lines_per_level: LINES_PER_LEVEL,
            score_table: LINE_SCORES,
        }
    }
}

impl GameConfig {
    /// Check every parameter is usable. Called once before a game starts;
    /// the engine assumes a validated config afterwards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::BadDimension { name: "width", value: self.width });
        }
        if self.height <= 0 {
            return Err(ConfigError::BadDimension { name: "height", value: self.height });
        }
        if self.depth <= 0 {
            return Err(ConfigError::BadDimension { name: "depth", value: self.depth });
        }
        if !(self.initial_fall_interval > 0.0) {
            return Err(ConfigError::BadInterval {
                name: "initialFallInterval",
                value: self.initial_fall_interval,
            });
        }
        if !(self.min_fall_interval > 0.0) {
            return Err(ConfigError::BadInterval {
                name: "minFallInterval",
                value: self.min_fall_interval,
            });
        }
        if self.min_fall_interval > self.initial_fall_interval {
            return Err(ConfigError::FloorAboveInitial {
                floor: self.min_fall_interval,
                initial: self.initial_fall_interval,
            });
        }
        if !(self.level_speed_factor > 0.0) {
            return Err(ConfigError::BadInterval {
                name: "levelSpeedFactor",
                value: self.level_speed_factor,
            });
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        Ok(())
    }

    /// Where new pieces enter: centered in x and z, at the well ceiling.
    pub fn spawn_position(&self) -> Vec3 {
        Vec3::new(
            (self.width / 2) as f32,
            self.height as f32,
            (self.depth / 2) as f32,
        )
    }

    /// Where the preview piece is parked, outside the playable volume.
    pub fn preview_position(&self) -> Vec3 {
        Vec3::new((self.width + 3) as f32, (self.height / 2) as f32, 0.0)
    }
}

/// A config rejected by [`GameConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    BadDimension { name: &'static str, value: i32 },
    BadInterval { name: &'static str, value: f32 },
    FloorAboveInitial { floor: f32, initial: f32 },
    ZeroLinesPerLevel,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::BadDimension { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            ConfigError::BadInterval { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            ConfigError::FloorAboveInitial { floor, initial } => write!(
                f,
                "minFallInterval {floor} exceeds initialFallInterval {initial}"
            ),
            ConfigError::ZeroLinesPerLevel => write!(f, "linesPerLevel must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_nonpositive_dimensions() {
        for field in ["width", "height", "depth"] {
            let mut config = GameConfig::default();
            match field {
                "width" => config.width = 0,
                "height" => config.height = -3,
                _ => config.depth = 0,
            }
            let err = config.validate().unwrap_err();
            assert!(matches!(err, ConfigError::BadDimension { name, .. } if name == field));
        }
    }

    #[test]
    fn test_rejects_bad_intervals() {
        let mut config = GameConfig::default();
        config.initial_fall_interval = 0.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.min_fall_interval = -0.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.level_speed_factor = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_floor_above_initial() {
        let mut config = GameConfig::default();
        config.min_fall_interval = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FloorAboveInitial { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_lines_per_level() {
        let mut config = GameConfig::default();
        config.lines_per_level = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroLinesPerLevel));
    }

    #[test]
    fn test_spawn_is_centered_at_the_ceiling() {
        let config = GameConfig::default();
        assert_eq!(config.spawn_position(), Vec3::new(2.0, 16.0, 2.0));
        assert_eq!(config.preview_position(), Vec3::new(7.0, 8.0, 0.0));
    }
}
