//! Optional JSON settings file.
//!
//! Every field has a default, so a missing file, an empty object and a
//! file that only overrides one knob all work. The seed is the one
//! setting with no fixed default: absent, each run derives one from the
//! clock so games differ.

use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use cubewell_core::GameConfig;
use cubewell_types::{
    DEFAULT_ARR_MS, DEFAULT_DAS_MS, DEFAULT_WELL_DEPTH, DEFAULT_WELL_HEIGHT, DEFAULT_WELL_WIDTH,
    INITIAL_FALL_SECONDS, LEVEL_SPEED_FACTOR, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_SECONDS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
    pub initial_fall_interval: f32,
    pub min_fall_interval: f32,
    pub level_speed_factor: f32,
    pub lines_per_level: u32,
    pub score_table: [u32; 5],
    pub das_ms: u32,
    pub arr_ms: u32,
    pub seed: Option<u32>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            width: DEFAULT_WELL_WIDTH,
            height: DEFAULT_WELL_HEIGHT,
            depth: DEFAULT_WELL_DEPTH,
            initial_fall_interval: INITIAL_FALL_SECONDS,
            min_fall_interval: MIN_FALL_SECONDS,
            level_speed_factor: LEVEL_SPEED_FACTOR,
            lines_per_level: LINES_PER_LEVEL,
            score_table: LINE_SCORES,
            das_ms: DEFAULT_DAS_MS,
            arr_ms: DEFAULT_ARR_MS,
            seed: None,
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing file is not an error; it
    /// means defaults.
    pub fn load(path: &Path) -> Result<Settings> {
        match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("invalid settings file {}", path.display())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(err) => {
                Err(err).with_context(|| format!("cannot read settings file {}", path.display()))
            }
        }
    }

    /// Reject unusable values before the terminal goes raw.
    pub fn validate(&self) -> Result<()> {
        self.game_config().validate()?;
        if self.arr_ms == 0 {
            bail!("arrMs must be at least 1");
        }
        Ok(())
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            depth: self.depth,
            initial_fall_interval: self.initial_fall_interval,
            min_fall_interval: self.min_fall_interval,
            level_speed_factor: self.level_speed_factor,
            lines_per_level: self.lines_per_level,
            score_table: self.score_table,
        }
    }

    /// The configured seed, or one derived from the clock.
    pub fn seed_or_entropy(&self) -> u32 {
        if let Some(seed) = self.seed {
            return seed;
        }
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.subsec_nanos() ^ (elapsed.as_secs() as u32),
            Err(_) => 0x9E37_79B9,
        }
    }
}
