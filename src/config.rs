// ── GameConfig ────────────────────────────────────────────────────────────────

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::game::Timing;
use crate::grid::{MAP_HEIGHT, MAP_WIDTH};

/// Largest accepted `tile_size`, in logical pixels.
pub const MAX_TILE_SIZE: u32 = 256;
/// Largest accepted window `scale`.
pub const MAX_SCALE: u32 = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Start-up settings. Every field is optional in the JSON file.
///
/// - `tile_size` is the **logical** size of one map tile in pixels; the map is
///   always 16 × 12 tiles, so the logical resolution is fixed.
/// - `scale` multiplies the logical resolution to get the initial window size.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub title: String,
    pub tile_size: u32,
    pub scale: u32,
    /// Movement tick period in milliseconds.
    pub tick_ms: u64,
    /// Minimum time between two committed moves in milliseconds.
    pub move_cooldown_ms: u64,
    pub sound_enabled: bool,
    /// Ambient music gain, 0.0 ..= 1.0.
    pub music_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "INTRO QUEST".into(),
            tile_size: 32,
            scale: 2,
            tick_ms: 50,
            move_cooldown_ms: 150,
            sound_enabled: true,
            music_volume: 0.1,
        }
    }
}

impl GameConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TILE_SIZE).contains(&self.tile_size) {
            return Err(invalid("tile_size", format!("{} is outside 1..={MAX_TILE_SIZE}", self.tile_size)));
        }
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(invalid("scale", format!("{} is outside 1..={MAX_SCALE}", self.scale)));
        }
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms", "must be at least 1 ms"));
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(invalid("music_volume", format!("{} is outside 0.0..=1.0", self.music_volume)));
        }
        Ok(())
    }

    pub fn timing(&self) -> Timing {
        Timing {
            tick_period: Duration::from_millis(self.tick_ms),
            move_cooldown: Duration::from_millis(self.move_cooldown_ms),
        }
    }

    /// Logical render resolution in pixels.
    pub fn logical_size(&self) -> (u32, u32) {
        (
            (MAP_WIDTH as u32).saturating_mul(self.tile_size),
            (MAP_HEIGHT as u32).saturating_mul(self.tile_size),
        )
    }

    /// Initial window size in physical pixels.
    pub fn window_size(&self) -> (u32, u32) {
        let (w, h) = self.logical_size();
        (w.saturating_mul(self.scale), h.saturating_mul(self.scale))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}
