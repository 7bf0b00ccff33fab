//! Stage configuration.
//!
//! Loaded from `pixwar.ron` next to the executable (or the web root on
//! WASM). Every field has a default, so a partial file, a malformed file,
//! or no file at all still produces a playable stage.

use macroquad::file::load_string;
use macroquad::logging::{info, warn};
use serde::Deserialize;

/// Default configuration file name.
pub const CONFIG_PATH: &str = "pixwar.ron";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Stage width in pixels.
    pub width: f32,
    /// Stage height in pixels.
    pub height: f32,
    /// Adversary grid columns.
    pub columns: u32,
    /// Adversary grid rows.
    pub rows: u32,
    /// Center-to-center spacing of the adversary grid.
    pub spacing: f32,
    /// Top-left grid cell center, x.
    pub grid_origin_x: f32,
    /// Top-left grid cell center, y.
    pub grid_origin_y: f32,
    /// Shot sound volume, 0.0..=1.0.
    pub volume: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: 310.0,
            height: 300.0,
            columns: 8,
            rows: 3,
            spacing: 30.0,
            grid_origin_x: 30.0,
            grid_origin_y: 30.0,
            volume: 1.0,
        }
    }
}

/// Load the stage configuration, falling back to defaults on any failure.
pub async fn load_or_default(path: &str) -> StageConfig {
    match load_string(path).await {
        Ok(text) => match ron::from_str(&text) {
            Ok(config) => {
                info!("Loaded stage config from {}", path);
                config
            }
            Err(e) => {
                warn!("Ignoring malformed {}: {}", path, e);
                StageConfig::default()
            }
        },
        Err(_) => {
            info!("No {} found, using default stage", path);
            StageConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_classic_stage() {
        let config = StageConfig::default();
        assert_eq!(config.columns, 8);
        assert_eq!(config.rows, 3);
        assert_eq!(config.spacing, 30.0);
    }

    #[test]
    fn partial_ron_falls_back_per_field() {
        let config: StageConfig = ron::from_str("(width: 640.0, columns: 10)").unwrap();
        assert_eq!(config.width, 640.0);
        assert_eq!(config.columns, 10);
        // Unspecified fields keep their defaults.
        assert_eq!(config.rows, 3);
        assert_eq!(config.volume, 1.0);
    }

    #[test]
    fn empty_ron_is_all_defaults() {
        let config: StageConfig = ron::from_str("()").unwrap();
        assert_eq!(config.height, 300.0);
    }
}
