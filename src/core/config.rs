//! Game tuning and play-field dimensions.
//!
//! Every constant the simulation uses lives in `GameConfig` so components
//! receive it at construction instead of reading globals. Values are in
//! world units (the classic 800x600 canvas); per-tick values are relative to
//! a 16ms reference frame.

use super::constants::{
    CONFIG_FILE_NAME, DEFAULT_FRAME_INTERVAL_MS, GAP_MARGIN_BOTTOM, GAP_MARGIN_TOP,
};
use crate::error::GameError;
use crate::utils::persistence::{app_path, load_json_or_default};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Width and height of the play field in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: f64,
    pub height: f64,
}

impl FieldSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Derive a field for a terminal play area of `cols` x `rows` cells.
    ///
    /// Width stays at the configured value so obstacle spacing feels the same
    /// on every terminal; height follows the area's aspect ratio, clamped so
    /// a gap (plus margins and the flyer) always fits.
    pub fn fit_terminal(cols: u16, rows: u16, config: &GameConfig) -> Self {
        let width = config.field_width;
        if cols == 0 || rows == 0 {
            return config.field();
        }
        let height = width * (rows as f64 * CELL_ASPECT) / cols as f64;
        Self {
            width,
            height: height.max(config.min_field_height()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,

    // Flyer physics
    /// Velocity added per reference frame (positive = downward).
    pub gravity: f64,
    /// Velocity set by a flap (negative = upward).
    pub flap_strength: f64,
    /// Fastest allowed climb.
    pub min_velocity: f64,
    /// Terminal velocity.
    pub max_velocity: f64,
    pub rotation_factor: f64,
    pub max_rotation: f64,
    pub flyer_size: f64,
    pub flyer_start_x: f64,

    // Obstacles
    pub obstacle_speed: f64,
    pub obstacle_gap: f64,
    pub obstacle_width: f64,
    pub gap_margin_top: f64,
    pub gap_margin_bottom: f64,
    pub spawn_interval_ms: f64,

    /// Terminal frame pacing.
    pub frame_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,
            gravity: 0.5,
            flap_strength: -8.0,
            min_velocity: -12.0,
            max_velocity: 10.0,
            rotation_factor: 0.1,
            max_rotation: 0.5,
            flyer_size: 40.0,
            flyer_start_x: 150.0,
            obstacle_speed: 2.0,
            obstacle_gap: 150.0,
            obstacle_width: 60.0,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
            spawn_interval_ms: 2000.0,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    pub fn field(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }

    /// Smallest field height in which an obstacle gap and the flyer fit.
    pub fn min_field_height(&self) -> f64 {
        self.obstacle_gap + self.gap_margin_top + self.gap_margin_bottom + self.flyer_size
    }

    /// Flyer spawn point: fixed column, vertically centered.
    pub fn flyer_start(&self, field: FieldSize) -> (f64, f64) {
        (
            self.flyer_start_x,
            field.height / 2.0 - self.flyer_size / 2.0,
        )
    }

    /// Reject values that would produce negative-size geometry or a
    /// degenerate spawn schedule.
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("flyer_size", self.flyer_size),
            ("obstacle_gap", self.obstacle_gap),
            ("obstacle_width", self.obstacle_width),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("gap_margin_top", self.gap_margin_top),
            ("gap_margin_bottom", self.gap_margin_bottom),
            ("obstacle_speed", self.obstacle_speed),
            ("max_rotation", self.max_rotation),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GameError::InvalidConfig(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.min_velocity > self.max_velocity {
            return Err(GameError::InvalidConfig(format!(
                "min_velocity ({}) exceeds max_velocity ({})",
                self.min_velocity, self.max_velocity
            )));
        }

        if self.field_height < self.min_field_height() {
            return Err(GameError::InvalidConfig(format!(
                "field_height {} is too small for a {} gap with margins (need {})",
                self.field_height,
                self.obstacle_gap,
                self.min_field_height()
            )));
        }

        if self.frame_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "frame_interval_ms must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Read and validate a config file that the user named explicitly.
    /// Unlike the default location, a missing or malformed file is an error.
    pub fn from_path(path: &Path) -> Result<Self, GameError> {
        let json = fs::read_to_string(path).map_err(GameError::ConfigIo)?;
        let config: GameConfig = serde_json::from_str(&json).map_err(GameError::ConfigParse)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load `path` if given, else `~/.flappy-pigeon/config.json` when it
    /// exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, GameError> {
        if let Some(path) = path {
            return Self::from_path(path);
        }
        let config: GameConfig = match app_path(CONFIG_FILE_NAME) {
            Ok(default_path) => load_json_or_default(&default_path),
            Err(e) => {
                tracing::warn!(error = %e, "No home directory, using default config");
                GameConfig::default()
            }
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field(), FieldSize::new(800.0, 600.0));
    }

    #[test]
    fn test_flyer_start_is_vertically_centered() {
        let config = GameConfig::default();
        let (x, y) = config.flyer_start(config.field());
        assert!((x - 150.0).abs() < f64::EPSILON);
        assert!((y - 280.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_spawn_interval_rejected() {
        let config = GameConfig {
            spawn_interval_ms: 0.0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_negative_field_height_rejected() {
        let config = GameConfig {
            field_height: -600.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_field_too_short_for_gap_rejected() {
        let config = GameConfig {
            field_height: 200.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_velocity_bounds_rejected() {
        let config = GameConfig {
            min_velocity: 5.0,
            max_velocity: -5.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "gravity": 0.25 }"#).unwrap();
        assert!((config.gravity - 0.25).abs() < f64::EPSILON);
        assert!((config.flap_strength - (-8.0)).abs() < f64::EPSILON);
        assert!((config.spawn_interval_ms - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_terminal_keeps_width() {
        let config = GameConfig::default();
        // 80x30 cells → 800 wide, 800 * 60 / 80 = 600 tall
        let field = FieldSize::fit_terminal(80, 30, &config);
        assert!((field.width - 800.0).abs() < f64::EPSILON);
        assert!((field.height - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_terminal_clamps_short_terminals() {
        let config = GameConfig::default();
        let field = FieldSize::fit_terminal(200, 5, &config);
        assert!((field.height - config.min_field_height()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_terminal_empty_area_falls_back_to_config() {
        let config = GameConfig::default();
        assert_eq!(FieldSize::fit_terminal(0, 0, &config), config.field());
    }

    #[test]
    fn test_partial_config_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"obstacle_gap": 180.0, "spawn_interval_ms": 1500.0}}"#).unwrap();
        let config = GameConfig::from_path(file.path()).unwrap();
        assert!((config.obstacle_gap - 180.0).abs() < f64::EPSILON);
        assert!((config.spawn_interval_ms - 1500.0).abs() < f64::EPSILON);
        assert!((config.gravity - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_explicit_config_errors() {
        let missing = GameConfig::from_path(Path::new("/nonexistent/flappy/config.json"));
        assert!(matches!(missing, Err(GameError::ConfigIo(_))));

        let mut garbage = NamedTempFile::new().unwrap();
        write!(garbage, "not json").unwrap();
        assert!(matches!(
            GameConfig::from_path(garbage.path()),
            Err(GameError::ConfigParse(_))
        ));

        let mut invalid = NamedTempFile::new().unwrap();
        write!(invalid, r#"{{"field_height": 100.0}}"#).unwrap();
        assert!(matches!(
            GameConfig::from_path(invalid.path()),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
