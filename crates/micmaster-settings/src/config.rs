//! Configuration for MicMaster
//!
//! The file is optional and read once at startup. Every section and key may
//! be omitted; missing values fall back to the built-in defaults from
//! `micmaster_core::constants`.
//!
//! ```toml
//! [view]
//! initial_zoom = 50.0
//! min_zoom = 20.0
//! max_zoom = 200.0
//! zoom_step = 1.2
//!
//! [grid]
//! size_m = 10.0
//! divisions = 20
//!
//! [interaction]
//! click_threshold_px = 5.0
//!
//! [window]
//! width = 1200
//! height = 800
//! ```

use std::path::{Path, PathBuf};

use micmaster_core::constants::{
    CLICK_THRESHOLD_PX, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_ZOOM, GRID_DIVISIONS,
    GRID_SIZE_M, MAX_GRID_DIVISIONS, MAX_GRID_SIZE_M, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{SettingsError, SettingsResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "MICMASTER_CONFIG";

const CONFIG_DIR_NAME: &str = "micmaster";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Zoom bounds and step, in pixels per meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplier for one zoom-in step; must be greater than 1.
    pub zoom_step: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            initial_zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
        }
    }
}

/// Drawn grid extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Side length in meters.
    pub size_m: f64,
    pub divisions: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size_m: GRID_SIZE_M,
            divisions: GRID_DIVISIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Per-axis movement below which a press and release count as a click.
    pub click_threshold_px: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            click_threshold_px: CLICK_THRESHOLD_PX,
        }
    }
}

/// Initial window size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH as u32,
            height: DEFAULT_CANVAS_HEIGHT as u32,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub view: ViewSettings,
    pub grid: GridSettings,
    pub interaction: InteractionSettings,
    pub window: WindowSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (TOML or JSON)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let view = &self.view;
        for (key, value) in [
            ("view.initial_zoom", view.initial_zoom),
            ("view.min_zoom", view.min_zoom),
            ("view.max_zoom", view.max_zoom),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::invalid(key, "must be a positive number"));
            }
        }

        if view.min_zoom > view.max_zoom {
            return Err(SettingsError::invalid(
                "view.min_zoom",
                format!("{} exceeds max_zoom {}", view.min_zoom, view.max_zoom),
            ));
        }

        if view.initial_zoom < view.min_zoom || view.initial_zoom > view.max_zoom {
            return Err(SettingsError::invalid(
                "view.initial_zoom",
                format!(
                    "{} is outside [{}, {}]",
                    view.initial_zoom, view.min_zoom, view.max_zoom
                ),
            ));
        }

        if !view.zoom_step.is_finite() || view.zoom_step <= 1.0 {
            return Err(SettingsError::invalid("view.zoom_step", "must be > 1"));
        }

        let size = self.grid.size_m;
        if !size.is_finite() || size <= 0.0 || size > MAX_GRID_SIZE_M {
            return Err(SettingsError::invalid(
                "grid.size_m",
                format!("must be in (0, {MAX_GRID_SIZE_M}]"),
            ));
        }

        if self.grid.divisions == 0 || self.grid.divisions > MAX_GRID_DIVISIONS {
            return Err(SettingsError::invalid(
                "grid.divisions",
                format!("must be in [1, {MAX_GRID_DIVISIONS}]"),
            ));
        }

        let threshold = self.interaction.click_threshold_px;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(SettingsError::invalid(
                "interaction.click_threshold_px",
                "must be > 0",
            ));
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(SettingsError::invalid("window", "dimensions must be > 0"));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Location of the config file.
///
/// `MICMASTER_CONFIG` wins when set; otherwise the platform config
/// directory is used (`$XDG_CONFIG_HOME/micmaster/config.toml` on Linux).
pub fn default_config_path() -> SettingsResult<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })
}

/// Loads the config at `path`, falling back to defaults.
///
/// A missing file is normal and silent; an unreadable or invalid file is
/// reported with a warning.
pub fn load_or_default(path: Option<&Path>) -> Config {
    let resolved = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("{}, using default settings", e);
                return Config::default();
            }
        },
    };

    if !resolved.exists() {
        debug!(path = %resolved.display(), "No config file, using defaults");
        return Config::default();
    }

    match Config::load_from_file(&resolved) {
        Ok(config) => {
            info!(path = %resolved.display(), "Loaded settings");
            config
        }
        Err(e) => {
            warn!(path = %resolved.display(), "Ignoring config file: {}", e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.view.initial_zoom, 50.0);
        assert_eq!(config.grid.divisions, 20);
        assert_eq!(config.window.width, 1200);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[view]\nmax_zoom = 400.0\n").unwrap();
        assert_eq!(config.view.max_zoom, 400.0);
        assert_eq!(config.view.min_zoom, 20.0);
        assert_eq!(config.interaction.click_threshold_px, 5.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.view.min_zoom = 300.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.view.initial_zoom = 10.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.view.zoom_step = 1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.grid.divisions = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.interaction.click_threshold_px = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.view.max_zoom = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let config: Config = toml::from_str("[grid]\ndivisions = 4294967295\n").unwrap();
        match config.validate() {
            Err(SettingsError::InvalidSetting { key, .. }) => assert_eq!(key, "grid.divisions"),
            other => panic!("unexpected {other:?}"),
        }

        let mut config = Config::default();
        config.grid.divisions = MAX_GRID_DIVISIONS;
        assert!(config.validate().is_ok());
        config.grid.divisions = MAX_GRID_DIVISIONS + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.grid.size_m = 1e300;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_setting_names_key() {
        let mut config = Config::default();
        config.grid.size_m = 0.0;
        match config.validate() {
            Err(SettingsError::InvalidSetting { key, .. }) => assert_eq!(key, "grid.size_m"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
