//! MicMaster Settings Crate
//!
//! Loads the optional configuration file that tunes the view, grid and
//! interaction defaults. The application never writes it.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, load_or_default, Config, GridSettings, InteractionSettings,
    ViewSettings, WindowSettings, CONFIG_ENV_VAR,
};
pub use error::{SettingsError, SettingsResult};
