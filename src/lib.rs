//! # MicMaster
//!
//! An interactive editor for laying out microphone positions on a 2-D grid
//! measured in meters, exporting them as a NumPy array literal.
//!
//! ## Architecture
//!
//! MicMaster is organized as a workspace with multiple crates:
//!
//! 1. **micmaster-core** - Constants, errors, coordinate formatting and parsing
//! 2. **micmaster-designer** - Microphone store, viewport, interaction reducer, scene, export
//! 3. **micmaster-settings** - Optional TOML configuration
//! 4. **micmaster-ui** - GTK 4 front end (behind the `gtk` feature), clipboard
//! 5. **micmaster** - Main binary that integrates all crates

pub use micmaster_designer as designer;

pub use micmaster_core::{ClipboardError, EditError, StoreError};
pub use micmaster_designer::{
    Canvas, DesignerEvent, DesignerState, Microphone, MicrophoneId, Mode, Outcome, Point, Scene,
    Viewport,
};
pub use micmaster_settings::{load_or_default, Config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
