use micmaster_core::ClipboardError;
use micmaster_designer::{Canvas, DesignerState, GridSpec, ZoomLimits};
use micmaster_settings::config::{GridSettings, ViewSettings};
use micmaster_settings::Config;
use std::thread::JoinHandle;
use tracing::{info, warn};

/// Copy text to the system clipboard using arboard
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable {
        reason: e.to_string(),
    })?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed {
            reason: e.to_string(),
        })?;

    // Keep clipboard alive for a moment so managers can take ownership
    std::thread::sleep(std::time::Duration::from_millis(100));
    Ok(())
}

/// Copies the export string on a worker thread, logging the result.
///
/// Returns immediately; [`copy_to_clipboard`] holds the clipboard for a moment
/// and must not run on the UI thread. Failures are not surfaced.
pub fn copy_export(text: String) -> JoinHandle<()> {
    std::thread::spawn(move || match copy_to_clipboard(&text) {
        Ok(()) => info!(bytes = text.len(), "Copied export to clipboard"),
        Err(e) => warn!("Failed to copy export: {}", e),
    })
}

pub fn zoom_limits(view: &ViewSettings) -> ZoomLimits {
    ZoomLimits {
        initial: view.initial_zoom,
        min: view.min_zoom,
        max: view.max_zoom,
        step: view.zoom_step,
    }
}

pub fn grid_spec(grid: &GridSettings) -> GridSpec {
    GridSpec {
        size_m: grid.size_m,
        divisions: grid.divisions,
    }
}

/// Builds the designer described by the loaded settings.
pub fn designer_from_config(config: &Config) -> DesignerState {
    let canvas = Canvas::with_settings(
        f64::from(config.window.width),
        f64::from(config.window.height),
        zoom_limits(&config.view),
        grid_spec(&config.grid),
    );
    DesignerState::with_canvas(canvas).with_click_threshold(config.interaction.click_threshold_px)
}
