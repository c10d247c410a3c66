//! # MicMaster UI
//!
//! Front end for the microphone designer. The toolkit-neutral pieces (tool
//! metadata, keyboard shortcuts, hover tracking, clipboard, settings wiring)
//! are always built; the GTK 4 window is behind the `gtk` feature.

pub mod helpers;
pub mod ui;

#[cfg(feature = "gtk")]
pub mod gtk_app;

pub use helpers::{copy_to_clipboard, designer_from_config, grid_spec, zoom_limits};
pub use micmaster_settings::Config;
pub use ui::hover::{hover_events, sync_hover};
pub use ui::status::status_text;
pub use ui::tools::{shortcut_event, DesignerTool, ScrollZoom, ToolbarAction};
