//! Toolbar tools and keyboard shortcuts.

use micmaster_designer::{DesignerEvent, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignerTool {
    Pan,
    Add,
    Edit,
    Delete,
}

impl DesignerTool {
    /// Toolbar order.
    pub const ALL: [DesignerTool; 4] = [
        DesignerTool::Pan,
        DesignerTool::Add,
        DesignerTool::Edit,
        DesignerTool::Delete,
    ];

    pub fn mode(&self) -> Mode {
        match self {
            DesignerTool::Pan => Mode::Pan,
            DesignerTool::Add => Mode::Add,
            DesignerTool::Edit => Mode::Edit,
            DesignerTool::Delete => Mode::Delete,
        }
    }

    pub fn from_mode(mode: Mode) -> Self {
        match mode {
            Mode::Pan => DesignerTool::Pan,
            Mode::Add => DesignerTool::Add,
            Mode::Edit => DesignerTool::Edit,
            Mode::Delete => DesignerTool::Delete,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DesignerTool::Pan => "Pan",
            DesignerTool::Add => "Add",
            DesignerTool::Edit => "Edit",
            DesignerTool::Delete => "Delete",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DesignerTool::Pan => "input-mouse-symbolic",
            DesignerTool::Add => "list-add-symbolic",
            DesignerTool::Edit => "document-edit-symbolic",
            DesignerTool::Delete => "edit-delete-symbolic",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            DesignerTool::Pan => "Pan (P)",
            DesignerTool::Add => "Add microphone (A)",
            DesignerTool::Edit => "Edit microphone (E)",
            DesignerTool::Delete => "Delete microphone (D)",
        }
    }

    /// CSS cursor name shown over the canvas.
    pub fn cursor_name(&self) -> &'static str {
        match self {
            DesignerTool::Pan => "grab",
            DesignerTool::Add => "crosshair",
            DesignerTool::Edit => "pointer",
            DesignerTool::Delete => "not-allowed",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            DesignerTool::Pan => 'p',
            DesignerTool::Add => 'a',
            DesignerTool::Edit => 'e',
            DesignerTool::Delete => 'd',
        }
    }
}

/// View and document buttons next to the mode tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    ZoomIn,
    ZoomOut,
    ResetView,
    ClearAll,
}

impl ToolbarAction {
    /// Toolbar order.
    pub const ALL: [ToolbarAction; 4] = [
        ToolbarAction::ZoomIn,
        ToolbarAction::ZoomOut,
        ToolbarAction::ResetView,
        ToolbarAction::ClearAll,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            ToolbarAction::ZoomIn => "zoom-in-symbolic",
            ToolbarAction::ZoomOut => "zoom-out-symbolic",
            ToolbarAction::ResetView => "zoom-original-symbolic",
            ToolbarAction::ClearAll => "edit-clear-all-symbolic",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            ToolbarAction::ZoomIn => "Zoom in (+)",
            ToolbarAction::ZoomOut => "Zoom out (-)",
            ToolbarAction::ResetView => "Reset view (0)",
            ToolbarAction::ClearAll => "Remove all microphones",
        }
    }

    pub fn event(&self) -> DesignerEvent {
        match self {
            ToolbarAction::ZoomIn => DesignerEvent::ZoomIn,
            ToolbarAction::ZoomOut => DesignerEvent::ZoomOut,
            ToolbarAction::ResetView => DesignerEvent::ResetView,
            ToolbarAction::ClearAll => DesignerEvent::ClearAll,
        }
    }
}

/// Most zoom steps a single scroll event may produce.
const MAX_SCROLL_STEPS: u32 = 10;

/// Turns scroll deltas into zoom steps.
///
/// Wheel notches report whole units and zoom one step each. Smooth scrolling
/// reports fractions, which accumulate until they add up to a full unit;
/// the remainder carries over to the next event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollZoom {
    accumulated: f64,
}

impl ScrollZoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one vertical delta. Negative scrolls zoom in.
    pub fn feed(&mut self, dy: f64) -> Vec<DesignerEvent> {
        if !dy.is_finite() {
            return Vec::new();
        }

        self.accumulated += dy;
        let whole = self.accumulated.trunc();
        self.accumulated -= whole;

        let steps = whole.abs().min(f64::from(MAX_SCROLL_STEPS)) as usize;
        let event = if whole < 0.0 {
            DesignerEvent::ZoomIn
        } else {
            DesignerEvent::ZoomOut
        };
        vec![event; steps]
    }

    /// Drops any partial step, e.g. when a scroll gesture ends.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

/// Maps a key press on the canvas to a designer event.
pub fn shortcut_event(key: char, ctrl: bool) -> Option<DesignerEvent> {
    let key = key.to_ascii_lowercase();
    if ctrl {
        return (key == 'c').then_some(DesignerEvent::CopyExport);
    }

    if let Some(tool) = DesignerTool::ALL.iter().find(|t| t.shortcut() == key) {
        return Some(DesignerEvent::SetMode(tool.mode()));
    }

    match key {
        '+' | '=' => Some(DesignerEvent::ZoomIn),
        '-' | '_' => Some(DesignerEvent::ZoomOut),
        '0' => Some(DesignerEvent::ResetView),
        _ => None,
    }
}
