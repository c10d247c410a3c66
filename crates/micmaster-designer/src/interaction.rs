//! Interaction modes and click/drag disambiguation.
//!
//! A press followed by a release is a click only when the release lands
//! within the click threshold of the press on both axes. Clicks dispatch by
//! mode; anything longer is a drag, which only pans (and only in pan mode).

use std::fmt;

use crate::model::{MicrophoneId, Point};

/// Interaction modes, selected exclusively from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Pan,
    #[default]
    Add,
    Delete,
    Edit,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pan => write!(f, "pan"),
            Self::Add => write!(f, "add"),
            Self::Delete => write!(f, "delete"),
            Self::Edit => write!(f, "edit"),
        }
    }
}

/// An in-progress press on the canvas (screen space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Where the press started.
    pub origin: Point,
    /// Last recorded pointer position, used for incremental panning.
    pub last: Point,
}

impl DragState {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            last: origin,
        }
    }

    /// Records a new pointer position and returns the delta from the
    /// previous one.
    pub fn advance(&mut self, to: Point) -> (f64, f64) {
        let delta = (to.x - self.last.x, to.y - self.last.y);
        self.last = to;
        delta
    }
}

/// What a completed press/release gesture asks the editor to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickAction {
    /// Not a click, or a click with nothing to act on.
    None,
    /// Place a new microphone under the release point (screen space).
    Add { at: Point },
    /// Remove the hovered microphone.
    Delete(MicrophoneId),
    /// Open the coordinate form for the hovered microphone.
    OpenEdit(MicrophoneId),
}

/// Returns true when `release` is within `threshold` pixels of `origin` on
/// both axes.
pub fn is_click(origin: Point, release: Point, threshold: f64) -> bool {
    (release.x - origin.x).abs() < threshold && (release.y - origin.y).abs() < threshold
}

/// Decides what a release means.
///
/// The threshold applies in every mode: a gesture that moved too far is never
/// a click, even in add mode.
pub fn classify_release(
    mode: Mode,
    origin: Point,
    release: Point,
    hovered: Option<MicrophoneId>,
    threshold: f64,
) -> ClickAction {
    if !is_click(origin, release, threshold) {
        return ClickAction::None;
    }

    match (mode, hovered) {
        (Mode::Add, _) => ClickAction::Add { at: release },
        (Mode::Delete, Some(id)) => ClickAction::Delete(id),
        (Mode::Edit, Some(id)) => ClickAction::OpenEdit(id),
        (Mode::Delete | Mode::Edit, None) | (Mode::Pan, _) => ClickAction::None,
    }
}
