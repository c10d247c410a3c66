//! Hover tracking for surfaces without per-marker pointer events.
//!
//! The designer only learns about hover through marker enter/leave events.
//! A surface that paints markers itself hit-tests every pointer position and
//! turns changes of the marker under the pointer into those events.

use micmaster_designer::{DesignerEvent, DesignerState, MicrophoneId, Point};

/// Events that move the hover reference from `current` to `under`.
pub fn hover_events(
    current: Option<MicrophoneId>,
    under: Option<MicrophoneId>,
) -> Vec<DesignerEvent> {
    if current == under {
        return Vec::new();
    }

    let mut events = Vec::with_capacity(2);
    if let Some(id) = current {
        events.push(DesignerEvent::MarkerLeave(id));
    }
    if let Some(id) = under {
        events.push(DesignerEvent::MarkerEnter(id));
    }
    events
}

/// Updates hover for a pointer at `at`, or `None` once it leaves the surface.
///
/// Returns true when the canvas needs repainting.
pub fn sync_hover(state: &mut DesignerState, at: Option<Point>) -> bool {
    let under = at.and_then(|p| state.canvas().hit_test(p));
    hover_events(state.hovered(), under)
        .into_iter()
        .fold(false, |redraw, event| {
            state.apply(event).needs_redraw() || redraw
        })
}
