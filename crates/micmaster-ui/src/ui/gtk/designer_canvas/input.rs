//! Input handling for the designer canvas

use super::*;
use gtk4::gdk::{Key, ModifierType};
use micmaster_designer::Point;

use crate::ui::hover::sync_hover;
use crate::ui::tools::shortcut_event;

impl DesignerCanvas {
    pub fn zoom_in(&self) {
        self.dispatch(DesignerEvent::ZoomIn);
    }

    pub fn zoom_out(&self) {
        self.dispatch(DesignerEvent::ZoomOut);
    }

    pub fn reset_view(&self) {
        self.dispatch(DesignerEvent::ResetView);
    }

    /// Handles a key press routed from the window.
    pub fn handle_key(&self, keyval: Key, modifiers: ModifierType) -> gtk4::glib::Propagation {
        let ctrl = modifiers.contains(ModifierType::CONTROL_MASK);
        match keyval.to_unicode().and_then(|ch| shortcut_event(ch, ctrl)) {
            Some(event) => {
                self.dispatch(event);
                gtk4::glib::Propagation::Stop
            }
            None => gtk4::glib::Propagation::Proceed,
        }
    }

    pub(super) fn handle_motion(&self, x: f64, y: f64) {
        let redraw = sync_hover(&mut self.state.borrow_mut(), Some(Point::new(x, y)));
        if redraw {
            self.widget.queue_draw();
        }
    }

    pub(super) fn handle_leave(&self) {
        let redraw = sync_hover(&mut self.state.borrow_mut(), None);
        if redraw {
            self.widget.queue_draw();
        }
        self.dispatch(DesignerEvent::PointerLeave);
        self.update_cursor();
    }

    pub(super) fn handle_drag_begin(&self, x: f64, y: f64) {
        self.widget.grab_focus();
        self.drag_origin.set(Some((x, y)));
        self.dispatch(DesignerEvent::PointerDown(Point::new(x, y)));
        self.update_cursor();
    }

    pub(super) fn handle_drag_update(&self, offset_x: f64, offset_y: f64) {
        if let Some((x, y)) = self.drag_origin.get() {
            self.dispatch(DesignerEvent::PointerMove(Point::new(
                x + offset_x,
                y + offset_y,
            )));
        }
    }

    pub(super) fn handle_drag_end(&self, offset_x: f64, offset_y: f64) {
        if let Some((x, y)) = self.drag_origin.take() {
            let release = Point::new(x + offset_x, y + offset_y);
            self.dispatch(DesignerEvent::PointerUp(release));
            // The marker under the pointer may have changed.
            self.handle_motion(release.x, release.y);
        }
        self.update_cursor();
    }
}
