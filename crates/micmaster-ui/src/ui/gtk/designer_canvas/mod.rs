//! Designer Canvas - drawing area and pointer handling for the microphone grid
//!
//! Native GTK input is translated into [`DesignerEvent`]s and applied to the
//! shared [`DesignerState`]. Other widgets observe the resulting
//! [`Outcome`]s through [`DesignerCanvas::connect_outcome`].

mod input;
mod rendering;

use gtk4::prelude::*;
use gtk4::{DrawingArea, EventControllerMotion, EventControllerScroll, GestureDrag};
use micmaster_designer::{DesignerEvent, DesignerState, Outcome};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::ui::tools::{DesignerTool, ScrollZoom};

type OutcomeListener = Rc<dyn Fn(&Outcome)>;

#[derive(Clone)]
pub struct DesignerCanvas {
    pub widget: DrawingArea,
    pub state: Rc<RefCell<DesignerState>>,
    // Press position of the drag in progress (widget coordinates)
    pub(crate) drag_origin: Rc<Cell<Option<(f64, f64)>>>,
    listeners: Rc<RefCell<Vec<OutcomeListener>>>,
}

impl DesignerCanvas {
    pub fn new(state: Rc<RefCell<DesignerState>>) -> Rc<Self> {
        let widget = DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .focusable(true)
            .css_classes(vec!["designer-canvas"])
            .build();

        let state_draw = state.clone();
        widget.set_draw_func(move |_area, cr, _width, _height| {
            let state = state_draw.borrow();
            let scene = state.canvas().scene(state.hovered());
            Self::draw(cr, &scene);
        });

        let canvas = Rc::new(Self {
            widget: widget.clone(),
            state,
            drag_origin: Rc::new(Cell::new(None)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        });

        let canvas_resize = canvas.clone();
        widget.connect_resize(move |_, width, height| {
            canvas_resize.dispatch(DesignerEvent::Resize {
                width: f64::from(width),
                height: f64::from(height),
            });
        });

        // Hover tracking
        let motion_ctrl = EventControllerMotion::new();
        let canvas_motion = canvas.clone();
        motion_ctrl.connect_motion(move |_, x, y| {
            canvas_motion.handle_motion(x, y);
        });
        let canvas_leave = canvas.clone();
        motion_ctrl.connect_leave(move |_| {
            canvas_leave.handle_leave();
        });
        widget.add_controller(motion_ctrl);

        // Scroll to zoom
        let scroll_ctrl = EventControllerScroll::new(gtk4::EventControllerScrollFlags::VERTICAL);
        let scroll_zoom = Rc::new(Cell::new(ScrollZoom::new()));
        let canvas_scroll = canvas.clone();
        let scroll_zoom_step = scroll_zoom.clone();
        scroll_ctrl.connect_scroll(move |_, _dx, dy| {
            let mut zoom = scroll_zoom_step.get();
            let events = zoom.feed(dy);
            scroll_zoom_step.set(zoom);
            for event in events {
                canvas_scroll.dispatch(event);
            }
            gtk4::glib::Propagation::Stop
        });
        scroll_ctrl.connect_scroll_end(move |_| {
            let mut zoom = scroll_zoom.get();
            zoom.reset();
            scroll_zoom.set(zoom);
        });
        widget.add_controller(scroll_ctrl);

        let drag_gesture = GestureDrag::new();
        drag_gesture.set_button(1); // Left click only
        let canvas_drag = canvas.clone();
        drag_gesture.connect_drag_begin(move |_gesture, x, y| {
            canvas_drag.handle_drag_begin(x, y);
        });

        let canvas_drag_update = canvas.clone();
        drag_gesture.connect_drag_update(move |_gesture, offset_x, offset_y| {
            canvas_drag_update.handle_drag_update(offset_x, offset_y);
        });

        let canvas_drag_end = canvas.clone();
        drag_gesture.connect_drag_end(move |_gesture, offset_x, offset_y| {
            canvas_drag_end.handle_drag_end(offset_x, offset_y);
        });
        widget.add_controller(drag_gesture);

        canvas.update_cursor();
        canvas
    }

    /// Registers a callback run after every dispatched event.
    pub fn connect_outcome<F: Fn(&Outcome) + 'static>(&self, f: F) {
        self.listeners.borrow_mut().push(Rc::new(f));
    }

    /// Applies an event to the shared state and notifies listeners.
    pub fn dispatch(&self, event: DesignerEvent) -> Outcome {
        let outcome = self.state.borrow_mut().apply(event);

        if outcome.needs_redraw() {
            self.update_cursor();
            self.widget.queue_draw();
        }

        // Listeners may dispatch again; iterate over a snapshot.
        let listeners: Vec<OutcomeListener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&outcome);
        }

        outcome
    }

    pub(crate) fn update_cursor(&self) {
        let state = self.state.borrow();
        let tool = DesignerTool::from_mode(state.mode());
        let cursor = if tool == DesignerTool::Pan && state.is_dragging() {
            "grabbing"
        } else {
            tool.cursor_name()
        };
        self.widget.set_cursor_from_name(Some(cursor));
    }
}
