use gtk4::prelude::*;
use gtk4::{Box, Button, Frame, Orientation, PolicyType, ScrolledWindow, TextView, WrapMode};
use micmaster_designer::{DesignerEvent, Outcome};
use std::rc::Rc;

use super::designer_canvas::DesignerCanvas;
use crate::helpers::copy_export;

/// Read-only view of the NumPy export with a copy button.
pub struct ExportPanel {
    pub widget: Frame,
    text_view: TextView,
}

impl ExportPanel {
    pub fn new(canvas: Rc<DesignerCanvas>) -> Rc<Self> {
        let widget = Frame::new(Some("NumPy export"));
        let content = Box::new(Orientation::Vertical, 4);
        content.set_margin_top(4);
        content.set_margin_bottom(4);
        content.set_margin_start(4);
        content.set_margin_end(4);

        let text_view = TextView::builder()
            .editable(false)
            .cursor_visible(false)
            .monospace(true)
            .wrap_mode(WrapMode::None)
            .build();

        let scrolled = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Automatic)
            .vscrollbar_policy(PolicyType::Automatic)
            .min_content_height(120)
            .child(&text_view)
            .build();
        content.append(&scrolled);

        let copy_btn = Button::with_label("Copy to clipboard");
        copy_btn.set_tooltip_text(Some("Copy the array (Ctrl+C)"));
        let canvas_copy = canvas.clone();
        copy_btn.connect_clicked(move |_| {
            canvas_copy.dispatch(DesignerEvent::CopyExport);
        });
        content.append(&copy_btn);
        widget.set_child(Some(&content));

        let panel = Rc::new(Self { widget, text_view });
        panel.refresh(&canvas.state.borrow().export_string());

        let panel_outcome = panel.clone();
        let state = canvas.state.clone();
        canvas.connect_outcome(move |outcome| match outcome {
            Outcome::Copy(text) => {
                copy_export(text.clone());
            }
            Outcome::Added(_) | Outcome::Deleted(_) | Outcome::Edited(_) | Outcome::Redraw => {
                panel_outcome.refresh(&state.borrow().export_string());
            }
            _ => {}
        });

        panel
    }

    pub fn refresh(&self, export: &str) {
        self.text_view.buffer().set_text(export);
    }
}
