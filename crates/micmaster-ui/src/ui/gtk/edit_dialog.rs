use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Entry, Grid, Label, Orientation, Window};
use micmaster_core::CoordinateAxis;
use micmaster_designer::{DesignerEvent, Outcome};
use std::cell::Cell;
use std::rc::Rc;

use super::designer_canvas::DesignerCanvas;

/// Modal form for typing exact coordinates of one microphone.
///
/// Submitting text that does not parse leaves the dialog open and unchanged.
pub struct EditDialog {
    window: Window,
    x_entry: Entry,
    y_entry: Entry,
    canvas: Rc<DesignerCanvas>,
    // Set while entries are filled from state, so no EditField is sent back
    syncing: Cell<bool>,
}

impl EditDialog {
    pub fn new(parent: &impl IsA<Window>, canvas: Rc<DesignerCanvas>) -> Rc<Self> {
        let window = Window::builder()
            .title("Edit Microphone")
            .modal(true)
            .transient_for(parent)
            .hide_on_close(true)
            .resizable(false)
            .build();

        let content = Box::new(Orientation::Vertical, 8);
        content.set_margin_top(12);
        content.set_margin_bottom(12);
        content.set_margin_start(12);
        content.set_margin_end(12);

        let grid = Grid::builder().row_spacing(8).column_spacing(8).build();
        let x_entry = Entry::builder().hexpand(true).build();
        let y_entry = Entry::builder().hexpand(true).build();
        for (row, (axis, entry)) in [(CoordinateAxis::X, &x_entry), (CoordinateAxis::Y, &y_entry)]
            .into_iter()
            .enumerate()
        {
            let label = Label::new(Some(&format!("{axis} (m):")));
            label.set_halign(Align::Start);
            grid.attach(&label, 0, row as i32, 1, 1);
            grid.attach(entry, 1, row as i32, 1, 1);
        }
        content.append(&grid);

        let buttons = Box::new(Orientation::Horizontal, 8);
        buttons.set_halign(Align::End);
        let cancel_btn = Button::with_label("Cancel");
        let update_btn = Button::with_label("Update");
        update_btn.add_css_class("suggested-action");
        buttons.append(&cancel_btn);
        buttons.append(&update_btn);
        content.append(&buttons);
        window.set_child(Some(&content));

        let dialog = Rc::new(Self {
            window,
            x_entry,
            y_entry,
            canvas: canvas.clone(),
            syncing: Cell::new(false),
        });

        for (axis, entry) in [
            (CoordinateAxis::X, dialog.x_entry.clone()),
            (CoordinateAxis::Y, dialog.y_entry.clone()),
        ] {
            let dialog_changed = dialog.clone();
            entry.connect_changed(move |entry| {
                if dialog_changed.syncing.get() {
                    return;
                }
                dialog_changed.canvas.dispatch(DesignerEvent::EditField {
                    axis,
                    text: entry.text().to_string(),
                });
            });

            let canvas_activate = canvas.clone();
            entry.connect_activate(move |_| {
                canvas_activate.dispatch(DesignerEvent::SubmitEdit);
            });
        }

        let canvas_update = canvas.clone();
        update_btn.connect_clicked(move |_| {
            canvas_update.dispatch(DesignerEvent::SubmitEdit);
        });

        let canvas_cancel = canvas.clone();
        cancel_btn.connect_clicked(move |_| {
            canvas_cancel.dispatch(DesignerEvent::CancelEdit);
        });

        let canvas_close = canvas.clone();
        dialog.window.connect_close_request(move |_| {
            canvas_close.dispatch(DesignerEvent::CancelEdit);
            gtk4::glib::Propagation::Proceed
        });

        let dialog_outcome = dialog.clone();
        canvas.connect_outcome(move |outcome| match outcome {
            Outcome::EditOpened(_) => dialog_outcome.open(),
            _ => dialog_outcome.close_if_finished(),
        });

        dialog
    }

    /// Fills the entries from the open form and shows the dialog.
    pub fn open(&self) {
        let texts = self.canvas.state.borrow().edit_form().map(|form| {
            (
                form.text(CoordinateAxis::X).to_string(),
                form.text(CoordinateAxis::Y).to_string(),
            )
        });
        let Some((x, y)) = texts else {
            return;
        };

        self.syncing.set(true);
        self.x_entry.set_text(&x);
        self.y_entry.set_text(&y);
        self.syncing.set(false);

        self.window.present();
        self.x_entry.grab_focus();
    }

    fn close_if_finished(&self) {
        if self.window.is_visible() && !self.canvas.state.borrow().is_edit_open() {
            self.window.set_visible(false);
        }
    }
}
