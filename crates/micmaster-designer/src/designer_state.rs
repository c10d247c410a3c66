//! Designer state manager for UI integration.
//!
//! [`DesignerState`] is the view-model behind the canvas: it owns the canvas
//! plus the transient interaction state (press in progress, hovered marker,
//! open edit form) and advances it one [`DesignerEvent`] at a time. Front ends
//! translate their native input into events and repaint when the returned
//! [`Outcome`] asks for it; tests drive the same entry point without a
//! surface.

use tracing::debug;

use crate::canvas::Canvas;
use crate::edit_form::EditForm;
use crate::interaction::{classify_release, ClickAction, DragState, Mode};
use crate::model::{MicrophoneId, Point};
use micmaster_core::constants::CLICK_THRESHOLD_PX;
use micmaster_core::{CoordinateAxis, EditError};

/// Input to the designer.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignerEvent {
    /// Button pressed on the canvas (screen coordinates).
    PointerDown(Point),
    /// Pointer moved over the canvas.
    PointerMove(Point),
    /// Button released on the canvas.
    PointerUp(Point),
    /// Pointer left the canvas.
    PointerLeave,
    /// Pointer entered a marker.
    MarkerEnter(MicrophoneId),
    /// Pointer left a marker.
    MarkerLeave(MicrophoneId),
    /// Toolbar mode selection.
    SetMode(Mode),
    ZoomIn,
    ZoomOut,
    ResetView,
    /// The surface reported its size.
    Resize { width: f64, height: f64 },
    /// Text typed into an edit form field.
    EditField { axis: CoordinateAxis, text: String },
    SubmitEdit,
    CancelEdit,
    /// Copy the export string.
    CopyExport,
    /// Remove every microphone.
    ClearAll,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing visible changed.
    Unchanged,
    /// View state changed; repaint.
    Redraw,
    Added(MicrophoneId),
    Deleted(MicrophoneId),
    EditOpened(MicrophoneId),
    Edited(MicrophoneId),
    /// Submit failed; the form stays open with its text untouched.
    EditRejected(EditError),
    EditClosed,
    /// Text to place on the clipboard.
    Copy(String),
}

impl Outcome {
    /// Whether the canvas needs repainting.
    pub fn needs_redraw(&self) -> bool {
        !matches!(
            self,
            Outcome::Unchanged | Outcome::EditRejected(_) | Outcome::Copy(_)
        )
    }
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    canvas: Canvas,
    drag: Option<DragState>,
    hovered: Option<MicrophoneId>,
    edit_form: Option<EditForm>,
    click_threshold: f64,
}

impl DesignerState {
    /// Creates a new designer state.
    pub fn new() -> Self {
        Self::with_canvas(Canvas::new())
    }

    /// Creates a designer state around an existing canvas.
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            drag: None,
            hovered: None,
            edit_form: None,
            click_threshold: CLICK_THRESHOLD_PX,
        }
    }

    /// Overrides the click/drag threshold in pixels.
    pub fn with_click_threshold(mut self, threshold: f64) -> Self {
        self.click_threshold = threshold;
        self
    }

    /// Read access to the canvas. Mutation goes through [`DesignerState::apply`].
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Seeds a microphone at a grid position.
    pub fn add_microphone(&mut self, position: Point) -> MicrophoneId {
        self.canvas.add_microphone(position)
    }

    pub fn mode(&self) -> Mode {
        self.canvas.mode()
    }

    pub fn hovered(&self) -> Option<MicrophoneId> {
        self.hovered
    }

    /// The microphone open in the edit form.
    pub fn selected(&self) -> Option<MicrophoneId> {
        self.edit_form.as_ref().map(EditForm::target)
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.edit_form.as_ref()
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit_form.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn click_threshold(&self) -> f64 {
        self.click_threshold
    }

    /// The current export string.
    pub fn export_string(&self) -> String {
        self.canvas.export_numpy()
    }

    /// Applies one event.
    pub fn apply(&mut self, event: DesignerEvent) -> Outcome {
        match event {
            DesignerEvent::PointerDown(at) => {
                self.drag = Some(DragState::new(at));
                Outcome::Unchanged
            }
            DesignerEvent::PointerMove(at) => self.pointer_move(at),
            DesignerEvent::PointerUp(at) => self.pointer_up(at),
            DesignerEvent::PointerLeave => {
                if self.drag.take().is_some() {
                    debug!("Press aborted: pointer left the canvas");
                }
                Outcome::Unchanged
            }
            DesignerEvent::MarkerEnter(id) => {
                if !self.canvas.contains(id) || self.hovered == Some(id) {
                    return Outcome::Unchanged;
                }
                self.hovered = Some(id);
                Outcome::Redraw
            }
            DesignerEvent::MarkerLeave(id) => {
                if self.hovered != Some(id) {
                    return Outcome::Unchanged;
                }
                self.hovered = None;
                Outcome::Redraw
            }
            DesignerEvent::SetMode(mode) => {
                if self.canvas.mode() == mode {
                    return Outcome::Unchanged;
                }
                debug!(%mode, "Mode changed");
                self.canvas.set_mode(mode);
                Outcome::Redraw
            }
            DesignerEvent::ZoomIn => {
                self.canvas.zoom_in();
                Outcome::Redraw
            }
            DesignerEvent::ZoomOut => {
                self.canvas.zoom_out();
                Outcome::Redraw
            }
            DesignerEvent::ResetView => {
                self.canvas.reset_view();
                Outcome::Redraw
            }
            DesignerEvent::Resize { width, height } => {
                self.canvas.set_canvas_size(width, height);
                Outcome::Redraw
            }
            DesignerEvent::EditField { axis, text } => {
                if let Some(form) = self.edit_form.as_mut() {
                    form.set_text(axis, text);
                }
                Outcome::Unchanged
            }
            DesignerEvent::SubmitEdit => match self.submit_edit() {
                Ok(id) => Outcome::Edited(id),
                Err(err) => {
                    debug!(%err, "Edit rejected");
                    Outcome::EditRejected(err)
                }
            },
            DesignerEvent::CancelEdit => {
                if self.edit_form.take().is_some() {
                    Outcome::EditClosed
                } else {
                    Outcome::Unchanged
                }
            }
            DesignerEvent::CopyExport => Outcome::Copy(self.export_string()),
            DesignerEvent::ClearAll => {
                self.canvas.clear();
                self.hovered = None;
                self.edit_form = None;
                self.drag = None;
                Outcome::Redraw
            }
        }
    }

    fn pointer_move(&mut self, at: Point) -> Outcome {
        if self.canvas.mode() != Mode::Pan {
            return Outcome::Unchanged;
        }
        let Some(drag) = self.drag.as_mut() else {
            return Outcome::Unchanged;
        };
        let (dx, dy) = drag.advance(at);
        self.canvas.pan_by(dx, dy);
        Outcome::Redraw
    }

    fn pointer_up(&mut self, at: Point) -> Outcome {
        // A release without a press on this canvas is ignored.
        let Some(drag) = self.drag.take() else {
            return Outcome::Unchanged;
        };

        let action = classify_release(
            self.canvas.mode(),
            drag.origin,
            at,
            self.hovered,
            self.click_threshold,
        );
        debug!(
            mode = %self.canvas.mode(),
            ?action,
            grid = ?self.canvas.screen_to_grid(at),
            "Pointer released"
        );

        match action {
            ClickAction::None => Outcome::Unchanged,
            ClickAction::Add { at } => Outcome::Added(self.canvas.add_microphone_at_screen(at)),
            ClickAction::Delete(id) => {
                self.hovered = None;
                if self.selected() == Some(id) {
                    self.edit_form = None;
                }
                match self.canvas.remove_microphone(id) {
                    Ok(_) => Outcome::Deleted(id),
                    Err(err) => {
                        debug!(%err, "Hovered microphone already gone");
                        Outcome::Redraw
                    }
                }
            }
            ClickAction::OpenEdit(id) => match self.canvas.get_microphone(id) {
                Some(mic) => {
                    self.edit_form = Some(EditForm::open(mic));
                    Outcome::EditOpened(id)
                }
                None => Outcome::Unchanged,
            },
        }
    }

    /// Applies the open form to its microphone and closes it.
    ///
    /// On a parse error the form stays open with the entered text.
    pub fn submit_edit(&mut self) -> Result<MicrophoneId, EditError> {
        let form = self.edit_form.as_ref().ok_or(EditError::NoSelection)?;
        let position = form.parse()?;
        let id = form.target();

        self.edit_form = None;
        self.canvas
            .move_microphone(id, position)
            .map_err(|_| EditError::NoSelection)?;
        Ok(id)
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure reducer form of [`DesignerState::apply`].
pub fn reduce(mut state: DesignerState, event: DesignerEvent) -> DesignerState {
    state.apply(event);
    state
}
