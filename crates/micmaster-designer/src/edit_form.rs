//! Coordinate edit form buffers.

use micmaster_core::{format_editable, parse_meters, CoordinateAxis, EditError};

use crate::model::{Microphone, MicrophoneId, Point};

/// Text buffers for editing one microphone's coordinates.
///
/// The buffers hold raw user text; nothing is validated until
/// [`EditForm::parse`] is called on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    target: MicrophoneId,
    x_text: String,
    y_text: String,
}

impl EditForm {
    /// Opens a form seeded with the microphone's current coordinates.
    pub fn open(mic: &Microphone) -> Self {
        Self {
            target: mic.id,
            x_text: format_editable(mic.x),
            y_text: format_editable(mic.y),
        }
    }

    /// The microphone being edited.
    pub fn target(&self) -> MicrophoneId {
        self.target
    }

    pub fn text(&self, axis: CoordinateAxis) -> &str {
        match axis {
            CoordinateAxis::X => &self.x_text,
            CoordinateAxis::Y => &self.y_text,
        }
    }

    pub fn set_text(&mut self, axis: CoordinateAxis, text: impl Into<String>) {
        match axis {
            CoordinateAxis::X => self.x_text = text.into(),
            CoordinateAxis::Y => self.y_text = text.into(),
        }
    }

    /// Parses both fields into a grid point.
    pub fn parse(&self) -> Result<Point, EditError> {
        let x = parse_meters(&self.x_text, CoordinateAxis::X)?;
        let y = parse_meters(&self.y_text, CoordinateAxis::Y)?;
        Ok(Point::new(x, y))
    }
}
