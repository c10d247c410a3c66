//! Error handling for MicMaster
//!
//! Provides the error types shared by the editor layers:
//! - Edit errors (coordinate form input)
//! - Store errors (lookups by microphone id)
//! - Clipboard errors (export copy)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::units::CoordinateAxis;

/// Edit form error type
///
/// Raised when the coordinate form cannot be applied. The editor treats all
/// of these as "nothing happens": the form stays open and no message is shown.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// The field text is not a decimal number
    #[error("Invalid {field} coordinate: {input:?}")]
    InvalidNumber {
        /// The axis of the offending field.
        field: CoordinateAxis,
        /// The raw field text.
        input: String,
    },

    /// The field parsed but is NaN or infinite
    #[error("{field} coordinate must be finite")]
    NonFinite {
        /// The axis of the offending field.
        field: CoordinateAxis,
    },

    /// Submit was requested with no form open
    #[error("No microphone selected for editing")]
    NoSelection,
}

/// Store error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No microphone with this id exists
    #[error("Microphone mic-{0} not found")]
    NotFound(u64),
}

/// Clipboard error type
#[derive(Error, Debug, Clone)]
pub enum ClipboardError {
    /// The system clipboard could not be opened
    #[error("Clipboard unavailable: {reason}")]
    Unavailable {
        /// The reason reported by the platform.
        reason: String,
    },

    /// The clipboard rejected the text
    #[error("Failed to write clipboard: {reason}")]
    WriteFailed {
        /// The reason reported by the platform.
        reason: String,
    },
}
