//! # MicMaster Core
//!
//! Shared building blocks for the MicMaster workspace:
//! - Editor constants (zoom limits, grid extent, marker geometry, colors)
//! - Error taxonomy used by the designer, settings and UI crates
//! - Meter formatting and parsing helpers

pub mod constants;
pub mod error;
pub mod units;

pub use error::{ClipboardError, EditError, StoreError};
pub use units::{format_editable, format_fixed, format_meters_label, parse_meters, CoordinateAxis};
