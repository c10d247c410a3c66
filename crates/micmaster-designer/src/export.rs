//! NumPy array export.
//!
//! Produces a Python literal that can be pasted straight into a script:
//!
//! ```text
//! np.array([
//!   [0.0000, 0.0000],
//!   [1.5000, -2.0000]
//! ])
//! ```

use micmaster_core::constants::COORDINATE_DECIMALS;
use micmaster_core::format_fixed;

use crate::model::Microphone;

const ROW_SEPARATOR: &str = ",\n  ";

/// Formats one `[x, y]` row with fixed precision.
pub fn format_row(mic: &Microphone) -> String {
    format!(
        "[{}, {}]",
        format_fixed(mic.x, COORDINATE_DECIMALS),
        format_fixed(mic.y, COORDINATE_DECIMALS)
    )
}

/// Formats microphones, in the given order, as an `np.array([...])` literal.
///
/// An empty collection still emits the row line, giving `np.array([\n  \n])`.
pub fn numpy_array_string<'a>(microphones: impl IntoIterator<Item = &'a Microphone>) -> String {
    let rows: Vec<String> = microphones.into_iter().map(format_row).collect();
    format!("np.array([\n  {}\n])", rows.join(ROW_SEPARATOR))
}
