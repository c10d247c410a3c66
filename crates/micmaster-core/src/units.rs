//! Meter formatting and parsing
//!
//! All coordinates are meters. These helpers produce the fixed-precision text
//! used by labels and the exported array, the editable text seeded into the
//! coordinate form, and parse that text back.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::COORDINATE_DECIMALS;
use crate::error::EditError;

/// Coordinate axis of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateAxis {
    X,
    Y,
}

impl fmt::Display for CoordinateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
        }
    }
}

// -0.0 compares equal to 0.0; fold it so it never prints with a sign.
fn fold_negative_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Format a value with a fixed number of decimals.
///
/// Exact ties round half away from zero (`0.15625` → `0.1563`). Negative zero
/// prints as `0.0000`; small negative values keep their sign
/// (`-0.00001` → `-0.0000`).
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = fold_negative_zero(value);
    if is_exact_tie(value, decimals) {
        round_tie_away_from_zero(value, decimals)
    } else {
        format!("{:.*}", decimals, value)
    }
}

// A finite binary value m * 2^e with odd m and e < 0 has exactly -e decimal
// digits, the last one being 5. It sits halfway between two candidates at
// `decimals` places exactly when -e == decimals + 1.
fn is_exact_tie(value: f64, decimals: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }

    let bits = value.abs().to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };

    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    i64::try_from(decimals).is_ok_and(|d| exponent == -(d + 1))
}

fn round_tie_away_from_zero(value: f64, decimals: usize) -> String {
    // One extra place prints the tie exactly, ending in '5'.
    let mut digits = format!("{:.*}", decimals + 1, value.abs()).into_bytes();
    digits.pop();
    if digits.last() == Some(&b'.') {
        digits.pop();
    }

    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        match *digit {
            b'.' => continue,
            b'9' => *digit = b'0',
            _ => {
                *digit += 1;
                carry = false;
                break;
            }
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    if carry {
        out.push('1');
    }
    out.extend(digits.into_iter().map(char::from));
    out
}

/// Format the hover label text: `(x.xxxxm, y.yyyym)`.
pub fn format_meters_label(x: f64, y: f64) -> String {
    format!(
        "({}m, {}m)",
        format_fixed(x, COORDINATE_DECIMALS),
        format_fixed(y, COORDINATE_DECIMALS)
    )
}

/// Format a value for an editable text field.
///
/// Uses the shortest representation that parses back to the same value.
pub fn format_editable(value: f64) -> String {
    format!("{}", fold_negative_zero(value))
}

/// Parse a coordinate field.
///
/// Accepts surrounding whitespace and a comma decimal separator. NaN and
/// infinities are rejected.
pub fn parse_meters(input: &str, field: CoordinateAxis) -> Result<f64, EditError> {
    let normalized = input.trim().replace(',', ".");
    let value = normalized
        .parse::<f64>()
        .map_err(|_| EditError::InvalidNumber {
            field,
            input: input.to_string(),
        })?;

    if !value.is_finite() {
        return Err(EditError::NonFinite { field });
    }

    Ok(value)
}
