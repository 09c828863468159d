//! Input validation.
//!
//! Raw query values are opaque strings until they pass through here. A value
//! is accepted when, after trimming surrounding whitespace, it parses with the
//! standard `f64` grammar (optional sign, decimal point, exponent) to a finite
//! number. Empty text, `inf`/`NaN` spellings and overflowing literals such as
//! `1e400` are rejected.

use crate::error::{Arity, CalcError, CalcResult};

/// Parses a single raw token into a finite number.
///
/// Returns `None` for anything that is not a finite decimal number.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Validates the two inputs of a binary operation.
///
/// Absence of either input is reported before any parsing happens, so
/// `num1=abc` with `num2` missing yields [`CalcError::MissingInput`].
pub fn validate_pair(raw1: Option<&str>, raw2: Option<&str>) -> CalcResult<(f64, f64)> {
    let (Some(raw1), Some(raw2)) = (raw1, raw2) else {
        return Err(CalcError::MissingInput(Arity::Pair));
    };

    match (parse_number(raw1), parse_number(raw2)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(CalcError::InvalidNumber(Arity::Pair)),
    }
}

/// Validates the input of a unary operation.
pub fn validate_single(raw: Option<&str>) -> CalcResult<f64> {
    let raw = raw.ok_or(CalcError::MissingInput(Arity::Single))?;
    parse_number(raw).ok_or(CalcError::InvalidNumber(Arity::Single))
}
