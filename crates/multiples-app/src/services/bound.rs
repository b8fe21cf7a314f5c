//! Parsing and validation of user-supplied bounds.
//!
//! Anything that is not a plain non-negative decimal integer is rejected
//! here, so [`crate::classify`] only ever sees a valid `u64`.

use crate::{Error, Result};

/// Parse form or CLI text into a bound.
///
/// Surrounding whitespace and a single leading `+` are accepted. Empty
/// text, negatives, fractions, exponents, `NaN`/`inf` and values beyond
/// `u64::MAX` are all `Error::InvalidBound`.
pub fn parse_bound(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidBound(input.to_string()));
    }

    digits
        .parse::<u64>()
        .map_err(|_| Error::InvalidBound(input.to_string()))
}

/// Reject bounds above the rendering limit
pub fn validate_bound(bound: u64, max_bound: u64) -> Result<u64> {
    if bound > max_bound {
        return Err(Error::BoundTooLarge {
            bound,
            max: max_bound,
        });
    }
    Ok(bound)
}
