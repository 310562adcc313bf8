//! Indexed-access demos for arrays and strings.
//!
//! Size limits are validated at the boundary and surfaced as [`SizeError`];
//! generation is blocked until the input is corrected. Index lookups out of
//! range return `None` ("no element highlighted") rather than an error.

use std::fmt;

use super::limits::{MAX_ARRAY_SIZE, MAX_STRING_LENGTH, MIN_ARRAY_SIZE};

/// Input size outside the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    /// Requested array size outside 1–20.
    ArraySize { got: usize },
    /// String longer than 30 characters.
    StringLength { got: usize },
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeError::ArraySize { got } => write!(
                f,
                "Size must be between {} and {} (got {})",
                MIN_ARRAY_SIZE, MAX_ARRAY_SIZE, got
            ),
            SizeError::StringLength { got } => write!(
                f,
                "String length must be {} characters or less (got {})",
                MAX_STRING_LENGTH, got
            ),
        }
    }
}

impl std::error::Error for SizeError {}

/// Build the demo array `[1, 2, …, size]` after validating the size bound.
pub fn generate_array(size: usize) -> Result<Vec<i64>, SizeError> {
    if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
        return Err(SizeError::ArraySize { got: size });
    }
    Ok((1..=size as i64).collect())
}

/// Look up `array[index]`; out of range means nothing is highlighted.
pub fn access_element(array: &[i64], index: usize) -> Option<i64> {
    array.get(index).copied()
}

/// Validate the string-demo length bound (counted in characters).
pub fn validate_string(input: &str) -> Result<(), SizeError> {
    let got = input.chars().count();
    if got > MAX_STRING_LENGTH {
        return Err(SizeError::StringLength { got });
    }
    Ok(())
}

/// Look up the character at `index`; out of range means nothing is
/// highlighted.
pub fn access_char(input: &str, index: usize) -> Option<char> {
    input.chars().nth(index)
}
