//! Input boundary: text fields to canonical integer keys and values
//!
//! All validation happens here, before any simulator call. The simulator
//! operates on `i64` only, so membership checks never see a second,
//! loosely-coerced representation of the same key.

use crate::error::{Error, Result};

/// Parse the key field, rejecting anything that is not an integer
pub fn parse_key(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidKey(text.to_string()))
}

/// Parse the value field, rejecting anything that is not an integer
pub fn parse_value(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidValue(text.to_string()))
}
