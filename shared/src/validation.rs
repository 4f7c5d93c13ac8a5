//! Date parsing and validation helpers
//!
//! Stored measurement dates are zero-padded ISO-8601 strings, so lexical
//! comparison of two well-formed date strings agrees with chronological order.

use chrono::NaiveDate;
use thiserror::Error;

/// Format of every date stored in the dataset
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("'{0}' is not a date in YYYY-MM-DD form")]
    Malformed(String),
}

/// Parse a zero-padded `YYYY-MM-DD` date.
///
/// Shorter forms such as `2017-8-1` are rejected: they would not compare
/// correctly against stored dates.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateError> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(DateError::Malformed(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DateError::Malformed(value.to_string()))
}

/// Check that a request date parameter is a well-formed ISO date
pub fn validate_date_param(value: &str) -> Result<(), &'static str> {
    match parse_iso_date(value) {
        Ok(_) => Ok(()),
        Err(_) => Err("Date must be in YYYY-MM-DD format"),
    }
}
