//! ISO-8601 date handling for certificate dates.
use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};

const ISO_FORMAT: &str = "%Y-%m-%d";
const LONG_FORMAT: &str = "%B %-d, %Y";

/// Today's local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Local::now().date_naive().format(ISO_FORMAT).to_string()
}

/// Parse a strict `YYYY-MM-DD` date. chrono alone also accepts unpadded
/// fields and signed years, so the parse must round-trip exactly.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_FORMAT)
        .ok()
        .filter(|date| date.format(ISO_FORMAT).to_string() == value)
        .ok_or_else(|| Error::InvalidDate {
            value: value.to_string(),
        })
}

/// Reformat an ISO date into the long form printed on certificates,
/// e.g. `2020-01-01` -> `January 1, 2020`.
pub fn format_long_date(value: &str) -> Result<String> {
    Ok(parse_iso_date(value)?.format(LONG_FORMAT).to_string())
}
