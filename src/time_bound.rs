use crate::search::QueryRequest;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    StartTime,
    EndTime,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::StartTime => write!(f, "start_time"),
            TimeField::EndTime => write!(f, "end_time"),
        }
    }
}

/// Accepts `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`, exactly.
pub fn is_valid_datetime(text: &str) -> bool {
    // chrono tolerates extra whitespace and signed years, so the parsed value
    // must format back to the same text.
    let valid = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
        .map_or(false, |parsed| parsed.format(DATETIME_FORMAT).to_string() == text)
        || NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_or(false, |parsed| parsed.format(DATE_FORMAT).to_string() == text);

    if !valid {
        log::warn!("Invalid datetime `{}`, expected YYYY-mm-dd[ HH:MM:SS]", text);
    }
    valid
}

/// Sets `field` on the request when `value` is a valid datetime; invalid
/// values are dropped with a warning.
pub fn apply_time_bound(value: Option<&str>, field: TimeField, request: &mut QueryRequest) {
    let Some(value) = value else {
        return;
    };

    if is_valid_datetime(value) {
        request.set_time(field, value.to_string());
    } else {
        log::warn!("Ignoring {}: `{}` is not a valid datetime", field, value);
    }
}
