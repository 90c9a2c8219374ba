//! Date rendering for the dashboard and date exchange with the backend.
//!
//! The backend emits ISO 8601 timestamps and expects `DD/MM/YYYY` for
//! date-range parameters.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const API_DATE_FORMAT: &str = "%d/%m/%Y";

/// Render an ISO date or timestamp as `DD/MM/YYYY`.
///
/// Absent or empty input yields `""`; anything unparseable is returned
/// unchanged. Timestamps with an offset keep their local wall-clock date.
pub fn format_date<'a>(input: impl Into<Option<&'a str>>) -> String {
    render(input.into(), "%d/%m/%Y")
}

/// Render an ISO date or timestamp as `DD/MM/YYYY HH:MM:SS`.
///
/// Date-only input renders at midnight.
pub fn format_date_time<'a>(input: impl Into<Option<&'a str>>) -> String {
    render(input.into(), "%d/%m/%Y %H:%M:%S")
}

/// Normalize a date string to the backend's `DD/MM/YYYY` format.
///
/// `DD/MM/YYYY` passes through and `YYYY-MM-DD` is rearranged; no
/// calendar check is done on either. Anything else yields `""`.
///
/// ```
/// use opme::format_date_for_api;
/// assert_eq!(format_date_for_api("2024-06-15"), "15/06/2024");
/// assert_eq!(format_date_for_api("15/06/2024"), "15/06/2024");
/// assert_eq!(format_date_for_api("June 15"), "");
/// ```
pub fn format_date_for_api<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(input) = input.into() else {
        return String::new();
    };
    if has_shape(input, "dd/dd/dddd") {
        return input.to_string();
    }
    if has_shape(input, "dddd-dd-dd") {
        return format!("{}/{}/{}", &input[8..10], &input[5..7], &input[..4]);
    }
    String::new()
}

/// Format a typed date for the backend.
pub fn api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Parse a backend `DD/MM/YYYY` date. Impossible dates (31/02) are `None`.
pub fn parse_date_from_api<'a>(input: impl Into<Option<&'a str>>) -> Option<NaiveDate> {
    let input = input.into()?;
    NaiveDate::parse_from_str(input.trim(), API_DATE_FORMAT).ok()
}

fn render(input: Option<&str>, pattern: &str) -> String {
    match input {
        None | Some("") => String::new(),
        Some(raw) => match parse_timestamp(raw) {
            Some(ts) => ts.format(pattern).to_string(),
            None => raw.to_string(),
        },
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `d` in `shape` matches an ASCII digit, any other byte matches itself.
fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(b, p)| match p {
            b'd' => b.is_ascii_digit(),
            _ => b == p,
        })
}
