//! Timestamp coercion for schedule exports.
//!
//! Schedule exports carry local, timezone-naive timestamps. Cells that are
//! stored as text are parsed here; anything that does not look like a date
//! becomes `None` rather than an error, so the date filter drops the row.

use chrono::{NaiveDate, NaiveDateTime};

/// Accepted date-and-time layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Accepted date-only layouts; the time defaults to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Wire format for timestamps in JSON output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a textual timestamp.
///
/// Surrounding whitespace is ignored. Slashed dates are read month-first;
/// day-first is only tried when the first field cannot be a month.
///
/// # Examples
///
/// ```
/// use flight_server::domain::parse_timestamp;
///
/// assert!(parse_timestamp("2025-07-11 08:00:00").is_some());
/// assert_eq!(
///     parse_timestamp("07/11/2025 08:00"),
///     parse_timestamp("2025-07-11 08:00"),
/// );
/// assert!(parse_timestamp("2025-07-11").is_some());
///
/// assert!(parse_timestamp("").is_none());
/// assert!(parse_timestamp("TBA").is_none());
/// assert!(parse_timestamp("2025-02-30 08:00").is_none());
/// ```
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Format a timestamp for JSON output (`YYYY-MM-DDTHH:MM:SS`).
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
