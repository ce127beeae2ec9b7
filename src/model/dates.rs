use crate::constants::POSTED_DATE_FORMAT;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats a day the way the `filter[postedDate]` parameter expects it.
pub fn format_posted_date(day: NaiveDate) -> String {
    day.format(POSTED_DATE_FORMAT).to_string()
}

/// Reads a `commentStartDate` value as the calendar day written in it.
///
/// An offset is not applied: `2020-02-29T23:30:00-05:00` is 2020-02-29.
///
/// Accepts RFC 3339 timestamps (`2020-03-01T04:00:00Z`), naive timestamps
/// and plain dates.
pub fn parse_comment_start_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(ts.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
