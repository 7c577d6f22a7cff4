// src/domain/report_date.rs

use chrono::{DateTime, NaiveDate};

const MARKER: &str = "Report Date: ";

/// Resolve the "as of" date for the fetched data.
///
/// The page normally carries a `Report Date: M/D/YYYY` marker. When the
/// marker is missing or malformed, fall back to the response's `Date`
/// header (RFC 2822), truncated to its date component. `None` only when
/// both paths fail.
pub fn resolve_report_date(body: &str, header_date: Option<&str>) -> Option<NaiveDate> {
    if let Some(date) = report_date_from_body(body) {
        return Some(date);
    }
    let header = header_date?;
    DateTime::parse_from_rfc2822(header)
        .ok()
        .map(|dt| dt.date_naive())
}

fn report_date_from_body(body: &str) -> Option<NaiveDate> {
    let start = body.find(MARKER)? + MARKER.len();
    let raw: String = body[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '/')
        .collect();
    NaiveDate::parse_from_str(&raw, "%m/%d/%Y").ok()
}
