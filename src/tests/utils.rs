// src/tests/utils.rs

use crate::scraper::AvailabilityRecord;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const TRAILHEADS: [&str; 5] = [
    "HI → LYV",
    "HI → Sunrise/Merced Lakes (Pass through)",
    "Glacier Point → LYV",
    "Sunrise Lakes",
    "Lyell Canyon",
];

/// Build a page in the park service's shape: a `Report Date:` marker, two
/// banner rows, the real header row, then one data row per date. A seventh
/// column of unrelated text exercises the trailing-column discard.
pub fn sample_page(rows: &[(&str, [&str; 5])]) -> String {
    let mut body = String::from(
        "<html><body>\
         <p>Report Date: 6/9/2020</p>\
         <table id=\"cs_idLayout2\">\
         <tr><th colspan=\"7\">Donohue Exit Quota and Trailhead Space Available</th></tr>\
         <tr><th colspan=\"7\">Updated daily</th></tr>",
    );
    body.push_str("<tr><th>Date</th>");
    for trailhead in TRAILHEADS {
        body.push_str(&format!("<th>{trailhead}</th>"));
    }
    body.push_str("<th>Notes</th></tr>");

    for (date, cells) in rows {
        body.push_str(&format!("<tr><td>{date}</td>"));
        for cell in cells {
            body.push_str(&format!("<td>{cell}</td>"));
        }
        body.push_str("<td>unrelated</td></tr>");
    }
    body.push_str("</table></body></html>");
    body
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn record(date_str: &str, trailhead: &str, spaces: u32) -> AvailabilityRecord {
    AvailabilityRecord {
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        trailhead: trailhead.to_string(),
        spaces,
    }
}

/// Unique scratch path so parallel tests never collide.
pub fn temp_report_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "trailwatch_{tag}_{}.txt",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}
