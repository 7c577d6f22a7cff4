// src/domain/report.rs

use crate::scraper::AvailabilityRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Rendering used when the filtered set is empty.
pub const NO_VACANCY: &str = "NO VACANCY";

/// Render the filtered records as the canonical plain-text report.
///
/// The same text is persisted and byte-compared on later runs, so the
/// format must stay deterministic: header row, then one row per record,
/// dates in ISO form, no row index.
pub fn render_report(records: &[AvailabilityRecord]) -> String {
    if records.is_empty() {
        return NO_VACANCY.to_string();
    }

    let trailhead_width = records
        .iter()
        .map(|r| r.trailhead.chars().count())
        .chain(std::iter::once("Trailhead".len()))
        .max()
        .unwrap_or(0);
    let spaces_width = records
        .iter()
        .map(|r| r.spaces.to_string().len())
        .chain(std::iter::once("Spaces".len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        "{:<10}  {:<tw$}  {:>sw$}",
        "Date",
        "Trailhead",
        "Spaces",
        tw = trailhead_width,
        sw = spaces_width
    )];
    for record in records {
        lines.push(format!(
            "{:<10}  {:<tw$}  {:>sw$}",
            record.date.to_string(),
            record.trailhead,
            record.spaces,
            tw = trailhead_width,
            sw = spaces_width
        ));
    }
    lines.join("\n")
}

/// Compare the new rendering against the persisted copy, overwriting the
/// file when they differ. A missing file counts as changed. `None`
/// disables persistence entirely and reports changed unconditionally.
pub fn detect_and_persist(path: Option<&Path>, text: &str) -> std::io::Result<bool> {
    let path = match path {
        Some(p) => p,
        None => return Ok(true),
    };

    let changed = match fs::read_to_string(path) {
        Ok(previous) => previous != text,
        Err(e) if e.kind() == ErrorKind::NotFound => true,
        Err(e) => return Err(e),
    };

    if changed {
        fs::write(path, text)?;
    }

    Ok(changed)
}
