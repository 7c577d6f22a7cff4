// src/scraper/scraper.rs
use crate::scraper::models::{AvailabilityRecord, FetchedPage};
use crate::scraper::ScraperError;
use chrono::NaiveDate;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

// Date column plus five trailhead columns; anything past that is
// unrelated page content.
const ELIGIBLE_COLUMNS: usize = 6;

pub struct TrailheadScraper {
    client: Client,
}

impl TrailheadScraper {
    pub fn new(timeout_secs: u64) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch the availability page, returning the body together with the
    /// response's `Date` header. A non-2xx status is fatal; there is no
    /// retry on this path.
    pub fn fetch_page(&self, url: &str) -> Result<FetchedPage, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        let header_date = resp
            .headers()
            .get(reqwest::header::DATE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let body = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ScraperError::HttpStatus(format!("HTTP {status} from {url}")));
        }

        Ok(FetchedPage { body, header_date })
    }
}

/// Parse the wide "Donohue Exit Quota and Trailhead Space Available" table
/// into long-form records, stable-sorted by date ascending.
///
/// The page's table has two banner rows before the real column headers in
/// row 2; data starts at row 3. Blank quota cells are dropped; a non-blank
/// cell that fails to parse as a count means the page format changed and
/// is treated as fatal.
pub fn extract_availability(html: &str) -> Result<Vec<AvailabilityRecord>, ScraperError> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse(r#"table[id="cs_idLayout2"]"#)
        .map_err(|e| ScraperError::HtmlParse(e.to_string()))?;
    let row_selector = Selector::parse("tr").map_err(|e| ScraperError::HtmlParse(e.to_string()))?;
    let cell_selector =
        Selector::parse("th, td").map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or(ScraperError::MissingTable)?;

    let rows: Vec<Vec<String>> = table
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .take(ELIGIBLE_COLUMNS)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect()
        })
        .collect();

    let headers = rows.get(2).ok_or(ScraperError::EmptyTable)?.clone();

    let mut records = Vec::new();
    for row in rows.iter().skip(3) {
        let date_cell = match row.first() {
            Some(cell) if !cell.is_empty() => cell,
            _ => continue,
        };
        let date = parse_table_date(date_cell)?;

        for (col, cell) in row.iter().enumerate().skip(1) {
            if cell.is_empty() {
                // no quota published for this trailhead on this date
                continue;
            }
            let trailhead = match headers.get(col) {
                Some(name) if !name.is_empty() => name.clone(),
                _ => continue,
            };
            let spaces = parse_spaces(cell)?;
            records.push(AvailabilityRecord {
                date,
                trailhead,
                spaces,
            });
        }
    }

    // Stable sort keeps the table's column order within a single date.
    records.sort_by_key(|r| r.date);

    if records.is_empty() {
        return Err(ScraperError::EmptyTable);
    }

    Ok(records)
}

fn parse_table_date(cell: &str) -> Result<NaiveDate, ScraperError> {
    NaiveDate::parse_from_str(cell, "%m/%d/%Y")
        .map_err(|_| ScraperError::BadDate(cell.to_string()))
}

fn parse_spaces(cell: &str) -> Result<u32, ScraperError> {
    if let Ok(n) = cell.parse::<u32>() {
        return Ok(n);
    }
    // The page sometimes renders counts as floats; truncate those.
    match cell.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.is_finite() => Ok(f as u32),
        _ => Err(ScraperError::BadSpaces(cell.to_string())),
    }
}
