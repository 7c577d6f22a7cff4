use chrono::NaiveDate;

/// One (date, trailhead) cell from the wide availability table,
/// reshaped into long form.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityRecord {
    pub date: NaiveDate,
    pub trailhead: String,
    pub spaces: u32,
}

/// Raw fetch result. The response's own `Date` header is kept around
/// because the report-date resolver falls back to it when the page
/// carries no `Report Date:` marker.
#[derive(Debug)]
pub struct FetchedPage {
    pub body: String,
    pub header_date: Option<String>,
}
