mod models;
mod scraper;
mod scraper_error;

pub use models::{AvailabilityRecord, FetchedPage};
pub use scraper::{extract_availability, TrailheadScraper};
pub use scraper_error::ScraperError;
