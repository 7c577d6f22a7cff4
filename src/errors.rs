// src/errors.rs

use crate::config::ConfigError;
use crate::scraper::ScraperError;
use std::fmt;

/// Fatal failures for a run. All of these abort before any persistence
/// or notification side effect, so the report file always reflects a
/// fully-validated report.
#[derive(Debug)]
pub enum RunError {
    Config(ConfigError),
    Scrape(ScraperError),
    Io(std::io::Error),
    MissingReportDate,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Config(e) => write!(f, "{e}"),
            RunError::Scrape(e) => write!(f, "{e}"),
            RunError::Io(e) => write!(f, "I/O error: {e}"),
            RunError::MissingReportDate => {
                write!(f, "no Report Date marker in page and no usable Date header")
            }
        }
    }
}

impl std::error::Error for RunError {}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        RunError::Config(e)
    }
}

impl From<ScraperError> for RunError {
    fn from(e: ScraperError) -> Self {
        RunError::Scrape(e)
    }
}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        RunError::Io(e)
    }
}
