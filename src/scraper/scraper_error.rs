use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    HttpStatus(String),
    HtmlParse(String),
    MissingTable,
    EmptyTable,
    BadDate(String),
    BadSpaces(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::HttpStatus(msg) => write!(f, "HTTP error: {msg}"),
            ScraperError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            ScraperError::MissingTable => write!(f, "availability table not found in page"),
            ScraperError::EmptyTable => write!(f, "availability table has no usable rows"),
            ScraperError::BadDate(cell) => write!(f, "unparseable date cell: {cell:?}"),
            ScraperError::BadSpaces(cell) => write!(f, "unparseable spaces cell: {cell:?}"),
        }
    }
}

impl Error for ScraperError {}
