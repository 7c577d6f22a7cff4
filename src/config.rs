// src/config.rs

use crate::domain::FilterCriteria;
use chrono::NaiveDate;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    InvalidRange(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config read error: {msg}"),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {msg}"),
            ConfigError::InvalidRange(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl Error for ConfigError {}

/// Immutable run configuration. Defaults describe a stock Donohue-exit
/// watch; a JSON file passed as the first CLI argument overrides them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Minimum number of available spaces worth notifying about.
    pub min_spaces: u32,
    /// Trailheads to skip, exact-match against the table's column headers.
    pub exclude: Vec<String>,
    /// Eligible entry dates, inclusive of the end date.
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Where the last rendered report is kept for diffing. `null` disables
    /// persistence, which also disables suppression of repeat notifications.
    pub output_path: Option<PathBuf>,
    /// Suppress notification when the page's report date is older than this.
    pub min_report_date: NaiveDate,
    pub webhook_enabled: bool,
    pub webhook_url: String,
    pub source_url: String,
    /// Timeout for both the page fetch and the webhook post.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_spaces: 2,
            exclude: Vec::new(),
            start_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 10, 5).unwrap(),
            output_path: Some(PathBuf::from("trailwatch-output.txt")),
            min_report_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            webhook_enabled: true,
            webhook_url: "https://hooks.zapier.com/hooks/catch/7560244/oi4zve2".to_string(),
            source_url: "https://www.nps.gov/yose/planyourvisit/fulltrailheads.htm".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load from a JSON file, or fall back to the built-in defaults when
    /// no path was given.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config: Config = match path {
            Some(p) => {
                let raw =
                    fs::read_to_string(p).map_err(|e| ConfigError::Io(format!("{p}: {e}")))?;
                serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(format!("{p}: {e}")))?
            }
            None => Self::default(),
        };

        if config.start_date > config.end_date {
            return Err(ConfigError::InvalidRange(format!(
                "start_date {} is after end_date {}",
                config.start_date, config.end_date
            )));
        }

        Ok(config)
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            start: self.start_date,
            end: self.end_date,
            min_spaces: self.min_spaces,
            exclude: self.exclude.clone(),
        }
    }
}
