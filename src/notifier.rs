// src/notifier.rs

use crate::scraper::AvailabilityRecord;
use chrono::NaiveDate;
use reqwest::blocking::Client;
use std::error::Error;
use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub enum NotifierError {
    RequestFailed(String),
    ApiError(String),
}

impl fmt::Display for NotifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            NotifierError::ApiError(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl Error for NotifierError {}

/// Notification gate: vacancies exist, the rendering changed since the
/// last run, and the upstream data is fresh enough.
pub fn should_notify(
    matching: &[AvailabilityRecord],
    output_changed: bool,
    report_date: NaiveDate,
    min_report_date: NaiveDate,
) -> bool {
    !matching.is_empty() && output_changed && report_date >= min_report_date
}

/// Fixed instructions block sent alongside the HTML table.
pub fn contact_instructions(source_url: &str) -> String {
    format!(
        "\nAccording to {source_url}\n\n\
         Yosemite Reservations: 209-372-0740 (Monday-Friday 9:00am-4:30pm)\n\n\
         Apply at https://yosemite.org/yosemite-wilderness-permit-request-form/\n"
    )
}

pub struct WebhookNotifier {
    webhook_url: String,
    client: Client,
}

/// Delivery receipt printed by the caller. Delivery failures never fail
/// the run; the report file has already been written by this point.
pub struct WebhookReceipt {
    pub status: u16,
    pub body: String,
}

impl WebhookNotifier {
    pub fn new(webhook_url: String, timeout_secs: u64) -> Result<Self, NotifierError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| NotifierError::RequestFailed(e.to_string()))?;

        Ok(Self {
            webhook_url,
            client,
        })
    }

    /// POST the rendered table and the instructions block as form-encoded
    /// fields. Zapier catch hooks pick them up as value1/value2.
    pub fn send_vacancy_report(
        &self,
        html_table: &str,
        instructions: &str,
    ) -> Result<WebhookReceipt, NotifierError> {
        let form = [("value1", html_table), ("value2", instructions)];

        let resp = self
            .client
            .post(&self.webhook_url)
            .form(&form)
            .send()
            .map_err(|e| NotifierError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().unwrap_or_else(|_| "<no body>".to_string());

        if !status.is_success() {
            return Err(NotifierError::ApiError(format!(
                "webhook returned {status}: {body}"
            )));
        }

        Ok(WebhookReceipt {
            status: status.as_u16(),
            body,
        })
    }
}
