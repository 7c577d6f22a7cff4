use crate::config::Config;
use crate::domain::{detect_and_persist, filter, render_report, resolve_report_date};
use crate::errors::RunError;
use crate::notifier::{contact_instructions, should_notify, WebhookNotifier};
use crate::scraper::{extract_availability, TrailheadScraper};

mod config;
mod domain;
mod errors;
mod notifier;
mod scraper;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config_path = std::env::args().nth(1);

    if let Err(e) = run(config_path.as_deref()) {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

/// One full check: fetch, parse, filter, diff, maybe notify.
fn run(config_path: Option<&str>) -> Result<(), RunError> {
    let config = Config::load(config_path)?;

    let scraper = TrailheadScraper::new(config.timeout_secs)?;
    let page = scraper.fetch_page(&config.source_url)?;
    let records = extract_availability(&page.body)?;

    let report_date = resolve_report_date(&page.body, page.header_date.as_deref())
        .ok_or(RunError::MissingReportDate)?;
    println!("Report date is {report_date}");

    let matching = filter(&records, &config.criteria());
    let text = render_report(&matching);
    println!("{text}");

    let changed = detect_and_persist(config.output_path.as_deref(), &text)?;
    println!("output has changed: {changed}");

    let notify = should_notify(&matching, changed, report_date, config.min_report_date);
    println!("notify: {notify}");

    if notify && config.webhook_enabled {
        let table = templates::availability_table(&matching).into_string();
        let instructions = contact_instructions(&config.source_url);

        let delivery = WebhookNotifier::new(config.webhook_url.clone(), config.timeout_secs)
            .and_then(|webhook| webhook.send_vacancy_report(&table, &instructions));

        match delivery {
            Ok(receipt) => {
                println!("webhook status code {}", receipt.status);
                println!("{}", receipt.body);
            }
            // Delivery failure is logged only; the report is already persisted.
            Err(e) => eprintln!("⚠️ Webhook delivery failed: {e}"),
        }
    }

    Ok(())
}
