// src/templates.rs

use crate::scraper::AvailabilityRecord;
use maud::{html, Markup};

/// Render the matching records as an HTML table for the webhook body.
pub fn availability_table(records: &[AvailabilityRecord]) -> Markup {
    html! {
        table border="1" {
            thead {
                tr {
                    th { "Date" }
                    th { "Trailhead" }
                    th { "Spaces" }
                }
            }
            tbody {
                @for record in records {
                    tr {
                        td { (record.date) }
                        td { (record.trailhead) }
                        td { (record.spaces) }
                    }
                }
            }
        }
    }
}
