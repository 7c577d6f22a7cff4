pub mod filter;
pub mod report;
pub mod report_date;

// Re-exports for convenience
pub use filter::{filter, FilterCriteria};
pub use report::{detect_and_persist, render_report, NO_VACANCY};
pub use report_date::resolve_report_date;
