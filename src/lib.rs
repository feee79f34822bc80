//! cek-outage: load-shedding schedule tracker for CEK announcement pages
//!
//! This library turns the raw CEK announcement page into a structured
//! per-queue outage report: it strips the markup, locates the announcement
//! and its date, extracts the queue's schedule, reconciles published
//! schedule changes ("зміни в ГПВ") against the original announcement, and
//! projects the result onto the current time.

pub mod config;
pub mod fetch;
pub mod report;
pub mod timeline;

// Re-export commonly used types
pub use fetch::{FetchError, fetch_page};
pub use report::{DateToken, OutageReport, ScheduleSource, TimeRange, extract_report};
