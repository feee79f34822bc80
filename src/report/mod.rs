//! Schedule extraction pipeline
//!
//! Turns one raw CEK announcement page into a structured per-queue outage
//! report: markup-stripped text, announcement and date location, primary
//! and override schedule extraction, merge resolution, and temporal
//! projection. The submodules are pure functions of their inputs; the only
//! entry point most callers need is [`extract_report`].

pub mod announce;
mod builder;
pub mod extract;
pub(crate) mod lang;
pub mod models;
pub mod overrides;
pub mod project;
pub mod text;

pub use builder::extract_report;
pub use models::*;
