//! Extraction orchestration and merge policy
//!
//! `extract_report()` runs the whole pipeline over one raw page: text
//! stripping, announcement/date location, primary and override schedule
//! extraction, merge resolution, and temporal projection. Every failure
//! mode along the way degrades to an absent or empty field; a page with
//! zero matches still yields a complete, well-formed report.

use chrono::{DateTime, FixedOffset};

use super::announce::{extract_date, find_announcement, find_update_announcement};
use super::extract::extract_queue_schedule;
use super::models::{OutageReport, ScheduleSource, TimeRange};
use super::overrides::extract_override_schedule;
use super::project::project;
use super::text::extract_text_lines;

/// Run one extraction cycle over a raw announcement page.
pub fn extract_report(html: &str, queue: &str, now: DateTime<FixedOffset>) -> OutageReport {
    let lines = extract_text_lines(html);

    let announcement = find_announcement(&lines).map(str::to_string);
    let update_announcement = find_update_announcement(&lines).map(str::to_string);

    // The date is only trusted when the primary announcement itself exists
    let (date_token, date) = if announcement.is_some() {
        match extract_date(&lines) {
            Some((token, raw)) => (Some(token), Some(raw)),
            None => (None, None),
        }
    } else {
        (None, None)
    };

    let primary = extract_queue_schedule(html, queue);
    let override_schedule = extract_override_schedule(html, queue);

    log::debug!(
        "queue {queue}: {} primary range(s), override section {}",
        primary.len(),
        match &override_schedule {
            Some(ranges) => format!("present ({} range(s))", ranges.len()),
            None => "absent".to_string(),
        }
    );

    let (schedule, source, has_update) =
        resolve_schedule(primary, override_schedule, update_announcement.is_some());
    let projection = project(&schedule, date_token, now);

    OutageReport {
        queue: queue.to_string(),
        date,
        date_token,
        announcement,
        schedule,
        source,
        has_update,
        update_announcement,
        next_outage: projection.next_outage,
        is_active: projection.is_active,
    }
}

/// A published override replaces the primary schedule outright; it is never
/// merged range-by-range. An override announcement without ranges for this
/// queue still flags the report as updated while keeping the primary
/// schedule.
fn resolve_schedule(
    primary: Vec<TimeRange>,
    override_schedule: Option<Vec<TimeRange>>,
    has_update_announcement: bool,
) -> (Vec<TimeRange>, ScheduleSource, bool) {
    match override_schedule {
        Some(ranges) if !ranges.is_empty() => (ranges, ScheduleSource::Override, true),
        _ => (primary, ScheduleSource::Primary, has_update_announcement),
    }
}
