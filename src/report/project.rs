//! Temporal projection of the effective schedule
//!
//! Resolves the announcement's day/month token to a full calendar date and
//! answers the two live questions: when does the next outage start, and is
//! one active right now. The caller supplies "now" with its zone; nothing
//! here reads the system clock.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike};

use super::models::{DateToken, TimeRange};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Projection {
    pub next_outage: Option<DateTime<FixedOffset>>,
    pub is_active: bool,
}

pub(crate) fn project(
    schedule: &[TimeRange],
    date: Option<DateToken>,
    now: DateTime<FixedOffset>,
) -> Projection {
    Projection {
        next_outage: next_outage(schedule, date, now),
        is_active: is_active(schedule, now),
    }
}

/// Earliest range start strictly after `now`, or `None`.
///
/// The announcement never names a year; outage dates are always near
/// future, so the year is the current one unless the token's month has
/// already passed, in which case it rolls into the next year. Day/month
/// combinations that do not form a real date drop out here instead of
/// erroring.
pub fn next_outage(
    schedule: &[TimeRange],
    date: Option<DateToken>,
    now: DateTime<FixedOffset>,
) -> Option<DateTime<FixedOffset>> {
    let token = date?;

    let year = if token.month < now.month() {
        now.year() + 1
    } else {
        now.year()
    };

    schedule
        .iter()
        .filter_map(|range| {
            let hour = u32::from(range.start / 60);
            let minute = u32::from(range.start % 60);
            now.timezone()
                .with_ymd_and_hms(year, token.month, token.day, hour, minute, 0)
                .single()
        })
        .filter(|start| *start > now)
        .min()
}

/// Whether `now`'s clock time falls inside any range's `[start, end)`
/// window. Compares time of day only, independent of the resolved date.
pub fn is_active(schedule: &[TimeRange], now: DateTime<FixedOffset>) -> bool {
    let minute = (now.hour() * 60 + now.minute()) as u16;
    schedule.iter().any(|range| range.contains(minute))
}
