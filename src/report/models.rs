//! Core data structures for one extraction cycle
//!
//! This module defines the types produced by the extraction pipeline:
//! time ranges, the announcement date token, and the final report record.

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};

pub const MINUTES_PER_DAY: u16 = 1440;

/// A day/month pair extracted from the announcement text.
///
/// No calendar validation happens here; an impossible combination (day 31
/// of a 30-day month) surfaces later as a failed date construction in the
/// temporal projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateToken {
    /// Day of month, 1..=31 as written in the announcement.
    pub day: u32,
    /// Month index, 1..=12.
    pub month: u32,
}

/// One outage window in minutes of day.
///
/// `start` is always below 1440; `end` may be exactly 1440 (`24:00` appears
/// on the page as a day-end boundary). A range with `end < start` wraps past
/// midnight; `end == start` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: u16,
    pub end: u16,
}

impl TimeRange {
    /// Build a range from `HH:MM` components, rejecting invalid clock times.
    pub fn from_hm(start_h: u16, start_m: u16, end_h: u16, end_m: u16) -> Option<Self> {
        if start_h >= 24 || start_m >= 60 {
            return None;
        }
        let end_valid = (end_h < 24 && end_m < 60) || (end_h == 24 && end_m == 0);
        if !end_valid {
            return None;
        }
        Some(Self {
            start: start_h * 60 + start_m,
            end: end_h * 60 + end_m,
        })
    }

    /// Whether the given minute of day falls inside `[start, end)`.
    pub fn contains(&self, minute: u16) -> bool {
        if self.end >= self.start {
            minute >= self.start && minute < self.end
        } else {
            // Wraps past midnight
            minute >= self.start || minute < self.end
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        if self.end >= self.start {
            u32::from(self.end - self.start)
        } else {
            u32::from(MINUTES_PER_DAY - self.start + self.end)
        }
    }

    /// Non-wrapping `[start, end)` segments covering this range, for
    /// overlap tests against fixed grid cells.
    pub(crate) fn segments(&self) -> Vec<(u16, u16)> {
        if self.end >= self.start {
            vec![(self.start, self.end)]
        } else {
            vec![(self.start, MINUTES_PER_DAY), (0, self.end)]
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02} до {:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Which extraction path produced the effective schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScheduleSource {
    Primary,
    Override,
}

/// The structured result of one extraction cycle.
///
/// Recomputed in full on every call; the caller decides whether to keep a
/// previous report around as a last-good fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutageReport {
    pub queue: String,
    /// Raw date text as published, e.g. `"18 грудня"`.
    pub date: Option<String>,
    pub date_token: Option<DateToken>,
    pub announcement: Option<String>,
    /// Effective schedule after merge-policy resolution, source order.
    pub schedule: Vec<TimeRange>,
    pub source: ScheduleSource,
    pub has_update: bool,
    pub update_announcement: Option<String>,
    pub next_outage: Option<DateTime<FixedOffset>>,
    pub is_active: bool,
}
