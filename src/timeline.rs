//! Schedule statistics and timeline rendering
//!
//! Pure functions of the effective schedule (plus "now" for the marker):
//! total outage time, percentage of the day, a fixed-width block-character
//! bar, and an SVG bar. An empty schedule renders as a fully clear day;
//! nothing here can fail.

use crate::report::{MINUTES_PER_DAY, TimeRange};

/// Number of cells in the block-character bar; one cell per half hour.
pub const TIMELINE_CELLS: usize = 48;

const CELL_MINUTES: u16 = MINUTES_PER_DAY / TIMELINE_CELLS as u16;

const OUTAGE_CELL: char = '█';
const CLEAR_CELL: char = '░';

pub fn outage_minutes(schedule: &[TimeRange]) -> u32 {
    schedule.iter().map(TimeRange::duration_minutes).sum()
}

pub fn outage_hours(schedule: &[TimeRange]) -> f64 {
    f64::from(outage_minutes(schedule)) / 60.0
}

/// Share of a 24h day spent in outage, rounded to one decimal.
pub fn outage_percentage(schedule: &[TimeRange]) -> f64 {
    let percentage = f64::from(outage_minutes(schedule)) / f64::from(MINUTES_PER_DAY) * 100.0;
    (percentage * 10.0).round() / 10.0
}

/// 48-cell bar over the day, one cell per 30 minutes, marked when any
/// range overlaps that half hour.
pub fn ascii_timeline(schedule: &[TimeRange]) -> String {
    (0..TIMELINE_CELLS as u16)
        .map(|cell| {
            let cell_start = cell * CELL_MINUTES;
            let cell_end = cell_start + CELL_MINUTES;
            if overlaps_any(schedule, cell_start, cell_end) {
                OUTAGE_CELL
            } else {
                CLEAR_CELL
            }
        })
        .collect()
}

fn overlaps_any(schedule: &[TimeRange], window_start: u16, window_end: u16) -> bool {
    schedule.iter().any(|range| {
        range
            .segments()
            .iter()
            .any(|&(start, end)| start < window_end && end > window_start)
    })
}

/// Rendering geometry for [`svg_timeline_with_options`].
pub struct SvgOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 720,
            height: 48,
        }
    }
}

/// Proportional SVG bar: one rectangle per outage segment, gridlines every
/// six hours, and an optional marker at the current minute of day.
pub fn svg_timeline(schedule: &[TimeRange], now_minute: Option<u16>) -> String {
    svg_timeline_with_options(schedule, now_minute, &SvgOptions::default())
}

pub fn svg_timeline_with_options(
    schedule: &[TimeRange],
    now_minute: Option<u16>,
    options: &SvgOptions,
) -> String {
    let (width, height) = (options.width, options.height);
    let scale = f64::from(width) / f64::from(MINUTES_PER_DAY);
    let x = |minute: u16| f64::from(minute) * scale;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    );

    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"#e8f5e9\"/>\n"
    ));

    for range in schedule {
        for (start, end) in range.segments() {
            svg.push_str(&format!(
                "  <rect x=\"{:.1}\" y=\"0\" width=\"{:.1}\" height=\"{height}\" fill=\"#ef5350\"/>\n",
                x(start),
                x(end) - x(start),
            ));
        }
    }

    for hour in [6u16, 12, 18] {
        svg.push_str(&format!(
            "  <line x1=\"{gx:.1}\" y1=\"0\" x2=\"{gx:.1}\" y2=\"{height}\" \
             stroke=\"#9e9e9e\" stroke-width=\"1\" stroke-dasharray=\"2,2\"/>\n",
            gx = x(hour * 60),
        ));
    }

    if let Some(minute) = now_minute {
        let clamped = minute.min(MINUTES_PER_DAY - 1);
        svg.push_str(&format!(
            "  <line x1=\"{mx:.1}\" y1=\"0\" x2=\"{mx:.1}\" y2=\"{height}\" \
             stroke=\"#1565c0\" stroke-width=\"2\"/>\n",
            mx = x(clamped),
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
