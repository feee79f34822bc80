//! Primary per-queue schedule extraction
//!
//! The page lists each queue's schedule in its own `<p>` block
//! (`"6.2 черга:"` followed by `<br />`-separated time ranges). Extraction
//! works on parsed blocks rather than stripped text because the block
//! boundary decides which ranges belong to which queue.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::lang::QUEUE_WORD;
use super::models::TimeRange;

static BLOCK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

// The primary block only ever uses "до" between endpoints
static RANGE_TO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2}):(\d{2})\s*до\s*(\d{2}):(\d{2})").unwrap());

// The update section additionally uses "по"
static RANGE_TO_OR_THROUGH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2}):(\d{2})\s*(?:до|по)\s*(\d{2}):(\d{2})").unwrap());

/// Extract the time ranges for one queue from the first matching block.
///
/// Only the first block mentioning `<queue> черга` is used; later blocks
/// for the same queue belong to the override resolver. Returns an empty
/// schedule when no block matches.
pub fn extract_queue_schedule(html: &str, queue: &str) -> Vec<TimeRange> {
    let document = Html::parse_document(html);
    let queue_pattern = queue_block_pattern(queue);

    for block in document.select(&BLOCK_SELECTOR) {
        let text = block_text(block);
        if queue_pattern.is_match(&text) {
            return primary_ranges(&text);
        }
    }

    Vec::new()
}

/// `<queue>\s*черга`, with the identifier escaped literally so the period
/// in `"6.2"` is not treated as a wildcard.
fn queue_block_pattern(queue: &str) -> Regex {
    Regex::new(&format!(r"(?i){}\s*{}", regex::escape(queue), QUEUE_WORD)).unwrap()
}

fn block_text(block: ElementRef) -> String {
    block
        .text()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// All `HH:MM до HH:MM` occurrences, source order, invalid endpoints dropped.
pub(crate) fn primary_ranges(content: &str) -> Vec<TimeRange> {
    collect_ranges(&RANGE_TO, content)
}

/// Like [`primary_ranges`] but also accepts the `по` separator variant,
/// normalizing both wordings into the same [`TimeRange`] representation.
pub(crate) fn update_ranges(content: &str) -> Vec<TimeRange> {
    collect_ranges(&RANGE_TO_OR_THROUGH, content)
}

fn collect_ranges(pattern: &Regex, content: &str) -> Vec<TimeRange> {
    pattern
        .captures_iter(content)
        .filter_map(|caps| {
            let start_h = caps[1].parse().ok()?;
            let start_m = caps[2].parse().ok()?;
            let end_h = caps[3].parse().ok()?;
            let end_m = caps[4].parse().ok()?;
            TimeRange::from_hm(start_h, start_m, end_h, end_m)
        })
        .collect()
}
