//! Schedule-change section resolution
//!
//! When CEK revises an already published schedule it appends a "зміни в
//! ГПВ" section with a different layout: queues are introduced with a 📌
//! glyph instead of the word "черга", and ranges may use "по" instead of
//! "до". The section runs from its key phrase to the next 📢 announcement
//! block or the end of the document.

use once_cell::sync::Lazy;
use regex::Regex;

use super::extract::update_ranges;
use super::lang::{ANNOUNCEMENT_MARKER, QUEUE_MARKER, QUEUE_WORD, UPDATE_SECTION_PHRASE};
use super::models::TimeRange;

static SECTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?i){UPDATE_SECTION_PHRASE}")).unwrap());

// Next announcement block, optionally preceded by a spacer paragraph
static SECTION_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"<p>\s*(?:&nbsp;\s*</p>\s*<p>\s*)?{ANNOUNCEMENT_MARKER}"
    ))
    .unwrap()
});

/// Extract the revised schedule for one queue from the update section.
///
/// Returns `None` when no update section exists at all, and `Some(vec![])`
/// when the section exists but carries no sub-block for this queue — the
/// two cases drive the merge policy differently.
pub fn extract_override_schedule(html: &str, queue: &str) -> Option<Vec<TimeRange>> {
    let start = SECTION_START.find(html)?.start();
    let tail = &html[start..];
    let section = match SECTION_END.find(tail) {
        Some(end) => &tail[..end.start()],
        None => tail,
    };

    match queue_subblock(queue).find(section) {
        Some(block) => Some(update_ranges(block.as_str())),
        None => Some(Vec::new()),
    }
}

/// `📌 <queue>` up to the next 📌 marker; "черга" occasionally appears
/// after the identifier and is tolerated.
fn queue_subblock(queue: &str) -> Regex {
    Regex::new(&format!(
        r"(?i){QUEUE_MARKER}\s*{}(?:\s*{QUEUE_WORD})?[^{QUEUE_MARKER}]*",
        regex::escape(queue)
    ))
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPDATE_SECTION: &str = concat!(
        "<p>Повідомляємо про зміни в ГПВ на 18 грудня:</p>",
        "<p>📌 6.1<br />✔️ з 01:00 по 04:00</p>",
        "<p>📌 6.2<br />✔️ з 03:00 по 07:00<br />✔️ з 15:00 до 18:30</p>",
        "<p>&nbsp;</p>",
        "<p>📢 Увага! 18 грудня застосовуватимуться відключення наступних черг:</p>",
        "<p>6.2 черга:<br />✓ з 00:00 до 02:00</p>",
    );

    #[test]
    fn test_resolves_queue_subblock_with_both_separators() {
        let schedule = extract_override_schedule(UPDATE_SECTION, "6.2").unwrap();
        assert_eq!(
            schedule,
            vec![
                TimeRange { start: 180, end: 420 },
                TimeRange { start: 900, end: 1110 },
            ]
        );
    }

    #[test]
    fn test_section_is_bounded_by_next_announcement() {
        // The primary block after 📢 must not leak into the override ranges
        let schedule = extract_override_schedule(UPDATE_SECTION, "6.1").unwrap();
        assert_eq!(schedule, vec![TimeRange { start: 60, end: 240 }]);
    }

    #[test]
    fn test_absent_section_returns_none() {
        let html = "<p>6.2 черга:<br />з 00:00 до 02:00</p>";
        assert_eq!(extract_override_schedule(html, "6.2"), None);
    }

    #[test]
    fn test_unaffected_queue_returns_empty() {
        let schedule = extract_override_schedule(UPDATE_SECTION, "4.2").unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_section_without_end_marker_runs_to_document_end() {
        let html = concat!(
            "<p>зміни в ГПВ:</p>",
            "<p>📌 6.2<br />з 08:00 по 10:00</p>",
        );
        let schedule = extract_override_schedule(html, "6.2").unwrap();
        assert_eq!(schedule, vec![TimeRange { start: 480, end: 600 }]);
    }
}
