//! Announcement location and date extraction
//!
//! Scans the stripped text lines for the fixed announcement sentences and
//! pulls the published date out of the lines that carry the primary phrase.

use once_cell::sync::Lazy;
use regex::Regex;

use super::lang::{ANNOUNCEMENT_PHRASE, DATE_PHRASE, MONTHS, UPDATE_PHRASES, month_index};
use super::models::DateToken;

// Day number immediately followed by a recognized month name
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let months = MONTHS.join("|");
    Regex::new(&format!(r"(?i)(\d{{1,2}})\s+({months})")).unwrap()
});

/// First line containing the primary announcement sentence, if any.
pub fn find_announcement(lines: &[String]) -> Option<&str> {
    lines
        .iter()
        .map(|line| line.as_str())
        .find(|line| line.contains(ANNOUNCEMENT_PHRASE))
}

/// First line matching any of the schedule-change phrase variants.
///
/// The page spells the update announcement several ways; matching is
/// case-insensitive and first-match-wins in source order.
pub fn find_update_announcement(lines: &[String]) -> Option<&str> {
    lines
        .iter()
        .map(|line| line.as_str())
        .find(|line| {
            let lower = line.to_lowercase();
            UPDATE_PHRASES.iter().any(|phrase| lower.contains(phrase))
        })
}

/// Extract the announcement date from lines carrying the primary phrase.
///
/// Returns the parsed token together with the raw matched text
/// (`"18 грудня"`) in the casing the page used.
pub fn extract_date(lines: &[String]) -> Option<(DateToken, String)> {
    for line in lines {
        if !line.contains(DATE_PHRASE) {
            continue;
        }
        if let Some(caps) = DATE_PATTERN.captures(line) {
            let day: u32 = caps[1].parse().ok()?;
            let month = month_index(&caps[2])?;
            let raw = format!("{} {}", &caps[1], &caps[2]);
            return Some((DateToken { day, month }, raw));
        }
    }
    None
}
