//! Fixed Ukrainian phrases and markers used by the CEK page
//!
//! All page-specific vocabulary lives here so the extraction code stays
//! free of string literals. Matching is case-insensitive where the page
//! itself varies (month names, update phrases).

/// Genitive month names as they appear in announcement dates.
pub const MONTHS: [&str; 12] = [
    "січня",
    "лютого",
    "березня",
    "квітня",
    "травня",
    "червня",
    "липня",
    "серпня",
    "вересня",
    "жовтня",
    "листопада",
    "грудня",
];

/// Full announcement sentence marker, matched case-sensitively.
pub const ANNOUNCEMENT_PHRASE: &str = "застосовуватимуться відключення наступних черг";

/// Shorter prefix used when locating the date within announcement lines.
pub const DATE_PHRASE: &str = "застосовуватимуться відключення";

/// Known spellings of the schedule-change announcement, lowercase; lines
/// are lowercased before comparison so upper-case variants match too.
pub const UPDATE_PHRASES: [&str; 3] = [
    "повідомляємо про зміни в гпв",
    "зміни в гпв",
    "зміни в графіку",
];

/// Marker that opens the schedule-change section in the raw markup.
pub const UPDATE_SECTION_PHRASE: &str = "зміни в ГПВ";

/// Word that follows the queue identifier in the primary schedule block.
pub const QUEUE_WORD: &str = "черга";

/// Glyph that precedes a queue identifier inside the update section.
pub const QUEUE_MARKER: &str = "📌";

/// Glyph that opens a fresh announcement block, ending the update section.
pub const ANNOUNCEMENT_MARKER: &str = "📢";

/// 1-based month index for a (case-insensitively) recognized month name.
pub fn month_index(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .position(|month| *month == lower)
        .map(|idx| idx as u32 + 1)
}
