use cek_outage::report::{ScheduleSource, extract_report};
use cek_outage::timeline;
use chrono::{DateTime, FixedOffset, TimeZone};

fn kyiv(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{name}"))
        .expect("failed to read test fixture")
}

#[cfg(test)]
mod primary_page_tests {
    use super::*;

    #[test]
    fn test_full_report_from_announcement_page() {
        let html = fixture("announcement.html");
        let now = kyiv(2025, 12, 18, 3, 0);
        let report = extract_report(&html, "6.2", now);

        assert_eq!(report.date.as_deref(), Some("18 грудня"));
        assert!(
            report
                .announcement
                .as_deref()
                .unwrap()
                .contains("застосовуватимуться відключення наступних черг")
        );
        assert_eq!(
            report
                .schedule
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["00:00 до 02:00", "05:30 до 12:30"]
        );
        assert_eq!(report.source, ScheduleSource::Primary);
        assert!(!report.has_update);
        assert_eq!(report.update_announcement, None);

        // 03:00 is between the two windows; the next start is 05:30
        assert!(!report.is_active);
        assert_eq!(report.next_outage, Some(kyiv(2025, 12, 18, 5, 30)));
    }

    #[test]
    fn test_script_and_style_content_never_leaks() {
        let html = fixture("announcement.html");
        let lines = cek_outage::report::text::extract_text_lines(&html);
        assert!(lines.iter().all(|line| !line.contains("pageviews")));
        assert!(lines.iter().all(|line| !line.contains("max-width")));
        assert!(lines.iter().all(|line| !line.contains("JavaScript")));
    }

    #[test]
    fn test_active_during_outage_window() {
        let html = fixture("announcement.html");
        let report = extract_report(&html, "6.2", kyiv(2025, 12, 18, 6, 0));
        assert!(report.is_active);
    }

    #[test]
    fn test_next_outage_is_strictly_future() {
        let html = fixture("announcement.html");
        // Exactly at a range start: that range no longer counts as "next"
        let now = kyiv(2025, 12, 18, 5, 30);
        let report = extract_report(&html, "6.2", now);
        assert_eq!(report.next_outage, None);
    }

    #[test]
    fn test_stats_for_published_schedule() {
        let html = fixture("announcement.html");
        let report = extract_report(&html, "6.2", kyiv(2025, 12, 18, 3, 0));
        assert_eq!(timeline::outage_minutes(&report.schedule), 540);
        assert_eq!(timeline::outage_percentage(&report.schedule), 37.5);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = fixture("announcement.html");
        let now = kyiv(2025, 12, 18, 3, 0);
        let first = extract_report(&html, "6.2", now);
        let second = extract_report(&html, "6.2", now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_schedule_extraction_independent_of_announcement() {
        // Queue block present but no announcement sentence anywhere
        let html = "<html><body><p>6.2 черга:<br />з 01:00 до 03:00</p></body></html>";
        let report = extract_report(html, "6.2", kyiv(2025, 12, 18, 0, 0));
        assert_eq!(report.date, None);
        assert_eq!(report.announcement, None);
        assert_eq!(report.schedule.len(), 1);
        // Without a date the next outage cannot be resolved
        assert_eq!(report.next_outage, None);
        // Activity is clock-time-only and still works
        assert!(extract_report(html, "6.2", kyiv(2025, 12, 18, 2, 0)).is_active);
    }
}

#[cfg(test)]
mod update_page_tests {
    use super::*;

    #[test]
    fn test_override_replaces_primary_schedule() {
        let html = fixture("announcement_update.html");
        let report = extract_report(&html, "6.2", kyiv(2025, 12, 18, 0, 30));

        assert_eq!(
            report
                .schedule
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["03:00 до 07:00"]
        );
        assert_eq!(report.source, ScheduleSource::Override);
        assert!(report.has_update);
        assert!(
            report
                .update_announcement
                .as_deref()
                .unwrap()
                .contains("зміни в ГПВ")
        );

        // Projection follows the override: 00:30 is outside 03:00-07:00
        assert!(!report.is_active);
        assert_eq!(report.next_outage, Some(kyiv(2025, 12, 18, 3, 0)));
    }

    #[test]
    fn test_update_announcement_without_queue_ranges() {
        // Update section exists but lists a different queue only
        let html = concat!(
            "<html><body>",
            "<p>Повідомляємо про зміни в ГПВ:</p>",
            "<p>📌 6.1<br />✔️ з 01:00 по 04:00</p>",
            "<p>&nbsp;</p>",
            "<p>📢 Увага! 18 грудня застосовуватимуться відключення наступних черг:</p>",
            "<p>6.2 черга:<br />✓ з 00:00 до 02:00</p>",
            "</body></html>",
        );
        let report = extract_report(html, "6.2", kyiv(2025, 12, 18, 12, 0));

        // The primary schedule stands, but the record is flagged as updated
        assert_eq!(report.source, ScheduleSource::Primary);
        assert_eq!(report.schedule.len(), 1);
        assert!(report.has_update);
    }
}

#[cfg(test)]
mod projection_tests {
    use super::*;

    #[test]
    fn test_january_date_seen_in_november_rolls_year() {
        let html = concat!(
            "<html><body>",
            "<p>📢 5 січня застосовуватимуться відключення наступних черг:</p>",
            "<p>6.2 черга:<br />✓ з 08:00 до 11:00</p>",
            "</body></html>",
        );
        let report = extract_report(html, "6.2", kyiv(2025, 11, 20, 10, 0));
        assert_eq!(report.next_outage, Some(kyiv(2026, 1, 5, 8, 0)));
    }

    #[test]
    fn test_impossible_published_date_degrades_gracefully() {
        let html = concat!(
            "<html><body>",
            "<p>📢 31 лютого застосовуватимуться відключення наступних черг:</p>",
            "<p>6.2 черга:<br />✓ з 08:00 до 11:00</p>",
            "</body></html>",
        );
        let report = extract_report(html, "6.2", kyiv(2025, 1, 10, 0, 0));
        assert_eq!(report.date.as_deref(), Some("31 лютого"));
        assert_eq!(report.next_outage, None);
        assert_eq!(report.schedule.len(), 1);
    }
}
