//! Grouping entries by month for the history views.
//!
//! Month views list the most recent entry first. The summary card shows only the
//! last few entries of the month; the full list backs the "all entries" modal.

use super::search::search_entries;
use crate::constants::RECENT_MONTH_LIMIT;
use crate::errors::{AppError, AppResult};
use crate::journal_core::JournalEntry;
use crate::mood::MoodType;
use chrono::Month;

/// Parses a full or short English month name, case-insensitively.
///
/// ```
/// use sixty::ops::parse_month;
/// use chrono::Month;
///
/// assert_eq!(parse_month("December").unwrap(), Month::December);
/// assert_eq!(parse_month("sep").unwrap(), Month::September);
/// assert!(parse_month("Smarch").is_err());
/// ```
pub fn parse_month(name: &str) -> AppResult<Month> {
    name.trim()
        .parse::<Month>()
        .map_err(|_| AppError::Journal(format!("Unknown month '{}'", name)))
}

/// Short month name as it appears in display dates, e.g. `"Dec"`.
pub fn short_month_name(month: Month) -> &'static str {
    &month.name()[..3]
}

/// Entries of `month`, most recent first.
pub fn month_entries(entries: &[JournalEntry], month: Month) -> Vec<&JournalEntry> {
    let short = short_month_name(month);
    entries
        .iter()
        .rev()
        .filter(|entry| entry.date.contains(short))
        .collect()
}

/// The last few entries of `month`, most recent first.
pub fn recent_month_entries(entries: &[JournalEntry], month: Month) -> Vec<&JournalEntry> {
    let mut recent = month_entries(entries, month);
    recent.truncate(RECENT_MONTH_LIMIT);
    recent
}

/// Entries of `month` narrowed by search text and post-mood filter, most recent first.
pub fn filtered_month_entries<'a>(
    entries: &'a [JournalEntry],
    month: Month,
    query: &str,
    mood: Option<MoodType>,
) -> Vec<&'a JournalEntry> {
    let short = short_month_name(month);
    let mut results = search_entries(entries, query, mood);
    results.retain(|entry| entry.date.contains(short));
    results.reverse();
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(month: u32, day: u32, post: MoodType) -> JournalEntry {
        let date = NaiveDate::from_ymd_opt(2025, month, day).unwrap();
        JournalEntry::new(date, MoodType::Calm, post, format!("Entry {}", day))
    }

    fn fixture() -> Vec<JournalEntry> {
        let mut entries: Vec<JournalEntry> = (1..=6)
            .map(|day| entry(11, day, MoodType::Calm))
            .collect();
        entries.extend((1..=6).map(|day| {
            let post = if day % 2 == 0 {
                MoodType::Happy
            } else {
                MoodType::Sad
            };
            entry(12, day, post)
        }));
        entries
    }

    #[test]
    fn test_parse_month_names() {
        assert_eq!(parse_month("january").unwrap(), Month::January);
        assert_eq!(parse_month(" May ").unwrap(), Month::May);
        assert_eq!(parse_month("DEC").unwrap(), Month::December);
        match parse_month("Smarch") {
            Err(AppError::Journal(msg)) => assert!(msg.contains("Smarch")),
            _ => panic!("Expected Journal error"),
        }
    }

    #[test]
    fn test_december_returns_only_december() {
        let entries = fixture();
        let results = month_entries(&entries, Month::December);
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|e| e.date.starts_with("Dec")));
    }

    #[test]
    fn test_month_entries_most_recent_first() {
        let entries = fixture();
        let ids: Vec<&str> = month_entries(&entries, Month::November)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["nov-6", "nov-5", "nov-4", "nov-3", "nov-2", "nov-1"]
        );
    }

    #[test]
    fn test_recent_is_last_four_reversed() {
        let entries = fixture();
        let ids: Vec<&str> = recent_month_entries(&entries, Month::December)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["dec-6", "dec-5", "dec-4", "dec-3"]);
    }

    #[test]
    fn test_recent_with_fewer_entries_than_limit() {
        let entries = vec![entry(7, 4, MoodType::Calm), entry(7, 9, MoodType::Calm)];
        let ids: Vec<&str> = recent_month_entries(&entries, Month::July)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["jul-9", "jul-4"]);
    }

    #[test]
    fn test_empty_month() {
        let entries = fixture();
        assert!(month_entries(&entries, Month::March).is_empty());
        assert!(recent_month_entries(&entries, Month::March).is_empty());
    }

    #[test]
    fn test_filtered_month_entries() {
        let entries = fixture();
        let ids: Vec<&str> =
            filtered_month_entries(&entries, Month::December, "", Some(MoodType::Happy))
                .iter()
                .map(|e| e.id.as_str())
                .collect();
        assert_eq!(ids, vec!["dec-6", "dec-4", "dec-2"]);

        let results = filtered_month_entries(&entries, Month::November, "entry 3", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "nov-3");

        assert!(
            filtered_month_entries(&entries, Month::November, "", Some(MoodType::Happy))
                .is_empty()
        );
    }
}
