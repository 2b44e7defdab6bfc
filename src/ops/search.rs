//! Text search and mood filtering over journal entries.

use crate::journal_core::JournalEntry;
use crate::mood::MoodType;
use tracing::debug;

/// Whether an entry matches a lowercase query and an optional post-mood filter.
fn matches(entry: &JournalEntry, query_lower: &str, mood: Option<MoodType>) -> bool {
    let matches_search = entry.text.to_lowercase().contains(query_lower)
        || entry.date.to_lowercase().contains(query_lower);
    let matches_mood = mood.map_or(true, |wanted| entry.post_mood == wanted);
    matches_search && matches_mood
}

/// Returns the entries whose text or display date contains `query`
/// (case-insensitive) and, if `mood` is set, whose post-writing mood equals it.
///
/// An empty query matches every entry and `None` matches every mood. The result
/// keeps the input order; an empty result is a normal outcome.
///
/// ```
/// use sixty::journal_core::JournalEntry;
/// use sixty::mood::MoodType;
/// use sixty::ops::search_entries;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
/// let entry = JournalEntry::new(date, MoodType::Sad, MoodType::Calm, "Walked in the PARK.");
/// let entries = vec![entry];
///
/// assert_eq!(search_entries(&entries, "park", None).len(), 1);
/// assert_eq!(search_entries(&entries, "apr 2", None).len(), 1);
/// assert!(search_entries(&entries, "", Some(MoodType::Happy)).is_empty());
/// ```
pub fn search_entries<'a>(
    entries: &'a [JournalEntry],
    query: &str,
    mood: Option<MoodType>,
) -> Vec<&'a JournalEntry> {
    let query_lower = query.to_lowercase();
    let results: Vec<&JournalEntry> = entries
        .iter()
        .filter(|entry| matches(entry, &query_lower, mood))
        .collect();

    debug!(
        query,
        mood = mood.map(MoodType::key),
        matched = results.len(),
        "Searched entries"
    );
    results
}
