//! Aggregate statistics for the stats screen.

use crate::constants::WEEKDAY_LABEL_FORMAT;
use crate::journal_core::JournalEntry;
use crate::mood::MoodType;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

/// Number of entries with each post-writing mood.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodCount {
    pub mood: MoodType,
    pub count: usize,
}

/// Whether a weekday of the current week has an entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayActivity {
    pub label: String,
    pub date: NaiveDate,
    pub journaled: bool,
}

/// Everything the stats screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total_entries: usize,
    pub total_words: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub mood_distribution: Vec<MoodCount>,
    pub weekly_activity: Vec<DayActivity>,
}

/// Sum of space-separated token counts over all entries.
///
/// ```
/// use sixty::journal_core::JournalEntry;
/// use sixty::mood::MoodType;
/// use sixty::ops::total_words;
/// use chrono::NaiveDate;
///
/// let a = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let b = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// let entries = vec![
///     JournalEntry::new(a, MoodType::Calm, MoodType::Calm, "one two three four five"),
///     JournalEntry::new(b, MoodType::Calm, MoodType::Calm, "one two three four five six seven"),
/// ];
/// assert_eq!(total_words(&entries), 12);
/// ```
pub fn total_words(entries: &[JournalEntry]) -> usize {
    entries.iter().map(JournalEntry::word_count).sum()
}

fn journaled_days(entries: &[JournalEntry]) -> HashSet<NaiveDate> {
    entries.iter().map(|entry| entry.calendar_date).collect()
}

/// Consecutive days with an entry, counting back from `today`.
///
/// A streak is still alive on a day the user has not written yet, so when today has
/// no entry the count starts from yesterday.
pub fn current_streak(entries: &[JournalEntry], today: NaiveDate) -> u32 {
    let days = journaled_days(entries);

    let mut cursor = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

/// Longest run of consecutive days with an entry.
pub fn longest_streak(entries: &[JournalEntry]) -> u32 {
    let mut dates: Vec<NaiveDate> = journaled_days(entries).into_iter().collect();
    dates.sort_unstable();

    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in dates {
        run = match previous {
            Some(prev) if date - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }
    longest
}

/// Post-writing mood counts, in taxonomy order.
pub fn mood_distribution(entries: &[JournalEntry]) -> Vec<MoodCount> {
    MoodType::ALL
        .iter()
        .map(|&mood| MoodCount {
            mood,
            count: entries.iter().filter(|e| e.post_mood == mood).count(),
        })
        .collect()
}

/// Monday through Sunday of the week containing `today`.
pub fn weekly_activity(entries: &[JournalEntry], today: NaiveDate) -> Vec<DayActivity> {
    let days = journaled_days(entries);
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));

    (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            DayActivity {
                label: date.format(WEEKDAY_LABEL_FORMAT).to_string(),
                date,
                journaled: days.contains(&date),
            }
        })
        .collect()
}

/// Computes every statistic the stats screen shows.
pub fn summarize(entries: &[JournalEntry], today: NaiveDate) -> StatsSummary {
    StatsSummary {
        total_entries: entries.len(),
        total_words: total_words(entries),
        current_streak: current_streak(entries, today),
        longest_streak: longest_streak(entries),
        mood_distribution: mood_distribution(entries),
        weekly_activity: weekly_activity(entries, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn entry(m: u32, d: u32, post: MoodType) -> JournalEntry {
        JournalEntry::new(date(m, d), MoodType::Calm, post, "a b c")
    }

    fn days(m: u32, range: std::ops::RangeInclusive<u32>) -> Vec<JournalEntry> {
        range.map(|d| entry(m, d, MoodType::Calm)).collect()
    }

    #[test]
    fn test_total_words() {
        let entries = vec![entry(1, 1, MoodType::Calm), entry(1, 2, MoodType::Calm)];
        assert_eq!(total_words(&entries), 6);
        assert_eq!(total_words(&[]), 0);
    }

    #[test]
    fn test_current_streak_including_today() {
        let entries = days(12, 20..=27);
        assert_eq!(current_streak(&entries, date(12, 27)), 8);
    }

    #[test]
    fn test_current_streak_before_writing_today() {
        let entries = days(12, 20..=26);
        assert_eq!(current_streak(&entries, date(12, 27)), 7);
    }

    #[test]
    fn test_current_streak_broken() {
        let entries = days(12, 1..=20);
        assert_eq!(current_streak(&entries, date(12, 27)), 0);
        assert_eq!(current_streak(&[], date(12, 27)), 0);
    }

    #[test]
    fn test_longest_streak() {
        let mut entries = days(3, 1..=3);
        entries.extend(days(3, 10..=15));
        entries.extend(days(4, 1..=2));
        assert_eq!(longest_streak(&entries), 6);
        assert_eq!(longest_streak(&[]), 0);
    }

    #[test]
    fn test_longest_streak_spans_months() {
        let mut entries = days(1, 30..=31);
        entries.extend(days(2, 1..=3));
        assert_eq!(longest_streak(&entries), 5);
    }

    #[test]
    fn test_mood_distribution() {
        let entries = vec![
            entry(1, 1, MoodType::Happy),
            entry(1, 2, MoodType::Happy),
            entry(1, 3, MoodType::Angry),
        ];
        let counts: Vec<usize> = mood_distribution(&entries).iter().map(|m| m.count).collect();
        assert_eq!(counts, vec![2, 0, 0, 0, 1]);
    }

    #[test]
    fn test_weekly_activity() {
        // Dec 22, 2025 is a Monday
        let entries = vec![entry(12, 22, MoodType::Calm), entry(12, 26, MoodType::Calm)];
        let week = weekly_activity(&entries, date(12, 27));

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].label, "Mon");
        assert_eq!(week[0].date, date(12, 22));
        assert_eq!(week[6].date, date(12, 28));

        let journaled: Vec<bool> = week.iter().map(|d| d.journaled).collect();
        assert_eq!(journaled, vec![true, false, false, false, true, false, false]);
    }

    #[test]
    fn test_summarize() {
        let entries = days(12, 24..=27);
        let summary = summarize(&entries, date(12, 27));
        assert_eq!(summary.total_entries, 4);
        assert_eq!(summary.total_words, 12);
        assert_eq!(summary.current_streak, 4);
        assert_eq!(summary.longest_streak, 4);
        assert_eq!(summary.mood_distribution[1].count, 4);
    }
}
