//! Plain-text rendering of views for the terminal.

use crate::constants::EMPTY_RESULT_MESSAGE;
use crate::journal_core::{JournalEntry, UserProfile};
use crate::mood::MOODS;
use crate::ops::{
    countdown_label, DayCell, DayStatus, HomeSummary, StatsSummary, Trend, TrendPoint,
};
use std::fmt::Write;

/// One-line summary of an entry.
pub fn entry_line(entry: &JournalEntry) -> String {
    format!(
        "{:<8} {:<13} {} -> {}  {}",
        entry.id,
        entry.date,
        entry.pre().emoji,
        entry.post().emoji,
        entry.text
    )
}

/// One line per entry, or the empty-result message.
pub fn entry_list(entries: &[&JournalEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", EMPTY_RESULT_MESSAGE);
    }

    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{}", entry_line(entry));
    }
    out
}

/// Full detail view of one entry.
pub fn entry_detail(entry: &JournalEntry) -> String {
    let pre = entry.pre();
    let post = entry.post();
    format!(
        "{} • {}\n\
         Emotional shift: {} {} -> {} {}\n\
         Prompt: \"{}\"\n\n\
         {}\n",
        entry.date,
        entry.time,
        pre.emoji,
        pre.label,
        post.emoji,
        post.label,
        entry.prompt,
        entry.text
    )
}

pub fn home(summary: &HomeSummary) -> String {
    let status = if summary.journaled_today {
        "You've journaled today."
    } else {
        "You haven't journaled yet today."
    };
    format!(
        "Good evening, {}\n\
         {}\n\n\
         Current streak: {} days\n\
         Today's prompt: {}\n\
         {}\n",
        summary.greeting_name,
        summary.today,
        summary.current_streak,
        summary.prompt,
        status
    )
}

pub fn trend(points: &[TrendPoint], trend: Trend) -> String {
    let mut out = format!("{}\n", trend);
    for point in points {
        let bar = "#".repeat(point.score.round().max(0.0) as usize);
        let _ = writeln!(out, "{:<4} {:>4.2} {}", point.label, point.score, bar);
    }
    out
}

pub fn stats(summary: &StatsSummary) -> String {
    let mut out = format!(
        "Entries: {}\n\
         Words: {}\n\
         Current streak: {} days\n\
         Longest streak: {} days\n\n\
         Moods after writing:\n",
        summary.total_entries, summary.total_words, summary.current_streak, summary.longest_streak
    );
    for count in &summary.mood_distribution {
        let mood = count.mood.mood();
        let _ = writeln!(out, "  {} {:<8} {}", mood.emoji, mood.label, count.count);
    }

    out.push_str("\nThis week:\n ");
    for day in &summary.weekly_activity {
        let mark = if day.journaled { "x" } else { "." };
        let _ = write!(out, " {} {}", day.label, mark);
    }
    out.push('\n');
    out
}

/// Calendar grid, one week per row, starting on the 1st.
pub fn calendar(title: &str, cells: &[DayCell]) -> String {
    let mut out = format!("{}\n", title);
    for week in cells.chunks(7) {
        for cell in week {
            let cell_text = match &cell.status {
                DayStatus::Journaled { .. } => format!("[{:>2}]", cell.day),
                DayStatus::Today => format!("<{:>2}>", cell.day),
                DayStatus::Open => format!(" {:>2} ", cell.day),
                DayStatus::Future => "  · ".to_string(),
            };
            out.push_str(&cell_text);
        }
        out.push('\n');
    }
    out.push_str("[n] journaled  <n> today  · future\n");
    out
}

pub fn profile(profile: &UserProfile) -> String {
    format!(
        "({}) {}\n{}\n",
        profile.avatar_initials, profile.name, profile.email
    )
}

pub fn moods() -> String {
    let mut out = String::new();
    for mood in MOODS.iter() {
        let _ = writeln!(
            out,
            "{} {:<8} {:<8} {} score {}",
            mood.emoji,
            mood.mood_type.key(),
            mood.label,
            mood.color,
            mood.mood_type.score()
        );
    }
    out
}

/// Header shown when a new entry is recorded.
pub fn recorded(entry: &JournalEntry, time_limit: Option<u64>) -> String {
    let limit = match time_limit {
        Some(secs) => format!("a timed session ({})", countdown_label(secs)),
        None => "an untimed session".to_string(),
    };
    format!(
        "Entry saved for {} after {}.\n\n{}",
        entry.date,
        limit,
        entry_detail(entry)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal_core::USER_PROFILE;
    use crate::mood::MoodType;
    use chrono::NaiveDate;

    fn entry() -> JournalEntry {
        let date = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
        JournalEntry::new(date, MoodType::Anxious, MoodType::Calm, "Felt better after.")
    }

    #[test]
    fn test_empty_list_message() {
        assert_eq!(entry_list(&[]), "No entries match your filters.\n");
    }

    #[test]
    fn test_entry_list_lines() {
        let entry = entry();
        let out = entry_list(&[&entry]);
        assert!(out.starts_with("dec-20"));
        assert!(out.contains("Dec 20, 2025"));
        assert!(out.contains("😟 -> 😌"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_entry_detail() {
        let out = entry_detail(&entry());
        assert!(out.starts_with("Dec 20, 2025 • 9:15 PM"));
        assert!(out.contains("Anxious -> 😌 Calm"));
        assert!(out.contains("Felt better after."));
    }

    #[test]
    fn test_calendar_rows() {
        let cells: Vec<DayCell> = (1..=10)
            .map(|day| DayCell {
                day,
                status: if day == 3 {
                    DayStatus::Today
                } else {
                    DayStatus::Open
                },
            })
            .collect();
        let out = calendar("December 2025", &cells);
        // title, two week rows, legend
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("< 3>"));
    }

    #[test]
    fn test_profile_and_moods() {
        assert!(profile(&USER_PROFILE).contains("sarah@example.com"));
        assert_eq!(moods().lines().count(), 5);
    }

    #[test]
    fn test_recorded_mentions_limit() {
        let out = recorded(&entry(), Some(60));
        assert!(out.contains("after a timed session (1:00)."));
        let out = recorded(&entry(), None);
        assert!(out.contains("after an untimed session."));
    }
}
