//! Core journal types without I/O operations.
//!
//! This module contains the journal entry model, the static user profile, and the
//! fixed prompt and sample-text tables the mock journal is built from. Derived views
//! over entries live in [`crate::ops`]; the entry generator lives in [`generator`].

pub mod generator;

use crate::constants::{ENTRY_DATE_FORMAT, ENTRY_DISPLAY_TIME, MONTH_LABEL_FORMAT};
use crate::mood::{Mood, MoodType};
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

pub use generator::EntryGenerator;

/// Daily writing prompts, chosen by `(day + month_index) % PROMPTS.len()`.
pub const PROMPTS: [&str; 5] = [
    "What's one small thing that made you smile today?",
    "What's weighing on your mind right now?",
    "Describe your day in three words.",
    "What are you grateful for today?",
    "What challenge did you overcome today?",
];

/// Reflection texts used for generated entries.
pub const SAMPLE_TEXTS: [&str; 6] = [
    "What's one small thing that made you smile today? I saw a puppy playing in the leaves.",
    "Today was a productive day. I managed to clear my inbox and felt a huge sense of relief.",
    "A quiet evening reflecting on the past year. I'm excited for what's coming in 2026.",
    "Feeling a bit overwhelmed but writing this down helped a lot. I need to prioritize my sleep.",
    "The weather was beautiful today, went for a long walk in the park. Nature is so grounding.",
    "Had a great conversation with an old friend. Connection is so important for the soul.",
];

/// Index into the prompt and sample-text tables for a date.
fn rotation_index(date: NaiveDate) -> usize {
    (date.day() + date.month0()) as usize
}

/// Returns the writing prompt for a date.
///
/// ```
/// use sixty::journal_core::prompt_for;
/// use chrono::NaiveDate;
///
/// // Dec 27: (27 + 11) % 5 == 3
/// let date = NaiveDate::from_ymd_opt(2025, 12, 27).unwrap();
/// assert_eq!(prompt_for(date), "What are you grateful for today?");
/// ```
pub fn prompt_for(date: NaiveDate) -> &'static str {
    PROMPTS[rotation_index(date) % PROMPTS.len()]
}

/// Returns the sample reflection text used for a generated entry on a date.
pub fn sample_text_for(date: NaiveDate) -> &'static str {
    SAMPLE_TEXTS[rotation_index(date) % SAMPLE_TEXTS.len()]
}

/// Short lowercase month name, e.g. `"dec"`.
fn short_month_lower(date: NaiveDate) -> String {
    date.format(MONTH_LABEL_FORMAT).to_string().to_lowercase()
}

/// The entry id for a date, e.g. `"dec-27"`.
///
/// Ids are unique within a calendar year, which is the span of one journal.
pub fn entry_id(date: NaiveDate) -> String {
    format!("{}-{}", short_month_lower(date), date.day())
}

/// The display date for a date, e.g. `"Dec 27, 2025"`.
pub fn display_date(date: NaiveDate) -> String {
    date.format(ENTRY_DATE_FORMAT).to_string()
}

fn serialize_mood<S: Serializer>(mood: &MoodType, serializer: S) -> Result<S::Ok, S::Error> {
    mood.mood().serialize(serializer)
}

/// One journaling session record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    /// Unique id, e.g. `"dec-27"`.
    pub id: String,
    /// Day of the month (1-31).
    pub day: u32,
    /// Display date, e.g. `"Dec 27, 2025"`.
    pub date: String,
    /// Display time, e.g. `"9:15 PM"`.
    pub time: String,
    /// Mood recorded before writing.
    #[serde(serialize_with = "serialize_mood")]
    pub pre_mood: MoodType,
    /// Mood recorded after writing.
    #[serde(serialize_with = "serialize_mood")]
    pub post_mood: MoodType,
    /// The prompt the entry was written against.
    pub prompt: String,
    /// The reflection itself.
    pub text: String,
    /// The calendar date the display fields are derived from.
    pub calendar_date: NaiveDate,
}

impl JournalEntry {
    /// Builds an entry for `date`, deriving id, day, display date, time and prompt.
    ///
    /// ```
    /// use sixty::journal_core::JournalEntry;
    /// use sixty::mood::MoodType;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
    /// let entry = JournalEntry::new(date, MoodType::Sad, MoodType::Calm, "Long day.");
    /// assert_eq!(entry.id, "mar-4");
    /// assert_eq!(entry.date, "Mar 4, 2025");
    /// assert_eq!(entry.day, 4);
    /// ```
    pub fn new(
        date: NaiveDate,
        pre_mood: MoodType,
        post_mood: MoodType,
        text: impl Into<String>,
    ) -> Self {
        JournalEntry {
            id: entry_id(date),
            day: date.day(),
            date: display_date(date),
            time: ENTRY_DISPLAY_TIME.to_string(),
            pre_mood,
            post_mood,
            prompt: prompt_for(date).to_string(),
            text: text.into(),
            calendar_date: date,
        }
    }

    /// Number of space-separated tokens in the text.
    ///
    /// Counts the way the stats screen does: splitting on single spaces, so
    /// an empty text counts as one token.
    pub fn word_count(&self) -> usize {
        self.text.split(' ').count()
    }

    /// Display metadata for the pre-writing mood.
    pub fn pre(&self) -> &'static Mood {
        self.pre_mood.mood()
    }

    /// Display metadata for the post-writing mood.
    pub fn post(&self) -> &'static Mood {
        self.post_mood.mood()
    }
}

/// Changes to apply to an existing entry. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryEdit {
    pub text: Option<String>,
    pub pre_mood: Option<MoodType>,
    pub post_mood: Option<MoodType>,
}

impl EntryEdit {
    /// Whether the edit changes nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.pre_mood.is_none() && self.post_mood.is_none()
    }

    pub(crate) fn apply(self, entry: &mut JournalEntry) {
        if let Some(text) = self.text {
            entry.text = text;
        }
        if let Some(mood) = self.pre_mood {
            entry.pre_mood = mood;
        }
        if let Some(mood) = self.post_mood {
            entry.post_mood = mood;
        }
    }
}

/// The signed-in user. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub avatar_initials: &'static str,
}

impl UserProfile {
    /// First word of the name, used in greetings.
    pub fn first_name(&self) -> &'static str {
        self.name.split(' ').next().unwrap_or(self.name)
    }
}

/// The mock user profile.
pub static USER_PROFILE: UserProfile = UserProfile {
    name: "Sarah Johnson",
    email: "sarah@example.com",
    avatar_initials: "S",
};
