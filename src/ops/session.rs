//! The journaling session flow.
//!
//! A session walks through the same steps as the app: check in a mood, write
//! against the day's prompt, check in a mood again. Today's session is timed at
//! sixty seconds; backfilling a past day is untimed. Finishing a session yields a
//! [`JournalEntry`] for the caller to insert into the store.

use crate::constants::WRITING_TIME_LIMIT_SECS;
use crate::errors::SessionError;
use crate::journal_core::{prompt_for, JournalEntry};
use crate::mood::MoodType;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Where a session is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    PreMood,
    Writing,
    PostMood,
    Complete,
}

impl SessionStep {
    fn describe(self) -> &'static str {
        match self {
            SessionStep::PreMood => "a pre-writing mood",
            SessionStep::Writing => "the entry text",
            SessionStep::PostMood => "a post-writing mood",
            SessionStep::Complete => "nothing more",
        }
    }
}

/// One pass through the journaling flow for a single date.
#[derive(Debug, Clone)]
pub struct JournalSession {
    date: NaiveDate,
    prompt: &'static str,
    time_limit: Option<u64>,
    step: SessionStep,
    pre_mood: Option<MoodType>,
    text: Option<String>,
    post_mood: Option<MoodType>,
}

impl JournalSession {
    /// Starts a session for `date`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::FutureDate` if `date` is after `today`, and
    /// `SessionError::OutsideJournalYear` if `date` falls before today's year.
    pub fn begin(date: NaiveDate, today: NaiveDate) -> Result<Self, SessionError> {
        if date > today {
            return Err(SessionError::FutureDate { date });
        }
        if date.year() != today.year() {
            return Err(SessionError::OutsideJournalYear {
                date,
                year: today.year(),
            });
        }

        let time_limit = (date == today).then_some(WRITING_TIME_LIMIT_SECS);
        debug!(%date, ?time_limit, "Beginning journal session");

        Ok(Self {
            date,
            prompt: prompt_for(date),
            time_limit,
            step: SessionStep::PreMood,
            pre_mood: None,
            text: None,
            post_mood: None,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn step(&self) -> SessionStep {
        self.step
    }

    /// Writing time limit in seconds, or `None` when untimed.
    pub fn time_limit(&self) -> Option<u64> {
        self.time_limit
    }

    /// Seconds left after `elapsed_secs` of writing, or `None` when untimed.
    pub fn remaining(&self, elapsed_secs: u64) -> Option<u64> {
        self.time_limit
            .map(|limit| limit.saturating_sub(elapsed_secs))
    }

    fn expect_step(&self, wanted: SessionStep, step: &'static str) -> Result<(), SessionError> {
        if self.step == wanted {
            Ok(())
        } else {
            Err(SessionError::OutOfOrder {
                step,
                expected: self.step.describe(),
            })
        }
    }

    pub fn record_pre_mood(&mut self, mood: MoodType) -> Result<(), SessionError> {
        self.expect_step(SessionStep::PreMood, "record a pre-writing mood")?;
        self.pre_mood = Some(mood);
        self.step = SessionStep::Writing;
        Ok(())
    }

    /// Records the entry text. Surrounding whitespace is trimmed.
    pub fn write(&mut self, text: &str) -> Result<(), SessionError> {
        self.expect_step(SessionStep::Writing, "write")?;
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyText);
        }
        self.text = Some(text.to_string());
        self.step = SessionStep::PostMood;
        Ok(())
    }

    pub fn record_post_mood(&mut self, mood: MoodType) -> Result<(), SessionError> {
        self.expect_step(SessionStep::PostMood, "record a post-writing mood")?;
        self.post_mood = Some(mood);
        self.step = SessionStep::Complete;
        Ok(())
    }

    /// Consumes the session and builds the entry.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` naming the first missing step.
    pub fn finish(self) -> Result<JournalEntry, SessionError> {
        match (self.pre_mood, self.text, self.post_mood) {
            (Some(pre), Some(text), Some(post)) => {
                Ok(JournalEntry::new(self.date, pre, post, text))
            }
            _ => Err(SessionError::Incomplete {
                missing: self.step.describe(),
            }),
        }
    }
}

/// Formats seconds as a `m:ss` countdown, e.g. `"0:09"`.
///
/// ```
/// use sixty::ops::countdown_label;
///
/// assert_eq!(countdown_label(60), "1:00");
/// assert_eq!(countdown_label(9), "0:09");
/// ```
pub fn countdown_label(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
