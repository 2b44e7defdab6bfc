//! The history calendar and the home screen summary.

use super::stats::current_streak;
use crate::errors::{AppError, AppResult};
use crate::journal_core::{display_date, prompt_for, JournalEntry, USER_PROFILE};
use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// What a calendar cell shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DayStatus {
    /// An entry exists for this day.
    Journaled { id: String },
    /// Today, not yet journaled.
    Today,
    /// A past day without an entry; it can be backfilled.
    Open,
    /// After today; not selectable.
    Future,
}

/// One day of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    #[serde(flatten)]
    pub status: DayStatus,
}

/// Builds the calendar grid for `month` of `year`.
///
/// # Errors
///
/// Returns `AppError::Journal` if `year` is outside the supported calendar range.
pub fn month_grid(
    entries: &[JournalEntry],
    year: i32,
    month: Month,
    today: NaiveDate,
) -> AppResult<Vec<DayCell>> {
    let month_number = month.number_from_month();
    let first = NaiveDate::from_ymd_opt(year, month_number, 1)
        .ok_or_else(|| AppError::Journal(format!("Unsupported year {}", year)))?;

    let by_date: HashMap<NaiveDate, &str> = entries
        .iter()
        .map(|entry| (entry.calendar_date, entry.id.as_str()))
        .collect();

    let cells = first
        .iter_days()
        .take_while(|date| date.month() == month_number)
        .map(|date| {
            let status = match by_date.get(&date) {
                Some(id) => DayStatus::Journaled { id: id.to_string() },
                None if date == today => DayStatus::Today,
                None if date > today => DayStatus::Future,
                None => DayStatus::Open,
            };
            DayCell {
                day: date.day(),
                status,
            }
        })
        .collect();

    Ok(cells)
}

/// Whether an entry exists for `today`.
pub fn has_journaled_today(entries: &[JournalEntry], today: NaiveDate) -> bool {
    entries.iter().any(|entry| entry.calendar_date == today)
}

/// The home screen summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSummary {
    pub greeting_name: &'static str,
    pub today: String,
    pub prompt: &'static str,
    pub journaled_today: bool,
    pub current_streak: u32,
}

/// Builds the home screen summary for `today`.
pub fn home_summary(entries: &[JournalEntry], today: NaiveDate) -> HomeSummary {
    HomeSummary {
        greeting_name: USER_PROFILE.first_name(),
        today: display_date(today),
        prompt: prompt_for(today),
        journaled_today: has_journaled_today(entries, today),
        current_streak: current_streak(entries, today),
    }
}
