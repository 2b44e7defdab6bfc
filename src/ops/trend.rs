//! Mood scoring over time.
//!
//! Turns post-writing moods into a score series for a time window and classifies
//! the direction of the series. Days or months without entries score as neutral.

use crate::constants::{
    MONTH_LABEL_FORMAT, NEUTRAL_MOOD_SCORE, TREND_THRESHOLD, TREND_WEEK_DAYS,
    WEEKDAY_LABEL_FORMAT,
};
use crate::errors::{AppError, AppResult};
use crate::journal_core::JournalEntry;
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The span a trend chart covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendWindow {
    /// The seven days ending today, one point per day.
    #[default]
    Week,
    /// The six months ending this month, one averaged point per month.
    SixMonths,
    /// The twelve months ending this month, one averaged point per month.
    TwelveMonths,
}

impl FromStr for TrendWindow {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "week" | "7d" => Ok(TrendWindow::Week),
            "6m" | "6months" | "six-months" => Ok(TrendWindow::SixMonths),
            "12m" | "12months" | "twelve-months" | "year" => Ok(TrendWindow::TwelveMonths),
            other => Err(AppError::Journal(format!(
                "Unknown trend window '{}'. Expected week, 6m or 12m",
                other
            ))),
        }
    }
}

/// One point on the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub score: f64,
}

/// Direction of a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Upward,
    Downward,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Trend::Upward => "Upward Trend",
            Trend::Downward => "Downward Trend",
            Trend::Stable => "Stable Mood",
        };
        f.write_str(text)
    }
}

fn average_score<'a>(entries: impl Iterator<Item = &'a JournalEntry>) -> f64 {
    let (total, count) = entries.fold((0.0, 0usize), |(total, count), entry| {
        (total + entry.post_mood.score(), count + 1)
    });
    if count == 0 {
        NEUTRAL_MOOD_SCORE
    } else {
        total / count as f64
    }
}

fn week_points(entries: &[JournalEntry], today: NaiveDate) -> Vec<TrendPoint> {
    (0..TREND_WEEK_DAYS)
        .rev()
        .map(|days_back| {
            let day = today - Duration::days(days_back);
            let score = entries
                .iter()
                .find(|entry| entry.calendar_date == day)
                .map_or(NEUTRAL_MOOD_SCORE, |entry| entry.post_mood.score());
            TrendPoint {
                label: day.format(WEEKDAY_LABEL_FORMAT).to_string(),
                score,
            }
        })
        .collect()
}

fn month_points(entries: &[JournalEntry], today: NaiveDate, months: u32) -> Vec<TrendPoint> {
    (0..months)
        .rev()
        .filter_map(|months_back| today.checked_sub_months(Months::new(months_back)))
        .map(|month_day| {
            let in_month = entries.iter().filter(|entry| {
                entry.calendar_date.year() == month_day.year()
                    && entry.calendar_date.month() == month_day.month()
            });
            TrendPoint {
                label: month_day.format(MONTH_LABEL_FORMAT).to_string(),
                score: average_score(in_month),
            }
        })
        .collect()
}

/// Scores post-writing moods over `window`, ending at `today`, oldest point first.
///
/// ```
/// use sixty::ops::{mood_trend, TrendWindow};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 12, 27).unwrap();
/// let points = mood_trend(&[], TrendWindow::Week, today);
/// assert_eq!(points.len(), 7);
/// assert!(points.iter().all(|p| p.score == 3.0));
/// assert_eq!(points[6].label, "Sat");
/// ```
pub fn mood_trend(
    entries: &[JournalEntry],
    window: TrendWindow,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    match window {
        TrendWindow::Week => week_points(entries, today),
        TrendWindow::SixMonths => month_points(entries, today, 6),
        TrendWindow::TwelveMonths => month_points(entries, today, 12),
    }
}

/// Classifies a series by comparing its first and last points.
pub fn classify_trend(points: &[TrendPoint]) -> Trend {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Trend::Stable;
    };

    let diff = last.score - first.score;
    if diff > TREND_THRESHOLD {
        Trend::Upward
    } else if diff < -TREND_THRESHOLD {
        Trend::Downward
    } else {
        Trend::Stable
    }
}
