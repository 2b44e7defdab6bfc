//! Command dispatch.
//!
//! Maps a parsed [`Command`] onto the store and views, and renders the result as
//! text or JSON. Returning the output instead of printing it keeps every command
//! testable without spawning the binary.

use crate::cli::{Command, FilterArgs};
use crate::config::parse_date;
use crate::constants::RECENT_MONTH_LIMIT;
use crate::errors::{AppError, AppResult};
use crate::journal_core::{EntryEdit, JournalEntry, USER_PROFILE};
use crate::mood::MOODS;
use crate::ops::{self, JournalSession};
use crate::render;
use crate::store::EntryStore;
use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

/// How views are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

fn list_output(entries: &[&JournalEntry], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(entries),
        OutputFormat::Text => Ok(render::entry_list(entries)),
    }
}

fn month_view<'a>(
    entries: &'a [JournalEntry],
    month: Month,
    recent: bool,
    filter: &FilterArgs,
) -> Vec<&'a JournalEntry> {
    let unfiltered = filter.query.is_empty() && filter.mood.is_none();
    match (unfiltered, recent) {
        (true, true) => ops::recent_month_entries(entries, month),
        (true, false) => ops::month_entries(entries, month),
        (false, _) => {
            let mut results =
                ops::filtered_month_entries(entries, month, &filter.query, filter.mood);
            if recent {
                results.truncate(RECENT_MONTH_LIMIT);
            }
            results
        }
    }
}

fn parse_entry_date(raw: &str) -> AppResult<NaiveDate> {
    parse_date(raw).map_err(|e| {
        AppError::Journal(format!(
            "Invalid date format '{}': {}. Expected YYYY-MM-DD or YYYYMMDD",
            raw, e
        ))
    })
}

/// Runs one command against the store and returns what should be printed.
///
/// # Errors
///
/// Propagates store, session and input errors, e.g. `StoreError::NotFound` for
/// `show` with an unknown id.
pub fn run(
    command: &Command,
    store: &mut EntryStore,
    today: NaiveDate,
    format: OutputFormat,
) -> AppResult<String> {
    debug!(?command, %today, "Running command");

    match command {
        Command::Home => {
            let summary = ops::home_summary(store.entries(), today);
            match format {
                OutputFormat::Json => to_json(&summary),
                OutputFormat::Text => Ok(render::home(&summary)),
            }
        }

        Command::List => {
            let all: Vec<&JournalEntry> = store.entries().iter().collect();
            list_output(&all, format)
        }

        Command::Search(filter) => {
            let results = ops::search_entries(store.entries(), &filter.query, filter.mood);
            list_output(&results, format)
        }

        Command::Month {
            name,
            recent,
            filter,
        } => {
            let month = ops::parse_month(name)?;
            let results = month_view(store.entries(), month, *recent, filter);
            list_output(&results, format)
        }

        Command::Calendar { name } => {
            let month = match name {
                Some(name) => ops::parse_month(name)?,
                None => Month::try_from(today.month() as u8).map_err(|_| {
                    AppError::Journal(format!("Invalid month in {}", today))
                })?,
            };
            let cells = ops::month_grid(store.entries(), today.year(), month, today)?;
            match format {
                OutputFormat::Json => to_json(&cells),
                OutputFormat::Text => {
                    let title = format!("{} {}", month.name(), today.year());
                    Ok(render::calendar(&title, &cells))
                }
            }
        }

        Command::Trend { window } => {
            let points = ops::mood_trend(store.entries(), *window, today);
            let trend = ops::classify_trend(&points);
            match format {
                OutputFormat::Json => to_json(&json!({
                    "trend": trend,
                    "label": trend.to_string(),
                    "points": points,
                })),
                OutputFormat::Text => Ok(render::trend(&points, trend)),
            }
        }

        Command::Stats => {
            let summary = ops::summarize(store.entries(), today);
            match format {
                OutputFormat::Json => to_json(&summary),
                OutputFormat::Text => Ok(render::stats(&summary)),
            }
        }

        Command::Show { id } => {
            let entry = store.get(id)?;
            match format {
                OutputFormat::Json => to_json(entry),
                OutputFormat::Text => Ok(render::entry_detail(entry)),
            }
        }

        Command::Record {
            pre,
            post,
            text,
            date,
        } => {
            let date = match date {
                Some(raw) => parse_entry_date(raw)?,
                None => today,
            };

            let mut session = JournalSession::begin(date, today)?;
            session.record_pre_mood(*pre)?;
            session.write(text)?;
            session.record_post_mood(*post)?;
            let time_limit = session.time_limit();
            let entry = session.finish()?;

            let entry = store.insert(entry)?.clone();
            info!(id = %entry.id, "Recorded journal entry");
            let summary = ops::summarize(store.entries(), today);

            match format {
                OutputFormat::Json => to_json(&json!({
                    "entry": entry,
                    "stats": summary,
                })),
                OutputFormat::Text => Ok(format!(
                    "{}\n{}",
                    render::recorded(&entry, time_limit),
                    render::stats(&summary)
                )),
            }
        }

        Command::Edit {
            id,
            text,
            pre,
            post,
        } => {
            let edit = EntryEdit {
                text: text.clone(),
                pre_mood: *pre,
                post_mood: *post,
            };
            if edit.is_empty() {
                return Err(AppError::Journal(
                    "Nothing to change. Pass --text, --pre or --post".to_string(),
                ));
            }

            let entry = store.update(id, edit)?;
            match format {
                OutputFormat::Json => to_json(entry),
                OutputFormat::Text => Ok(render::entry_detail(entry)),
            }
        }

        Command::Delete { id } => {
            let removed = store.remove(id)?;
            match format {
                OutputFormat::Json => to_json(&json!({
                    "deleted": removed.id,
                    "remaining": store.len(),
                })),
                OutputFormat::Text => Ok(format!(
                    "Deleted {}. {} entries remain.\n",
                    removed.id,
                    store.len()
                )),
            }
        }

        Command::Profile => match format {
            OutputFormat::Json => to_json(&USER_PROFILE),
            OutputFormat::Text => Ok(render::profile(&USER_PROFILE)),
        },

        Command::Moods => match format {
            OutputFormat::Json => to_json(&MOODS[..]),
            OutputFormat::Text => Ok(render::moods()),
        },
    }
}
