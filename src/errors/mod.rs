//! Error handling utilities for the sixty application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Represents errors that can occur when reading or mutating the entry store.
///
/// # Examples
///
/// ```
/// use sixty::errors::StoreError;
///
/// let error = StoreError::NotFound { id: "dec-32".to_string() };
/// assert!(format!("{}", error).contains("dec-32"));
/// assert!(format!("{}", error).contains("not found"));
/// ```
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// No entry has the requested id.
    #[error("Entry '{id}' not found. Run `sixty list` to see the ids of existing entries.")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// An entry with the same id (and therefore the same day) already exists.
    #[error("An entry for '{id}' already exists. Use `sixty edit {id}` to change it instead.")]
    DuplicateEntry {
        /// The id that collided
        id: String,
    },
}

/// Represents errors raised while stepping through a journaling session.
///
/// # Examples
///
/// ```
/// use sixty::errors::SessionError;
///
/// let error = SessionError::EmptyText;
/// assert!(format!("{}", error).contains("empty"));
/// ```
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    /// A step was attempted before the step it depends on.
    #[error("Cannot {step} yet: the session is waiting for {expected}.")]
    OutOfOrder {
        /// The step that was attempted
        step: &'static str,
        /// The step the session expects next
        expected: &'static str,
    },

    /// Sessions cannot be started for days that have not happened yet.
    #[error("Cannot journal for {date}: the date is in the future.")]
    FutureDate {
        /// The requested date
        date: NaiveDate,
    },

    /// Entry ids carry no year, so only the journal's own year can be backfilled.
    #[error("Cannot journal for {date}: only dates in {year} can be recorded.")]
    OutsideJournalYear {
        /// The requested date
        date: NaiveDate,
        /// The year of the current journal
        year: i32,
    },

    /// The reflection text was empty or whitespace.
    #[error("Entry text is empty. Write at least a few words before finishing.")]
    EmptyText,

    /// The session was finished before every step was recorded.
    #[error("Session is incomplete: missing {missing}.")]
    Incomplete {
        /// The first step that has not been recorded
        missing: &'static str,
    },
}

/// Represents all possible errors that can occur in the sixty application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use sixty::errors::AppError;
///
/// let error = AppError::Config("SIXTY_SEED must be an integer".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: SIXTY_SEED must be an integer");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors, e.g. when writing view output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal input (unknown mood, unknown month, invalid date).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors from the entry store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors from the journaling session flow.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Errors serializing views to JSON.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
