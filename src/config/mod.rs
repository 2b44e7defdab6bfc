//! Configuration management for the sixty application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It controls how the in-memory mock journal is
//! generated: which day counts as "today", the generator seed, and how often days are
//! left without an entry.
//!
//! # Environment Variables
//!
//! - `SIXTY_TODAY`: Mock current date, `YYYY-MM-DD` or `YYYYMMDD` (defaults to 2025-12-27)
//! - `SIXTY_SEED`: Seed for the entry generator (defaults to a random seed)
//! - `SIXTY_SKIP_RATE`: Probability in `[0, 1)` that a day has no entry (defaults to 0.10)

use crate::constants::{
    DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, DEFAULT_SKIP_RATE, DEFAULT_TODAY, ENV_VAR_SIXTY_SEED,
    ENV_VAR_SIXTY_SKIP_RATE, ENV_VAR_SIXTY_TODAY,
};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::env;

/// Configuration for the sixty application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use sixty::Config;
/// use chrono::NaiveDate;
///
/// let config = Config {
///     today: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     seed: Some(7),
///     skip_rate: 0.0,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The mock current date. Entries are generated from January 1 of this
    /// date's year up to and including this date.
    pub today: NaiveDate,

    /// Seed for the entry generator. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,

    /// Probability that the generator skips a day.
    pub skip_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            today: default_today(),
            seed: None,
            skip_rate: DEFAULT_SKIP_RATE,
        }
    }
}

fn default_today() -> NaiveDate {
    // DEFAULT_TODAY always parses
    NaiveDate::parse_from_str(DEFAULT_TODAY, DATE_FORMAT_ISO).unwrap_or(NaiveDate::MIN)
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format.
///
/// ```
/// use sixty::config::parse_date;
///
/// assert_eq!(parse_date("2025-12-27").unwrap().to_string(), "2025-12-27");
/// assert_eq!(parse_date("20251227").unwrap().to_string(), "2025-12-27");
/// assert!(parse_date("yesterday").is_err());
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - `SIXTY_TODAY` is not a valid date
    /// - `SIXTY_SEED` is not an unsigned integer
    /// - `SIXTY_SKIP_RATE` is not a number
    pub fn load() -> AppResult<Self> {
        let today = match env::var(ENV_VAR_SIXTY_TODAY) {
            Ok(raw) => parse_date(raw.trim()).map_err(|e| {
                AppError::Config(format!(
                    "{} must be a date in YYYY-MM-DD or YYYYMMDD format, got '{}': {}",
                    ENV_VAR_SIXTY_TODAY, raw, e
                ))
            })?,
            Err(_) => default_today(),
        };

        let seed = match env::var(ENV_VAR_SIXTY_SEED) {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!(
                    "{} must be an unsigned integer, got '{}': {}",
                    ENV_VAR_SIXTY_SEED, raw, e
                ))
            })?),
            Err(_) => None,
        };

        let skip_rate = match env::var(ENV_VAR_SIXTY_SKIP_RATE) {
            Ok(raw) => raw.trim().parse::<f64>().map_err(|e| {
                AppError::Config(format!(
                    "{} must be a number, got '{}': {}",
                    ENV_VAR_SIXTY_SKIP_RATE, raw, e
                ))
            })?,
            Err(_) => DEFAULT_SKIP_RATE,
        };

        Ok(Config {
            today,
            seed,
            skip_rate,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the skip rate is outside `[0, 1)`.
    /// A skip rate of 1 would produce an empty journal.
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..1.0).contains(&self.skip_rate) {
            return Err(AppError::Config(format!(
                "Skip rate must be at least 0 and below 1, got {}",
                self.skip_rate
            )));
        }

        Ok(())
    }
}
