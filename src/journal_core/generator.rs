//! Mock journal generation.
//!
//! Builds a year of entries from January 1 of the configured "today" up to and
//! including today. Roughly one day in ten is skipped to look like a real habit;
//! a skipped day simply has no entry.

use super::{sample_text_for, JournalEntry};
use crate::config::Config;
use crate::errors::AppResult;
use crate::mood::MoodType;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Generator for the in-memory mock journal.
pub struct EntryGenerator {
    rng: ChaCha8Rng,
    seed: u64,
    today: NaiveDate,
    skip_rate: f64,
}

impl EntryGenerator {
    /// Create a generator from config.
    ///
    /// Without a configured seed a random one is drawn; [`EntryGenerator::seed`]
    /// reports it so a run can be reproduced.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the config does not validate, e.g. a skip
    /// rate outside `[0, 1)`.
    pub fn new(config: &Config) -> AppResult<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            today: config.today,
            skip_rate: config.skip_rate,
        })
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate the journal, in ascending chronological order.
    pub fn generate(&mut self) -> Vec<JournalEntry> {
        debug!(seed = self.seed, today = %self.today, "Generating mock journal");

        let Some(start) = NaiveDate::from_ymd_opt(self.today.year(), 1, 1) else {
            return Vec::new();
        };

        let today = self.today;
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for date in start.iter_days().take_while(|date| *date <= today) {
            if self.rng.gen_bool(self.skip_rate) {
                skipped += 1;
                continue;
            }

            let pre_mood = self.random_mood();
            let post_mood = self.random_mood();
            entries.push(JournalEntry::new(
                date,
                pre_mood,
                post_mood,
                sample_text_for(date),
            ));
        }

        info!(
            entries = entries.len(),
            skipped, "Generated mock journal entries"
        );
        entries
    }

    fn random_mood(&mut self) -> MoodType {
        MoodType::ALL[self.rng.gen_range(0..MoodType::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use chrono::Month;

    fn config(seed: u64) -> Config {
        Config {
            seed: Some(seed),
            ..Config::default()
        }
    }

    fn days_in_month(year: i32, month: u32) -> u32 {
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .unwrap();
        next.pred_opt().unwrap().day()
    }

    #[test]
    fn test_days_are_within_month_bounds() {
        let entries = EntryGenerator::new(&config(1)).unwrap().generate();
        assert!(!entries.is_empty());

        for entry in &entries {
            let month = entry.calendar_date.month();
            assert!(entry.day >= 1);
            assert!(entry.day <= days_in_month(2025, month));
            if month == 12 {
                assert!(entry.day <= 27, "December entry after today: {}", entry.id);
            }
        }
    }

    #[test]
    fn test_day_matches_display_month() {
        let entries = EntryGenerator::new(&config(2)).unwrap().generate();
        for entry in &entries {
            let month = Month::try_from(entry.calendar_date.month() as u8).unwrap();
            assert!(entry.date.starts_with(&month.name()[..3]));
            assert!(entry.date.contains(&format!(" {},", entry.day)));
        }
    }

    #[test]
    fn test_output_is_chronological_with_unique_ids() {
        let entries = EntryGenerator::new(&config(3)).unwrap().generate();

        for pair in entries.windows(2) {
            assert!(pair[0].calendar_date < pair[1].calendar_date);
        }

        let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn test_same_seed_same_journal() {
        let first = EntryGenerator::new(&config(99)).unwrap().generate();
        let second = EntryGenerator::new(&config(99)).unwrap().generate();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_skip_rate_fills_every_day() {
        let config = Config {
            seed: Some(5),
            skip_rate: 0.0,
            ..Config::default()
        };
        let entries = EntryGenerator::new(&config).unwrap().generate();

        // Jan 1 through Dec 27 of a non-leap year
        assert_eq!(entries.len(), 365 - 4);
        assert_eq!(entries[0].id, "jan-1");
        assert_eq!(entries.last().unwrap().id, "dec-27");
    }

    #[test]
    fn test_skip_rate_leaves_gaps() {
        let entries = EntryGenerator::new(&config(11)).unwrap().generate();
        // ~10% of 361 days
        assert!(entries.len() < 361);
        assert!(entries.len() > 280);
    }

    #[test]
    fn test_text_and_prompt_follow_rotation() {
        let entries = EntryGenerator::new(&config(4)).unwrap().generate();
        for entry in &entries {
            assert_eq!(entry.text, sample_text_for(entry.calendar_date));
            assert_eq!(entry.prompt, super::super::prompt_for(entry.calendar_date));
            assert_eq!(entry.time, "9:15 PM");
        }
    }

    #[test]
    fn test_today_bounds_generation() {
        let config = Config {
            today: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            seed: Some(8),
            skip_rate: 0.0,
        };
        let entries = EntryGenerator::new(&config).unwrap().generate();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries.last().unwrap().id, "jan-10");
    }

    #[test]
    fn test_seed_is_reported() {
        let generator = EntryGenerator::new(&config(1234)).unwrap();
        assert_eq!(generator.seed(), 1234);
    }

    #[test]
    fn test_out_of_range_skip_rate_is_rejected() {
        for skip_rate in [1.5, -0.1, 1.0] {
            let config = Config {
                seed: Some(1),
                skip_rate,
                ..Config::default()
            };
            match EntryGenerator::new(&config) {
                Err(AppError::Config(msg)) => assert!(msg.contains("Skip rate")),
                Err(other) => panic!("Expected Config error, got {:?}", other),
                Ok(_) => panic!("Expected skip rate {} to be rejected", skip_rate),
            }
        }
    }
}
