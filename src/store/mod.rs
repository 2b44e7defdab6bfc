//! In-memory entry store.
//!
//! `EntryStore` owns the journal for the lifetime of the process. It is passed
//! explicitly to the views and commands that need it, so tests can build their own
//! store from hand-picked entries. Nothing is written to disk.
//!
//! Entries are kept in ascending chronological order; every mutation preserves it.

use crate::config::Config;
use crate::errors::{AppResult, StoreError};
use crate::journal_core::{EntryEdit, EntryGenerator, JournalEntry};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, info};

/// Ordered, in-memory collection of journal entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    entries: Vec<JournalEntry>,
}

impl EntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from existing entries, sorting them chronologically.
    ///
    /// Duplicate ids or dates are rejected.
    pub fn from_entries(mut entries: Vec<JournalEntry>) -> Result<Self, StoreError> {
        let mut ids = HashSet::new();
        let mut dates = HashSet::new();
        for entry in &entries {
            if !ids.insert(entry.id.as_str()) || !dates.insert(entry.calendar_date) {
                return Err(StoreError::DuplicateEntry {
                    id: entry.id.clone(),
                });
            }
        }

        entries.sort_by_key(|entry| entry.calendar_date);
        Ok(Self { entries })
    }

    /// Creates a store holding a freshly generated mock journal.
    ///
    /// Returns the store and the seed used, so callers can log it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the config does not validate.
    pub fn generate(config: &Config) -> AppResult<(Self, u64)> {
        let mut generator = EntryGenerator::new(config)?;
        let entries = generator.generate();
        Ok((Self { entries }, generator.seed()))
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has this id.
    pub fn get(&self, id: &str) -> Result<&JournalEntry, StoreError> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// The entry written on `date`, if any.
    pub fn find_by_date(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.position_of_date(date)
            .ok()
            .map(|index| &self.entries[index])
    }

    fn position_of_date(&self, date: NaiveDate) -> Result<usize, usize> {
        self.entries
            .binary_search_by_key(&date, |entry| entry.calendar_date)
    }

    fn position_of_id(&self, id: &str) -> Result<usize, StoreError> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Inserts an entry at its chronological position.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateEntry` if an entry with the same id or
    /// date already exists.
    pub fn insert(&mut self, entry: JournalEntry) -> Result<&JournalEntry, StoreError> {
        if self.entries.iter().any(|existing| existing.id == entry.id) {
            return Err(StoreError::DuplicateEntry { id: entry.id });
        }

        match self.position_of_date(entry.calendar_date) {
            Ok(_) => Err(StoreError::DuplicateEntry { id: entry.id }),
            Err(index) => {
                info!(id = %entry.id, "Inserting journal entry");
                self.entries.insert(index, entry);
                Ok(&self.entries[index])
            }
        }
    }

    /// Applies an edit to an existing entry and returns the updated entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has this id.
    pub fn update(&mut self, id: &str, edit: EntryEdit) -> Result<&JournalEntry, StoreError> {
        let index = self.position_of_id(id)?;
        if edit.is_empty() {
            debug!(id, "Empty edit, entry unchanged");
        } else {
            info!(id, "Updating journal entry");
            edit.apply(&mut self.entries[index]);
        }
        Ok(&self.entries[index])
    }

    /// Removes an entry and returns it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has this id.
    pub fn remove(&mut self, id: &str) -> Result<JournalEntry, StoreError> {
        let index = self.position_of_id(id)?;
        info!(id, "Removing journal entry");
        Ok(self.entries.remove(index))
    }
}
