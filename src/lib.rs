/*!
# Sixty

Sixty is the data core of a sixty-second journaling habit. Each session records a
mood before writing, a short reflection against the day's prompt, and a mood after
writing. Entries are reviewed through search, monthly history, a calendar, mood
trends and aggregate stats.

The journal is generated mock data held in memory for the life of the process.
Nothing is persisted.

## Core Features

- Seeded, reproducible generation of a year of entries
- Text and date search with a mood filter
- Monthly history, most recent first
- Mood trend over a week or six/twelve months, with trend classification
- Entry counts, word totals, current and longest streaks
- A calendar grid and the daily prompt
- The journaling flow: pre-mood, timed writing, post-mood

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `mood`: The fixed mood taxonomy
- `journal_core`: Entry model, profile, prompts and the mock generator
- `store`: The injectable in-memory entry store
- `ops`: Derived views and the journaling session
- `app` and `render`: Command dispatch and text output

## Usage Example

```rust
use sixty::{Config, EntryStore};
use sixty::mood::MoodType;
use sixty::ops;

fn main() -> sixty::AppResult<()> {
    let config = Config { seed: Some(7), ..Config::default() };
    config.validate()?;

    let (store, _seed) = EntryStore::generate(&config)?;
    let happy = ops::search_entries(store.entries(), "", Some(MoodType::Happy));
    assert!(happy.iter().all(|e| e.post_mood == MoodType::Happy));

    let stats = ops::summarize(store.entries(), config.today);
    assert_eq!(stats.total_entries, store.len());
    Ok(())
}
```
*/

/// Command dispatch and output formatting
pub mod app;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Journal entry model, profile and mock generation
pub mod journal_core;
/// The mood taxonomy
pub mod mood;
/// Derived views and the journaling flow
pub mod ops;
/// Plain-text rendering of views
pub mod render;
/// In-memory entry store
pub mod store;

// Re-export important types for convenience
pub use app::{run, OutputFormat};
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::JournalEntry;
pub use store::EntryStore;
