//! Derived views and the journaling flow.
//!
//! Every view is a pure function over a slice of entries, so it works the same on
//! the generated journal and on hand-built test fixtures.

pub mod calendar;
pub mod monthly;
pub mod search;
pub mod session;
pub mod stats;
pub mod trend;

// Re-export commonly used functions
pub use calendar::{has_journaled_today, home_summary, month_grid, DayCell, DayStatus, HomeSummary};
pub use monthly::{
    filtered_month_entries, month_entries, parse_month, recent_month_entries, short_month_name,
};
pub use search::search_entries;
pub use session::{countdown_label, JournalSession, SessionStep};
pub use stats::{
    current_streak, longest_streak, mood_distribution, summarize, total_words, weekly_activity,
    DayActivity, MoodCount, StatsSummary,
};
pub use trend::{classify_trend, mood_trend, Trend, TrendPoint, TrendWindow};
