//! Constants used throughout the application.
//!
//! This module contains all constants used in the Sixty application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "sixty";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Sixty-second journaling with mood check-ins";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for overriding the mock "today".
pub const ENV_VAR_SIXTY_TODAY: &str = "SIXTY_TODAY";
/// Environment variable for seeding the mock entry generator.
pub const ENV_VAR_SIXTY_SEED: &str = "SIXTY_SEED";
/// Environment variable for the probability that a day is skipped.
pub const ENV_VAR_SIXTY_SKIP_RATE: &str = "SIXTY_SKIP_RATE";
/// Default mock "today" (YYYY-MM-DD).
pub const DEFAULT_TODAY: &str = "2025-12-27";
/// Default probability that the generator leaves a day without an entry.
pub const DEFAULT_SKIP_RATE: f64 = 0.10;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Display format for entry dates, e.g. "Dec 27, 2025".
pub const ENTRY_DATE_FORMAT: &str = "%b %-d, %Y";
/// Display time stamped on every entry.
pub const ENTRY_DISPLAY_TIME: &str = "9:15 PM";
/// Short weekday label format, e.g. "Mon".
pub const WEEKDAY_LABEL_FORMAT: &str = "%a";
/// Short month label format, e.g. "Dec".
pub const MONTH_LABEL_FORMAT: &str = "%b";

// Journaling Session
/// Writing time limit for today's session, in seconds.
pub const WRITING_TIME_LIMIT_SECS: u64 = 60;

// Derived Views
/// Number of entries shown in a month's "recent" summary.
pub const RECENT_MONTH_LIMIT: usize = 4;
/// Number of daily points in the week trend window.
pub const TREND_WEEK_DAYS: i64 = 7;
/// Score used when a day or month in a trend window has no entries.
pub const NEUTRAL_MOOD_SCORE: f64 = 3.0;
/// Minimum score difference between the first and last trend point to count as a trend.
pub const TREND_THRESHOLD: f64 = 0.5;
/// Message shown when a view has no matching entries.
pub const EMPTY_RESULT_MESSAGE: &str = "No entries match your filters.";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "sixty";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
