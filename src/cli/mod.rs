use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::mood::MoodType;
use crate::ops::TrendWindow;
use clap::{Args, Parser, Subcommand};

/// Sixty-second journaling with mood check-ins
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Seed for the generated journal (overrides SIXTY_SEED)
    #[clap(long, global = true)]
    pub seed: Option<u64>,

    /// Mock current date, YYYY-MM-DD or YYYYMMDD (overrides SIXTY_TODAY)
    #[clap(long, global = true)]
    pub today: Option<String>,

    /// Print views as JSON
    #[clap(long, global = true)]
    pub json: bool,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(
        long,
        global = true,
        value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON],
        default_value = LOG_FORMAT_TEXT
    )]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Command,
}

/// Search text and mood filter shared by the list views.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// Case-insensitive text matched against entry text and date
    #[clap(short = 'q', long, default_value = "")]
    pub query: String,

    /// Only entries whose post-writing mood is this (happy, calm, anxious, sad, angry)
    #[clap(short = 'm', long, value_parser = parse_mood)]
    pub mood: Option<MoodType>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Greeting, today's prompt and current streak
    Home,

    /// All entries, oldest first
    List,

    /// Search entries by text or date and filter by mood
    Search(FilterArgs),

    /// Entries of one month, most recent first
    Month {
        /// Month name, e.g. December or dec
        name: String,

        /// Only the most recent few entries
        #[clap(long)]
        recent: bool,

        #[clap(flatten)]
        filter: FilterArgs,
    },

    /// Calendar grid for a month (defaults to the current month)
    Calendar {
        /// Month name, e.g. December or dec
        name: Option<String>,
    },

    /// Mood trend over a window
    Trend {
        /// week, 6m or 12m
        #[clap(short = 'w', long, default_value = "week", value_parser = parse_window)]
        window: TrendWindow,
    },

    /// Entry counts, word totals, streaks and mood distribution
    Stats,

    /// Show one entry by id, e.g. dec-27
    Show {
        id: String,
    },

    /// Journal for today (or a past date) and add the entry
    Record {
        /// Mood before writing
        #[clap(long, value_parser = parse_mood)]
        pre: MoodType,

        /// Mood after writing
        #[clap(long, value_parser = parse_mood)]
        post: MoodType,

        /// The reflection text
        #[clap(long)]
        text: String,

        /// Backfill a past date, YYYY-MM-DD or YYYYMMDD
        #[clap(short = 'd', long)]
        date: Option<String>,
    },

    /// Change the text or moods of an entry
    Edit {
        id: String,

        #[clap(long)]
        text: Option<String>,

        #[clap(long, value_parser = parse_mood)]
        pre: Option<MoodType>,

        #[clap(long, value_parser = parse_mood)]
        post: Option<MoodType>,
    },

    /// Delete an entry
    Delete {
        id: String,
    },

    /// The user profile
    Profile,

    /// The mood taxonomy
    Moods,
}

fn parse_mood(value: &str) -> Result<MoodType, String> {
    value.parse::<MoodType>().map_err(|e| e.to_string())
}

fn parse_window(value: &str) -> Result<TrendWindow, String> {
    value.parse::<TrendWindow>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_defaults() {
        let args = CliArgs::parse_from(vec!["sixty", "list"]);
        assert_eq!(args.command, Command::List);
        assert!(args.seed.is_none());
        assert!(args.today.is_none());
        assert!(!args.json);
        assert!(!args.verbose);
        assert_eq!(args.log_format, "text");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(vec![
            "sixty", "stats", "--seed", "7", "--json", "-v", "--today", "20250601",
        ]);
        assert_eq!(args.command, Command::Stats);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.today.as_deref(), Some("20250601"));
        assert!(args.json);
        assert!(args.verbose);
    }

    #[test]
    fn test_search_filters() {
        let args = CliArgs::parse_from(vec!["sixty", "search", "-q", "park", "--mood", "Happy"]);
        assert_eq!(
            args.command,
            Command::Search(FilterArgs {
                query: "park".to_string(),
                mood: Some(MoodType::Happy),
            })
        );

        let args = CliArgs::parse_from(vec!["sixty", "search"]);
        assert_eq!(args.command, Command::Search(FilterArgs::default()));
    }

    #[test]
    fn test_invalid_mood_rejected() {
        let result = CliArgs::try_parse_from(vec!["sixty", "search", "--mood", "ecstatic"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown mood type"));
    }

    #[test]
    fn test_month_command() {
        let args = CliArgs::parse_from(vec!["sixty", "month", "December", "--recent"]);
        match args.command {
            Command::Month {
                name,
                recent,
                filter,
            } => {
                assert_eq!(name, "December");
                assert!(recent);
                assert_eq!(filter, FilterArgs::default());
            }
            other => panic!("Expected Month command, got {:?}", other),
        }
    }

    #[test]
    fn test_trend_window() {
        let args = CliArgs::parse_from(vec!["sixty", "trend"]);
        assert_eq!(
            args.command,
            Command::Trend {
                window: TrendWindow::Week
            }
        );

        let args = CliArgs::parse_from(vec!["sixty", "trend", "-w", "12m"]);
        assert_eq!(
            args.command,
            Command::Trend {
                window: TrendWindow::TwelveMonths
            }
        );
    }

    #[test]
    fn test_record_requires_moods_and_text() {
        assert!(CliArgs::try_parse_from(vec!["sixty", "record", "--pre", "calm"]).is_err());

        let args = CliArgs::parse_from(vec![
            "sixty", "record", "--pre", "sad", "--post", "calm", "--text", "Hello", "-d",
            "2025-12-20",
        ]);
        assert_eq!(
            args.command,
            Command::Record {
                pre: MoodType::Sad,
                post: MoodType::Calm,
                text: "Hello".to_string(),
                date: Some("2025-12-20".to_string()),
            }
        );
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let result = CliArgs::try_parse_from(vec!["sixty", "list", "--log-format", "xml"]);
        assert!(result.is_err());
    }
}
