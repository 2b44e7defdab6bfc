//! The fixed mood taxonomy.
//!
//! Every entry records two moods, one before writing and one after. The set of
//! moods is closed: five values, each with display metadata and an ordinal
//! score used by the trend view.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the five mood categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodType {
    Happy,
    Calm,
    Anxious,
    Sad,
    Angry,
}

impl MoodType {
    /// All mood types in taxonomy order.
    pub const ALL: [MoodType; 5] = [
        MoodType::Happy,
        MoodType::Calm,
        MoodType::Anxious,
        MoodType::Sad,
        MoodType::Angry,
    ];

    /// The unique key for this mood, e.g. `"happy"`.
    pub fn key(self) -> &'static str {
        match self {
            MoodType::Happy => "happy",
            MoodType::Calm => "calm",
            MoodType::Anxious => "anxious",
            MoodType::Sad => "sad",
            MoodType::Angry => "angry",
        }
    }

    /// Ordinal score from 5 (happy) down to 1 (angry).
    ///
    /// ```
    /// use sixty::mood::MoodType;
    ///
    /// assert_eq!(MoodType::Happy.score(), 5.0);
    /// assert_eq!(MoodType::Angry.score(), 1.0);
    /// ```
    pub fn score(self) -> f64 {
        match self {
            MoodType::Happy => 5.0,
            MoodType::Calm => 4.0,
            MoodType::Anxious => 3.0,
            MoodType::Sad => 2.0,
            MoodType::Angry => 1.0,
        }
    }

    /// Display metadata for this mood.
    pub fn mood(self) -> &'static Mood {
        match self {
            MoodType::Happy => &MOODS[0],
            MoodType::Calm => &MOODS[1],
            MoodType::Anxious => &MOODS[2],
            MoodType::Sad => &MOODS[3],
            MoodType::Angry => &MOODS[4],
        }
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MoodType {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let wanted = s.trim().to_lowercase();
        MoodType::ALL
            .into_iter()
            .find(|mood| mood.key() == wanted)
            .ok_or_else(|| {
                AppError::Journal(format!(
                    "Unknown mood type '{}'. Expected one of: happy, calm, anxious, sad, angry",
                    s
                ))
            })
    }
}

/// Display metadata for a mood.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mood {
    pub emoji: &'static str,
    #[serde(rename = "type")]
    pub mood_type: MoodType,
    pub label: &'static str,
    pub color: &'static str,
}

/// The mood taxonomy, in display order.
pub static MOODS: [Mood; 5] = [
    Mood {
        emoji: "😊",
        mood_type: MoodType::Happy,
        label: "Happy",
        color: "#FFD700",
    },
    Mood {
        emoji: "😌",
        mood_type: MoodType::Calm,
        label: "Calm",
        color: "#87CEEB",
    },
    Mood {
        emoji: "😟",
        mood_type: MoodType::Anxious,
        label: "Anxious",
        color: "#FF9999",
    },
    Mood {
        emoji: "😔",
        mood_type: MoodType::Sad,
        label: "Sad",
        color: "#4169E1",
    },
    Mood {
        emoji: "😠",
        mood_type: MoodType::Angry,
        label: "Angry",
        color: "#FF6347",
    },
];
