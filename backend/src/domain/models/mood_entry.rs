//! Domain model for a mood entry.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of a user's mood log.
///
/// Entries are append-only: never edited or deleted after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// When the entry was logged
    pub date: DateTime<Utc>,
    /// Which child/profile the check-in was for
    pub child: String,
    /// The selected mood label
    pub mood: String,
    /// Free-text note, empty when the user left it blank
    pub note: String,
}

impl MoodEntry {
    pub fn new(child: String, mood: String, note: String) -> Self {
        Self {
            date: Utc::now(),
            child,
            mood,
            note,
        }
    }
}
