//! DTOs shared between the mood tracker backend and any presentation layer.
//!
//! These types are the wire/display surface: the backend maps them to and
//! from its internal domain models, and the UI never sees anything else.

use serde::{Deserialize, Serialize};

/// Default mood labels offered by the check-in form.
///
/// The label set is presentation configuration, not store behavior: the
/// backend accepts any label string, and a host may substitute its own set.
pub const DEFAULT_MOOD_LABELS: [&str; 7] = [
    "😄 Happy",
    "😊 Calm",
    "😐 Okay",
    "😢 Sad",
    "😠 Angry",
    "😴 Tired",
    "🤩 Excited",
];

/// Default subject choices for "who's checking in?".
pub const DEFAULT_SUBJECTS: [&str; 3] = ["Child A", "Child B", "Child C"];

/// The caller-held identity of a logged-in user.
///
/// Returned by a successful login and passed back (by username) into every
/// subsequent mood log call. There is no server-side session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    /// Display name shown in the UI
    pub name: String,
    /// Unique account key (case-sensitive)
    pub username: String,
    /// Plaintext password; hashed before storage, never persisted as-is
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub username: String,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session: Session,
}

/// A single logged mood entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// When the entry was logged (RFC 3339)
    pub date: String,
    /// Which child/profile checked in
    pub child: String,
    /// Selected mood label
    pub mood: String,
    /// Free-text note, possibly empty
    pub note: String,
}

impl MoodEntry {
    /// Parse the RFC 3339 date cell, for date-based grouping in the UI.
    /// Returns `None` for a malformed cell instead of failing the render.
    pub fn parsed_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// Subject selection from the fixed set
    pub child: String,
    /// Mood selection from the label set
    pub mood: String,
    /// Optional free-text note
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub entry: MoodEntry,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLogResponse {
    pub entries: Vec<MoodEntry>,
}

/// One bar of the mood chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodCount {
    pub mood: String,
    pub count: u32,
}

/// Frequency table of moods for the chart affordance.
///
/// Counts carry no ordering guarantee; the chart decides how to sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodTallyResponse {
    pub counts: Vec<MoodCount>,
    pub total_entries: u32,
}

/// CSV export payload for the download affordance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDataResponse {
    /// Suggested filename for the download
    pub filename: String,
    /// Full CSV content, same columns as the persisted log
    pub csv_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_in_request_round_trips_without_note() {
        let request = CheckInRequest {
            child: "Child A".to_string(),
            mood: "😄 Happy".to_string(),
            note: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        let back: CheckInRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_mood_entry_parsed_date() {
        let entry = MoodEntry {
            date: "2025-03-01T14:02:11+00:00".to_string(),
            child: "Child A".to_string(),
            mood: "😊 Calm".to_string(),
            note: String::new(),
        };
        assert!(entry.parsed_date().is_some());

        let bad = MoodEntry {
            date: "not a date".to_string(),
            ..entry
        };
        assert!(bad.parsed_date().is_none());
    }

    #[test]
    fn test_default_label_set_is_distinct() {
        let mut labels: Vec<&str> = DEFAULT_MOOD_LABELS.to_vec();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), DEFAULT_MOOD_LABELS.len());
    }
}
