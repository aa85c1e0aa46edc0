use log::info;
use std::collections::HashMap;

use crate::domain::commands::mood::{CheckInCommand, CheckInResult};
use crate::domain::errors::MoodLogError;
use crate::domain::models::mood_entry::MoodEntry;
use crate::storage::csv::{CsvConnection, MoodLogRepository};
use crate::storage::traits::MoodLogStorage;

/// Service for appending and reading mood entries, scoped to one
/// authenticated username per call.
///
/// No validation of mood label membership or note content happens here;
/// the check-in form constrains the choices. The log itself accepts any
/// label string.
#[derive(Clone)]
pub struct MoodLogService {
    mood_log_repository: MoodLogRepository,
}

impl MoodLogService {
    /// Create a new MoodLogService
    pub fn new(connection: CsvConnection) -> Self {
        let mood_log_repository = MoodLogRepository::new(connection);
        Self { mood_log_repository }
    }

    /// Idempotent creation of an empty log for the user
    pub fn ensure_log(&self, username: &str) -> Result<(), MoodLogError> {
        self.mood_log_repository.ensure_log(username)?;
        Ok(())
    }

    /// Log one check-in: construct an entry with the current timestamp,
    /// append it to the user's log, persist.
    pub fn check_in(&self, command: CheckInCommand) -> Result<CheckInResult, MoodLogError> {
        info!(
            "Check-in for user '{}': child={}, mood={}",
            command.username, command.child, command.mood
        );

        let entry = MoodEntry::new(
            command.child,
            command.mood,
            command.note.unwrap_or_default(),
        );

        self.mood_log_repository
            .append_entry(&command.username, &entry)?;

        Ok(CheckInResult { entry })
    }

    /// Full log in insertion order. A never-initialized user has an empty
    /// log, not an error.
    pub fn entries(&self, username: &str) -> Result<Vec<MoodEntry>, MoodLogError> {
        Ok(self.mood_log_repository.read_entries(username)?)
    }

    /// The last `n` entries (or fewer if the log is shorter), oldest first.
    /// A pure view over `entries`.
    pub fn recent_entries(&self, username: &str, n: usize) -> Result<Vec<MoodEntry>, MoodLogError> {
        let entries = self.entries(username)?;
        let skip = entries.len().saturating_sub(n);
        Ok(entries.into_iter().skip(skip).collect())
    }

    /// Frequency table of mood labels over the full log. The sum of all
    /// counts equals the log length; iteration order is unspecified.
    pub fn tally(&self, username: &str) -> Result<HashMap<String, u32>, MoodLogError> {
        let entries = self.entries(username)?;

        let mut counts: HashMap<String, u32> = HashMap::new();
        for entry in entries {
            *counts.entry(entry.mood).or_insert(0) += 1;
        }

        Ok(counts)
    }
}
