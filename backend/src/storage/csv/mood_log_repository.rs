use anyhow::{Context, Result};
use csv::{Reader, Writer};
use log::info;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::mood_entry::MoodEntry as DomainMoodEntry;
use crate::storage::traits::MoodLogStorage;

/// CSV-based mood log repository, one `mood_log.csv` per user
#[derive(Clone)]
pub struct MoodLogRepository {
    connection: CsvConnection,
}

impl MoodLogRepository {
    /// Create a new CSV mood log repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Parse a stored date cell into a DateTime. The log is written with
    /// RFC 3339 timestamps; bare `YYYY-MM-DD` dates (hand-edited or
    /// migrated files) are accepted as midnight UTC. Anything else is a
    /// malformed store and fails fast.
    fn parse_date_cell(date_str: &str) -> Result<chrono::DateTime<chrono::Utc>> {
        use chrono::{DateTime, NaiveDate, Utc};

        if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
            return Ok(dt.with_timezone(&Utc));
        }

        if let Ok(naive_date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
            if let Some(naive_datetime) = naive_date.and_hms_opt(0, 0, 0) {
                return Ok(naive_datetime.and_utc());
            }
        }

        Err(anyhow::anyhow!("Unparseable date in mood log: '{}'", date_str))
    }

    /// Read all entries from a user's CSV file, in file (= insertion) order
    fn read_log(&self, username: &str) -> Result<Vec<DomainMoodEntry>> {
        let file_path = self.connection.get_mood_log_path(username);

        // A user who never checked in has an empty log, not an error
        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut entries = Vec::new();
        for result in csv_reader.records() {
            let record = result
                .with_context(|| format!("Malformed mood log: {}", file_path.display()))?;

            let entry = DomainMoodEntry {
                date: Self::parse_date_cell(record.get(0).unwrap_or(""))?,
                child: record.get(1).unwrap_or("").to_string(),
                mood: record.get(2).unwrap_or("").to_string(),
                note: record.get(3).unwrap_or("").to_string(),
            };
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Write all entries for a user to their CSV file
    fn write_log(&self, username: &str, entries: &[DomainMoodEntry]) -> Result<()> {
        self.connection.ensure_mood_log_file_exists(username)?;
        let file_path = self.connection.get_mood_log_path(username);

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(["date", "child", "mood", "note"])?;

        for entry in entries {
            csv_writer.write_record([
                &entry.date.to_rfc3339(),
                &entry.child,
                &entry.mood,
                &entry.note,
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl MoodLogStorage for MoodLogRepository {
    fn ensure_log(&self, username: &str) -> Result<()> {
        self.connection.ensure_mood_log_file_exists(username)
    }

    fn append_entry(&self, username: &str, entry: &DomainMoodEntry) -> Result<()> {
        let mut entries = self.read_log(username)?;
        entries.push(entry.clone());
        self.write_log(username, &entries)?;

        info!(
            "Appended mood entry for '{}': {} ({} total)",
            username,
            entry.mood,
            entries.len()
        );
        Ok(())
    }

    fn read_entries(&self, username: &str) -> Result<Vec<DomainMoodEntry>> {
        self.read_log(username)
    }
}
