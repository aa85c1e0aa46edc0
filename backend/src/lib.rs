//! # Mood Tracker Backend
//!
//! Core library behind the mood check-in app: a password-based account
//! directory plus one append-only mood log per user, both persisted as
//! flat files. The presentation layer authenticates through
//! [`domain::AccountService`], holds the returned session, and scopes
//! every [`domain::MoodLogService`] call to that username.
//!
//! All operations are synchronous whole-file reads/writes under a single
//! sequential caller; there is no locking and no background work.

use anyhow::Result;
use std::path::Path;

pub mod domain;
pub mod storage;

pub use storage::csv::CsvConnection;

/// Main backend struct that wires all services over one data directory
pub struct Backend {
    pub account_service: domain::AccountService,
    pub mood_log_service: domain::MoodLogService,
    pub export_service: domain::ExportService,
}

impl Backend {
    /// Create a backend over the given data directory, ensuring the
    /// account directory document exists.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = CsvConnection::new(data_dir)?;
        Self::with_connection(connection)
    }

    /// Create a backend in the default data directory
    /// (`~/Documents/Mood Tracker`).
    pub fn new_default() -> Result<Self> {
        let connection = CsvConnection::new_default()?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: CsvConnection) -> Result<Self> {
        let account_service = domain::AccountService::new(connection.clone());
        let mood_log_service = domain::MoodLogService::new(connection);
        let export_service = domain::ExportService::new();

        account_service
            .initialize()
            .map_err(|e| anyhow::anyhow!("Failed to initialize account directory: {}", e))?;

        Ok(Backend {
            account_service,
            mood_log_service,
            export_service,
        })
    }
}
