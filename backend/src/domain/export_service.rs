//! Export service for the download affordance.
//!
//! Renders a user's full mood log as CSV text in the same column format as
//! the persisted file, plus a suggested filename. The UI only handles the
//! actual file dialog / download.

use anyhow::Result;
use chrono::Utc;
use log::info;

use shared::ExportDataResponse;

use crate::domain::errors::MoodLogError;
use crate::domain::mood_log_service::MoodLogService;

/// Stateless service assembling CSV exports
#[derive(Clone)]
pub struct ExportService {}

impl ExportService {
    pub fn new() -> Self {
        Self {}
    }

    /// Export a user's full mood log as CSV data.
    /// An empty log yields header-only content.
    pub fn export_mood_log(
        &self,
        username: &str,
        mood_log_service: &MoodLogService,
    ) -> Result<ExportDataResponse, MoodLogError> {
        info!("Exporting mood log for user '{}'", username);

        let entries = mood_log_service.entries(username)?;

        let mut csv_writer = csv::Writer::from_writer(Vec::new());
        csv_writer
            .write_record(["date", "child", "mood", "note"])
            .map_err(anyhow::Error::from)?;
        for entry in &entries {
            csv_writer
                .write_record([
                    &entry.date.to_rfc3339(),
                    &entry.child,
                    &entry.mood,
                    &entry.note,
                ])
                .map_err(anyhow::Error::from)?;
        }

        let bytes = csv_writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV export: {}", e))?;
        let csv_content = String::from_utf8(bytes).map_err(anyhow::Error::from)?;

        let filename = format!("mood_log_{}_{}.csv", username, Utc::now().format("%Y-%m-%d"));

        info!("Export ready: {} ({} entries)", filename, entries.len());
        Ok(ExportDataResponse {
            filename,
            csv_content,
        })
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::mood::CheckInCommand;
    use crate::storage::csv::test_utils::TestEnvironment;

    #[test]
    fn test_export_matches_persisted_columns() -> Result<()> {
        let env = TestEnvironment::new()?;
        let mood_log_service = MoodLogService::new(env.connection.clone());
        let export_service = ExportService::new();

        mood_log_service
            .check_in(CheckInCommand {
                username: "alice".to_string(),
                child: "Child A".to_string(),
                mood: "😄 Happy".to_string(),
                note: Some("sunny".to_string()),
            })
            .unwrap();

        let export = export_service
            .export_mood_log("alice", &mood_log_service)
            .unwrap();

        let mut lines = export.csv_content.lines();
        assert_eq!(lines.next(), Some("date,child,mood,note"));
        let row = lines.next().unwrap();
        assert!(row.contains("Child A"));
        assert!(row.contains("😄 Happy"));
        assert!(row.contains("sunny"));
        assert!(lines.next().is_none());

        assert!(export.filename.starts_with("mood_log_alice_"));
        assert!(export.filename.ends_with(".csv"));
        Ok(())
    }

    #[test]
    fn test_export_of_empty_log_is_header_only() -> Result<()> {
        let env = TestEnvironment::new()?;
        let mood_log_service = MoodLogService::new(env.connection.clone());
        let export_service = ExportService::new();

        let export = export_service
            .export_mood_log("alice", &mood_log_service)
            .unwrap();
        assert_eq!(export.csv_content.trim_end(), "date,child,mood,note");
        Ok(())
    }
}
