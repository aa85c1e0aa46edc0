use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Header row for every per-user mood log file.
pub const MOOD_LOG_HEADER: &str = "date,child,mood,note";

/// CsvConnection manages file paths and ensures backing files exist for
/// each user's data under one base directory.
///
/// Layout:
///
/// ```text
/// data/
/// ├── accounts.yaml        ← account directory (whole-file document)
/// └── {username}/
///     └── mood_log.csv     ← per-user append-only mood log
/// ```
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new CSV connection in the default data directory,
    /// `~/Documents/Mood Tracker`.
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir).join("Documents").join("Mood Tracker");
        info!("Using default data directory: {}", data_dir.display());

        Self::new(data_dir)
    }

    /// Generate a safe filesystem identifier from a username.
    /// Converts "Child #1" -> "Child_1", "José" -> "Jos_", etc.
    ///
    /// Case is preserved: usernames are case-sensitive keys, so "Bob" and
    /// "bob" must resolve to distinct directories.
    pub fn generate_safe_directory_name(username: &str) -> String {
        let mapped = username
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect::<String>();

        // Collapse consecutive underscores into single underscores
        let mut collapsed = String::new();
        let mut last_was_underscore = false;
        for c in mapped.chars() {
            if c == '_' {
                if !last_was_underscore {
                    collapsed.push('_');
                }
                last_was_underscore = true;
            } else {
                collapsed.push(c);
                last_was_underscore = false;
            }
        }

        collapsed.trim_matches('_').to_string()
    }

    /// Get the directory path holding a user's data
    pub fn get_user_directory(&self, username: &str) -> PathBuf {
        self.base_directory
            .join(Self::generate_safe_directory_name(username))
    }

    /// Get the file path for a user's mood log
    pub fn get_mood_log_path(&self, username: &str) -> PathBuf {
        self.get_user_directory(username).join("mood_log.csv")
    }

    /// Get the file path of the account directory document
    pub fn get_accounts_file_path(&self) -> PathBuf {
        self.base_directory.join("accounts.yaml")
    }

    /// Ensure a mood log file exists with its header for the given user.
    /// Idempotent.
    pub fn ensure_mood_log_file_exists(&self, username: &str) -> Result<()> {
        let user_dir = self.get_user_directory(username);

        if !user_dir.exists() {
            fs::create_dir_all(&user_dir)?;
            info!("Created user directory: {}", user_dir.display());
        }

        let file_path = user_dir.join("mood_log.csv");
        if !file_path.exists() {
            fs::write(&file_path, format!("{}\n", MOOD_LOG_HEADER))?;
            info!("Created mood log for '{}': {}", username, file_path.display());
        }

        Ok(())
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_safe_directory_name() {
        assert_eq!(CsvConnection::generate_safe_directory_name("alice"), "alice");
        assert_eq!(CsvConnection::generate_safe_directory_name("Kid #1"), "Kid_1");
        assert_eq!(CsvConnection::generate_safe_directory_name("a  b"), "a_b");
        assert_eq!(CsvConnection::generate_safe_directory_name("__x__"), "x");
        // Case-sensitive usernames map to distinct directories
        assert_ne!(
            CsvConnection::generate_safe_directory_name("Bob"),
            CsvConnection::generate_safe_directory_name("bob")
        );
    }

    #[test]
    fn test_ensure_mood_log_file_is_idempotent() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;

        connection.ensure_mood_log_file_exists("alice")?;
        let path = connection.get_mood_log_path("alice");
        assert!(path.exists());

        // Write something, then ensure again: content must survive
        std::fs::write(&path, format!("{}\nrow\n", MOOD_LOG_HEADER))?;
        connection.ensure_mood_log_file_exists("alice")?;
        let content = std::fs::read_to_string(&path)?;
        assert!(content.contains("row"));

        Ok(())
    }

    #[test]
    fn test_new_creates_base_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested = temp_dir.path().join("deep").join("data");
        let connection = CsvConnection::new(&nested)?;
        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
        Ok(())
    }
}
