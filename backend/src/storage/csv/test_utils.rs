/// Test utilities module for automatic cleanup and consistent test
/// infrastructure.
///
/// Provides RAII-based cleanup that guarantees test data is removed even if
/// tests panic or fail.

use anyhow::Result;
use chrono::Utc;
use tempfile::TempDir;

use super::account_repository::AccountRepository;
use super::connection::CsvConnection;
use super::mood_log_repository::MoodLogRepository;
use crate::domain::models::account::Account as DomainAccount;
use crate::storage::traits::AccountStorage;

/// Test environment holding a temporary data directory and a connection.
/// The directory is removed when the environment is dropped.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Test helper bundling repository instances over one environment
pub struct TestHelper {
    pub env: TestEnvironment,
    pub account_repo: AccountRepository,
    pub mood_log_repo: MoodLogRepository,
}

impl TestHelper {
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let account_repo = AccountRepository::new(env.connection.clone());
        let mood_log_repo = MoodLogRepository::new(env.connection.clone());

        Ok(Self {
            env,
            account_repo,
            mood_log_repo,
        })
    }

    /// Create a stored account with a throwaway hash
    pub fn create_test_account(&self, username: &str) -> Result<DomainAccount> {
        let account = DomainAccount {
            username: username.to_string(),
            display_name: format!("{} Test", username),
            password_hash: "0f".repeat(32),
            created_at: Utc::now(),
        };
        self.account_repo.store_account(&account)?;
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }

    #[test]
    fn test_helper_creates_accounts() -> Result<()> {
        let helper = TestHelper::new()?;
        let account = helper.create_test_account("alice")?;
        assert_eq!(account.username, "alice");
        assert!(helper.account_repo.get_account("alice")?.is_some());
        Ok(())
    }
}
