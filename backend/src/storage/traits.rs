//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against
//! different backends (YAML/CSV files today, a key-value store tomorrow)
//! without modification. All operations are synchronous: the execution
//! model is a single sequential caller doing local file I/O.

use anyhow::Result;
use crate::domain::models::account::Account as DomainAccount;
use crate::domain::models::mood_entry::MoodEntry as DomainMoodEntry;

/// Interface for account directory operations.
pub trait AccountStorage: Send + Sync {
    /// Ensure the backing account document exists, creating it with an
    /// empty mapping if absent. Idempotent.
    fn initialize(&self) -> Result<()>;

    /// Retrieve an account by username (case-sensitive exact match)
    fn get_account(&self, username: &str) -> Result<Option<DomainAccount>>;

    /// Insert a new account and persist the full mapping.
    /// The caller is responsible for duplicate checking.
    fn store_account(&self, account: &DomainAccount) -> Result<()>;

    /// List all accounts ordered by username
    fn list_accounts(&self) -> Result<Vec<DomainAccount>>;
}

/// Interface for per-user mood log operations.
pub trait MoodLogStorage: Send + Sync {
    /// Idempotent creation of an empty log (header only) for the user
    fn ensure_log(&self, username: &str) -> Result<()>;

    /// Append one entry to the user's log and persist
    fn append_entry(&self, username: &str, entry: &DomainMoodEntry) -> Result<()>;

    /// Read the full log in insertion order.
    /// Returns an empty vec if no log exists yet; never errors for "no log".
    fn read_entries(&self, username: &str) -> Result<Vec<DomainMoodEntry>>;
}
