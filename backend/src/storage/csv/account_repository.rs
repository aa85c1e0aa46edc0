//! # YAML Account Repository
//!
//! Stores the whole account directory as a single YAML document,
//! `accounts.yaml`, at the root of the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_format_version: "1.0"
//! accounts:
//!   alice:
//!     display_name: "Alice"
//!     password_hash: "2bb80d53..."
//!     created_at: "2025-03-01T14:02:11Z"
//! ```
//!
//! Every mutation rewrites the full document through a temp file + rename,
//! so a crash mid-write leaves the previous document intact.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

use super::connection::CsvConnection;
use crate::domain::models::account::Account as DomainAccount;
use crate::storage::traits::AccountStorage;

/// Intermediate struct for YAML serialization with string date fields
#[derive(Debug, Clone, Serialize, Deserialize)]
struct YamlAccount {
    display_name: String,
    password_hash: String,
    created_at: String,
}

/// On-disk shape of the account directory document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountsDocument {
    data_format_version: String,
    accounts: BTreeMap<String, YamlAccount>,
}

impl Default for AccountsDocument {
    fn default() -> Self {
        Self {
            data_format_version: "1.0".to_string(),
            accounts: BTreeMap::new(),
        }
    }
}

/// File-based account repository over one YAML document
#[derive(Clone)]
pub struct AccountRepository {
    connection: CsvConnection,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Load the account document, creating a default empty one if absent
    fn load_or_create_document(&self) -> Result<AccountsDocument> {
        let path = self.connection.get_accounts_file_path();

        if path.exists() {
            let yaml_content = fs::read_to_string(&path)?;
            let document: AccountsDocument = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Malformed account directory: {}", path.display()))?;
            debug!("Loaded {} accounts from {}", document.accounts.len(), path.display());
            Ok(document)
        } else {
            let document = AccountsDocument::default();
            self.save_document(&document)?;
            info!("Created empty account directory at {}", path.display());
            Ok(document)
        }
    }

    /// Save the full document to disk
    fn save_document(&self, document: &AccountsDocument) -> Result<()> {
        let path = self.connection.get_accounts_file_path();
        let yaml_content = serde_yaml::to_string(document)?;

        // Atomic write using temp file
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    fn to_domain(username: &str, yaml_account: &YamlAccount) -> Result<DomainAccount> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&yaml_account.created_at)
            .map_err(|e| anyhow::anyhow!("Failed to parse created_at: {}", e))?
            .with_timezone(&chrono::Utc);

        Ok(DomainAccount {
            username: username.to_string(),
            display_name: yaml_account.display_name.clone(),
            password_hash: yaml_account.password_hash.clone(),
            created_at,
        })
    }
}

impl AccountStorage for AccountRepository {
    fn initialize(&self) -> Result<()> {
        self.load_or_create_document()?;
        Ok(())
    }

    fn get_account(&self, username: &str) -> Result<Option<DomainAccount>> {
        let document = self.load_or_create_document()?;

        match document.accounts.get(username) {
            Some(yaml_account) => Ok(Some(Self::to_domain(username, yaml_account)?)),
            None => Ok(None),
        }
    }

    fn store_account(&self, account: &DomainAccount) -> Result<()> {
        let mut document = self.load_or_create_document()?;

        document.accounts.insert(
            account.username.clone(),
            YamlAccount {
                display_name: account.display_name.clone(),
                password_hash: account.password_hash.clone(),
                created_at: account.created_at.to_rfc3339(),
            },
        );

        self.save_document(&document)?;
        info!("Stored account '{}'", account.username);
        Ok(())
    }

    fn list_accounts(&self) -> Result<Vec<DomainAccount>> {
        let document = self.load_or_create_document()?;

        document
            .accounts
            .iter()
            .map(|(username, yaml_account)| Self::to_domain(username, yaml_account))
            .collect()
    }
}
