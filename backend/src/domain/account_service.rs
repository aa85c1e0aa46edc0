use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use sha2::{Digest, Sha256};

use crate::domain::commands::account::{LogInCommand, LogInResult, SignUpCommand, SignUpResult};
use crate::domain::errors::AccountError;
use crate::domain::models::account::{Account, Session};
use crate::storage::csv::{AccountRepository, CsvConnection};
use crate::storage::traits::AccountStorage;

/// Service for creating and verifying user credentials.
///
/// Passwords are stored as the unsalted SHA-256 hex digest of the raw
/// password bytes. Known weakness: without a per-user salt, equal passwords
/// produce equal hashes. Adding salt changes stored-hash compatibility, so
/// it belongs to a versioned data migration, not this service.
#[derive(Clone)]
pub struct AccountService {
    account_repository: AccountRepository,
}

impl AccountService {
    /// Create a new AccountService
    pub fn new(connection: CsvConnection) -> Self {
        let account_repository = AccountRepository::new(connection);
        Self { account_repository }
    }

    /// Ensure the account directory document exists. Idempotent.
    pub fn initialize(&self) -> Result<(), AccountError> {
        self.account_repository.initialize()?;
        Ok(())
    }

    /// One-way digest applied to a password: SHA-256 over the raw bytes,
    /// rendered as a fixed-width lowercase hex string.
    pub fn digest(password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Create a new account.
    ///
    /// Fails with `MissingField` if any field is empty after trimming, and
    /// with `DuplicateUsername` if the username is already taken
    /// (case-sensitive exact match). Persists the full directory document.
    pub fn sign_up(&self, command: SignUpCommand) -> Result<SignUpResult, AccountError> {
        info!("Sign-up requested for username '{}'", command.username);

        let display_name = command.display_name.trim();
        let username = command.username.trim();

        if display_name.is_empty() {
            return Err(AccountError::MissingField { field: "name" });
        }
        if username.is_empty() {
            return Err(AccountError::MissingField { field: "username" });
        }
        if command.password.is_empty() {
            return Err(AccountError::MissingField { field: "password" });
        }

        if self.account_repository.get_account(username)?.is_some() {
            warn!("Sign-up rejected, username '{}' already taken", username);
            return Err(AccountError::DuplicateUsername(username.to_string()));
        }

        let account = Account {
            username: username.to_string(),
            display_name: display_name.to_string(),
            password_hash: Self::digest(&command.password),
            created_at: Utc::now(),
        };

        self.account_repository.store_account(&account)?;
        info!("Created account '{}'", account.username);

        Ok(SignUpResult { account })
    }

    /// Authenticate a user and return the session descriptor the caller
    /// holds for the rest of the interaction. Read-only: neither success
    /// nor failure mutates the directory.
    pub fn log_in(&self, command: LogInCommand) -> Result<LogInResult, AccountError> {
        info!("Login attempt for username '{}'", command.username);

        let account = self
            .account_repository
            .get_account(&command.username)?
            .ok_or_else(|| {
                warn!("Login failed, unknown user '{}'", command.username);
                AccountError::UnknownUser(command.username.clone())
            })?;

        if Self::digest(&command.password) != account.password_hash {
            warn!("Login failed, bad password for '{}'", command.username);
            return Err(AccountError::InvalidCredentials);
        }

        info!("Login succeeded for '{}'", account.username);
        Ok(LogInResult {
            session: Session::from(&account),
        })
    }
}
