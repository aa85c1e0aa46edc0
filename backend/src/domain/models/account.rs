use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model for a user account.
///
/// `password_hash` is the fixed-width hex digest of the password, never the
/// plaintext. Accounts are created on sign-up and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The authenticated identity a caller holds after a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub display_name: String,
}

impl From<&Account> for Session {
    fn from(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            display_name: account.display_name.clone(),
        }
    }
}
