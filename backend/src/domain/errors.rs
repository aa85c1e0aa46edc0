//! Error taxonomy surfaced to the presentation layer.
//!
//! Every variant is recoverable at the caller boundary: the UI shows a
//! message and keeps the user on the same form. Storage failures wrap the
//! underlying `anyhow::Error` from the repository layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    /// A required sign-up field was empty
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Sign-up username already present (case-sensitive exact match)
    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),

    /// Login username not in the directory
    #[error("unknown user '{0}'")]
    UnknownUser(String),

    /// Password digest did not match the stored hash
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Account directory unreadable, unwritable, or malformed
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum MoodLogError {
    /// Mood log unreadable, unwritable, or malformed
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
