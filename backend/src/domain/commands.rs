//! Domain-level command and query types.
//! These structs are used by services inside the domain layer and are
//! **not** exposed over the public API. The presentation layer is
//! responsible for mapping the public DTOs defined in the `shared` crate
//! to these internal types.

pub mod account {
    use crate::domain::models::account::{Account, Session};

    /// Input for creating a new account.
    #[derive(Debug, Clone)]
    pub struct SignUpCommand {
        pub display_name: String,
        pub username: String,
        pub password: String,
    }

    /// Result of a successful sign-up.
    #[derive(Debug, Clone)]
    pub struct SignUpResult {
        pub account: Account,
    }

    /// Input for authenticating a user.
    #[derive(Debug, Clone)]
    pub struct LogInCommand {
        pub username: String,
        pub password: String,
    }

    /// Result of a successful login; the caller holds the session.
    #[derive(Debug, Clone)]
    pub struct LogInResult {
        pub session: Session,
    }
}

pub mod mood {
    use crate::domain::models::mood_entry::MoodEntry;

    /// Input for logging one mood check-in.
    #[derive(Debug, Clone)]
    pub struct CheckInCommand {
        /// Authenticated user the log is scoped to
        pub username: String,
        /// Which child/profile is checking in
        pub child: String,
        /// Selected mood label
        pub mood: String,
        /// Optional free-text note
        pub note: Option<String>,
    }

    /// Result of logging a check-in.
    #[derive(Debug, Clone)]
    pub struct CheckInResult {
        pub entry: MoodEntry,
    }
}
