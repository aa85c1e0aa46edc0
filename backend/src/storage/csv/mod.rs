//! # CSV Storage Module
//!
//! File-based storage for the mood tracker. The account directory is one
//! YAML document at the root of the data directory; each user's mood log
//! is a CSV file in their own subdirectory.
//!
//! ## File Format
//!
//! Mood log files have the following structure:
//! ```csv
//! date,child,mood,note
//! 2025-03-01T14:02:11+00:00,Child A,😄 Happy,great day at school
//! 2025-03-02T09:15:40+00:00,Child A,😢 Sad,
//! ```
//!
//! Every mutation is a whole-file read-modify-write; see DESIGN.md for the
//! single-writer assumption this relies on.

pub mod account_repository;
pub mod connection;
pub mod mood_log_repository;

#[cfg(test)]
pub mod test_utils;

pub use account_repository::AccountRepository;
pub use connection::CsvConnection;
pub use mood_log_repository::MoodLogRepository;
