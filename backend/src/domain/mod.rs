pub mod account_service;
pub mod commands;
pub mod errors;
pub mod export_service;
pub mod models;
pub mod mood_log_service;

pub use account_service::AccountService;
pub use errors::{AccountError, MoodLogError};
pub use export_service::ExportService;
pub use mood_log_service::MoodLogService;
