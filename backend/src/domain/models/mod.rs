pub mod account;
pub mod mood_entry;
