//! Preference storage and logging setup.

pub mod config;
pub mod logger;
