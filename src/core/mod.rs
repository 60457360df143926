//! # Core Module
//!
//! Configuration and reply chunking shared by the router and the transport.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add response module with Telegram message chunking utilities
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use response::{
    fit_telegram_limit, preview_for_log, split_message, DEFAULT_CHUNK_SIZE, LOG_PREVIEW_CHARS,
    TELEGRAM_MESSAGE_LIMIT,
};
