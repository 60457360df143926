//! # Completion Feature
//!
//! Hosted model access behind the [`CompletionClient`] trait.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod client;
pub mod error;

pub use client::{CompletionClient, OpenAiClient};
pub use error::CompletionError;
