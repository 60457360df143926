//! # Features
//!
//! - **completion**: hosted model client
//! - **modes**: per-user persona selection and instructions

pub mod completion;
pub mod modes;

pub use completion::{CompletionClient, CompletionError, OpenAiClient};
pub use modes::{Mode, ModeStore, PromptBuilder};
