//! # Modes Feature
//!
//! Per-user persona selection and instruction building.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod manager;
pub mod prompt_builder;
pub mod store;

pub use manager::{base_prompt, Mode};
pub use prompt_builder::PromptBuilder;
pub use store::ModeStore;
