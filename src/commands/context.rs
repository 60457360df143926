//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation with mode store and completion client

use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::DEFAULT_CHUNK_SIZE;
use crate::features::completion::{CompletionClient, CompletionError};
use crate::features::modes::{ModeStore, PromptBuilder};

/// Shared context for all command handlers
///
/// Contains the services handlers need:
/// - ModeStore for per-user persona selection
/// - CompletionClient for model calls
/// - Optional preamble override and reply chunk size
#[derive(Clone)]
pub struct CommandContext {
    pub mode_store: ModeStore,
    pub completion: Arc<dyn CompletionClient>,
    pub base_prompt: Option<String>,
    pub chunk_size: usize,
}

impl CommandContext {
    pub fn new(mode_store: ModeStore, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            mode_store,
            completion,
            base_prompt: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_base_prompt(mut self, base_prompt: Option<String>) -> Self {
        self.base_prompt = base_prompt;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Instructions for the user's current mode
    pub fn instructions_for(&self, user_id: u64) -> String {
        PromptBuilder::for_user(&self.mode_store, user_id)
            .with_base(self.base_prompt.as_deref())
            .build()
    }

    /// One completion call for a user turn
    pub async fn get_ai_response(
        &self,
        instructions: &str,
        user_message: &str,
        request_id: Uuid,
    ) -> Result<String, CompletionError> {
        debug!(
            "[{request_id}] Sending completion request | Instructions: {} chars",
            instructions.len()
        );
        self.completion.complete(instructions, user_message).await
    }
}
