//! Free-text chat turn
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use log::{error, info};
use std::time::Instant;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::core::{preview_for_log, split_message, LOG_PREVIEW_CHARS};
use crate::features::completion::CompletionError;

/// Handler for any non-command text
pub struct ChatHandler;

impl ChatHandler {
    /// Send the prompt to the model under the user's current mode.
    ///
    /// Always returns at least one reply. Completion failures become a
    /// user-visible error message and are logged here.
    pub async fn handle_text(ctx: &CommandContext, user_id: u64, prompt: &str) -> Vec<String> {
        let request_id = Uuid::new_v4();
        let start_time = Instant::now();
        let mode = ctx.mode_store.get(user_id);
        let instructions = ctx.instructions_for(user_id);

        info!(
            "[{request_id}] Request from {user_id} | Mode: {mode} | {}",
            preview_for_log(prompt, LOG_PREVIEW_CHARS)
        );

        let answer = match ctx.get_ai_response(&instructions, prompt, request_id).await {
            Ok(text) => {
                info!(
                    "[{request_id}] Response received | Time: {:?} | Length: {}",
                    start_time.elapsed(),
                    text.chars().count()
                );
                text
            }
            Err(e) => {
                error!("[{request_id}] Completion failed for user {user_id}: {e} ({e:?})");
                failure_message(&e)
            }
        };

        let chunks = split_message(&answer, ctx.chunk_size);
        if chunks.len() > 1 {
            info!("[{request_id}] Response split into {} chunks", chunks.len());
        }
        chunks
    }
}

/// User-facing text for a failed completion
pub fn failure_message(err: &CompletionError) -> String {
    format!("Упс, ошибка запроса: {err}")
}
