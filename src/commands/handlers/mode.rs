//! Mode switch command handlers
//!
//! Handles: analyze, review, faq
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::info;

use crate::commands::context::CommandContext;
use crate::commands::event::CommandInvocation;
use crate::commands::handler::CommandHandler;
use crate::features::modes::Mode;

/// One handler for all three mode commands
pub struct ModeHandler;

#[async_trait]
impl CommandHandler for ModeHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["analyze", "review", "faq"]
    }

    async fn handle(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Vec<String>> {
        let mode = Mode::from_command(&invocation.name)
            .ok_or_else(|| anyhow!("Not a mode command: {}", invocation.name))?;

        ctx.mode_store.set(invocation.user_id, mode);
        info!("User {} switched to mode {mode}", invocation.user_id);

        Ok(vec![confirmation(mode)])
    }
}

/// Reply shown after a mode switch, doubles as an input template
pub fn confirmation(mode: Mode) -> String {
    format!("Готово! Режим: {}.\n\n{}", mode.display_name(), mode.hint())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_handler_commands() {
        let names = ModeHandler.command_names();
        assert_eq!(names.len(), Mode::ALL.len());
        for mode in Mode::ALL {
            assert!(names.contains(&mode.command()));
        }
    }

    #[test]
    fn test_confirmation_names_mode_and_hint() {
        let text = confirmation(Mode::Review);
        assert!(text.starts_with("Готово! Режим: ОТЗЫВЫ.\n\n"));
        assert!(text.ends_with(Mode::Review.hint()));
    }
}
