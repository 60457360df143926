//! Utility command handlers
//!
//! Handles: start, help
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::context::CommandContext;
use crate::commands::event::CommandInvocation;
use crate::commands::handler::CommandHandler;
use crate::features::modes::Mode;

pub const HELP_TEXT: &str = "Команды:\n\
/analyze — анализ конкурентов и оптимизация карточек\n\
/review — ответы на отзывы (3 стиля)\n\
/faq — ответы на вопросы покупателей (кратко)\n\
\n\
Примеры:\n\
• /analyze → вставь данные о конкурентах и своей карточке.\n\
• /review → вставь текст отзыва.\n\
• /faq → вставь вопрос покупателя.\n";

const GREETING: &str = "Привет! Я GPT-ассистент для продавцов WB/OZON.\n\n";

/// Handler for /start and /help
pub struct UtilityHandler;

#[async_trait]
impl CommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "help"]
    }

    async fn handle(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Vec<String>> {
        match invocation.name.as_str() {
            "start" => Ok(self.handle_start(ctx, invocation.user_id)),
            "help" => Ok(vec![HELP_TEXT.to_string()]),
            _ => Ok(Vec::new()),
        }
    }
}

impl UtilityHandler {
    /// /start resets the user to the default mode
    fn handle_start(&self, ctx: &CommandContext, user_id: u64) -> Vec<String> {
        let mode = Mode::default();
        ctx.mode_store.set(user_id, mode);
        info!("Start command from user {user_id} | Mode reset to {mode}");

        vec![format!(
            "{GREETING}{HELP_TEXT}\nСейчас включён режим: /{}.",
            mode.command()
        )]
    }
}
