use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;
use teloxide::Bot;

use seller_assistant::commands::{CommandContext, Router};
use seller_assistant::core::Config;
use seller_assistant::features::completion::OpenAiClient;
use seller_assistant::features::modes::ModeStore;
use seller_assistant::telegram;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting seller assistant bot...");

    config.warn_missing_secrets();
    if let Err(e) = config.ensure_secrets() {
        error!("{e}");
        return Err(e);
    }

    let base_prompt = config.load_system_prompt()?;
    if let Some(path) = &config.system_prompt_path {
        info!("Using persona preamble from {}", path.display());
    }

    let completion = OpenAiClient::from_config(&config)?;
    info!(
        "Model: {} | Timeout: {}s | Chunk size: {}",
        completion.model(),
        config.openai_timeout_secs,
        config.chunk_size
    );

    let ctx = CommandContext::new(ModeStore::new(), Arc::new(completion))
        .with_base_prompt(base_prompt)
        .with_chunk_size(config.chunk_size);
    let router = Router::new(ctx);

    let bot = Bot::new(config.telegram_bot_token.clone());
    telegram::run(bot, router).await;

    Ok(())
}
