//! Environment-driven configuration
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Add SYSTEM_PROMPT_PATH override and MESSAGE_CHUNK_SIZE bounds check
//! - 1.0.0: Initial release with OpenAI and Telegram settings

use anyhow::{anyhow, Context, Result};
use log::warn;
use std::env;
use std::path::PathBuf;

use super::response::{DEFAULT_CHUNK_SIZE, TELEGRAM_MESSAGE_LIMIT};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 45;

#[derive(Debug, Clone)]
pub struct Config {
    /// Empty when `OPENAI_API_KEY` is unset
    pub openai_api_key: String,
    /// Empty when `TELEGRAM_BOT_TOKEN` is unset
    pub telegram_bot_token: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub openai_timeout_secs: u64,
    pub chunk_size: usize,
    pub system_prompt_path: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Missing secrets are not an error here; see [`Config::missing_secrets`].
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let openai_timeout_secs = match get("OPENAI_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("OPENAI_TIMEOUT_SECS must be a number, got {raw:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if openai_timeout_secs == 0 {
            return Err(anyhow!("OPENAI_TIMEOUT_SECS must be greater than zero"));
        }

        let chunk_size = match get("MESSAGE_CHUNK_SIZE") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("MESSAGE_CHUNK_SIZE must be a number, got {raw:?}"))?,
            None => DEFAULT_CHUNK_SIZE,
        };
        // Counted in chars; the transport re-splits by UTF-16 units before sending
        if chunk_size == 0 || chunk_size > TELEGRAM_MESSAGE_LIMIT {
            return Err(anyhow!(
                "MESSAGE_CHUNK_SIZE must be between 1 and {TELEGRAM_MESSAGE_LIMIT}, got {chunk_size}"
            ));
        }

        Ok(Self {
            openai_api_key: get("OPENAI_API_KEY").unwrap_or_default(),
            telegram_bot_token: get("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            openai_timeout_secs,
            chunk_size,
            system_prompt_path: get("SYSTEM_PROMPT_PATH").map(PathBuf::from),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Names of required secrets that are not set
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openai_api_key.is_empty() {
            missing.push("OPENAI_API_KEY");
        }
        if self.telegram_bot_token.is_empty() {
            missing.push("TELEGRAM_BOT_TOKEN");
        }
        missing
    }

    /// Log a warning for each missing secret.
    ///
    /// Must run after the logger is initialised or the warnings are lost.
    pub fn warn_missing_secrets(&self) {
        for name in self.missing_secrets() {
            warn!("{name} is not set - check your environment variables!");
        }
    }

    /// Fail when any required secret is missing
    pub fn ensure_secrets(&self) -> Result<()> {
        let missing = self.missing_secrets();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(anyhow!(
                "Missing required environment variables: {}",
                missing.join(", ")
            ))
        }
    }

    /// Load the base persona override, if one is configured
    pub fn load_system_prompt(&self) -> Result<Option<String>> {
        match &self.system_prompt_path {
            Some(path) => {
                let text = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read SYSTEM_PROMPT_PATH {}", path.display())
                })?;
                let text = text.trim().to_string();
                if text.is_empty() {
                    return Err(anyhow!("SYSTEM_PROMPT_PATH {} is empty", path.display()));
                }
                Ok(Some(text))
            }
            None => Ok(None),
        }
    }
}
