// Core layer - configuration and reply chunking
pub mod core;

// Features layer - completion client and modes
pub mod features;

// Application layer
pub mod commands;

// Transport layer - Telegram adapter
pub mod telegram;

pub use crate::core::Config;
pub use crate::commands::{CommandContext, InboundEvent, Router};
pub use crate::features::{CompletionClient, CompletionError, Mode, ModeStore, OpenAiClient};
