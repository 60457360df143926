//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod chat;
pub mod mode;
pub mod utility;

use std::sync::Arc;

use super::handler::CommandHandler;

pub use chat::ChatHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn CommandHandler>> {
    vec![Arc::new(utility::UtilityHandler), Arc::new(mode::ModeHandler)]
}
