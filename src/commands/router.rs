//! Inbound event dispatch
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Knows its bot username so group commands for other bots are skipped
//! - 1.0.0: Transport-free router returning the replies to send

use log::{debug, error};

use super::context::CommandContext;
use super::event::{InboundEvent, Route};
use super::handlers::ChatHandler;
use super::registry::CommandRegistry;

/// Turns inbound events into outbound replies.
///
/// The router never touches the transport, so it can be driven directly in tests.
#[derive(Clone)]
pub struct Router {
    ctx: CommandContext,
    registry: CommandRegistry,
    bot_username: Option<String>,
}

impl Router {
    pub fn new(ctx: CommandContext) -> Self {
        Self {
            ctx,
            registry: CommandRegistry::with_defaults(),
            bot_username: None,
        }
    }

    /// Only answer `/command@name` when `name` is this bot
    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    pub fn context(&self) -> &CommandContext {
        &self.ctx
    }

    pub fn route(&self, event: &InboundEvent) -> Route {
        Route::classify(event, self.bot_username.as_deref())
    }

    /// Replies for one event, in send order. Empty means "say nothing".
    pub async fn handle(&self, event: &InboundEvent) -> Vec<String> {
        match self.route(event) {
            Route::Ignore => Vec::new(),
            Route::Command(invocation) => match self.registry.get(&invocation.name) {
                Some(handler) => match handler.handle(&self.ctx, &invocation).await {
                    Ok(replies) => replies,
                    Err(e) => {
                        error!(
                            "Command /{} failed for user {}: {e:?}",
                            invocation.name, invocation.user_id
                        );
                        Vec::new()
                    }
                },
                None => {
                    debug!(
                        "Ignoring unknown command /{} from user {}",
                        invocation.name, invocation.user_id
                    );
                    Vec::new()
                }
            },
            Route::Chat(prompt) => ChatHandler::handle_text(&self.ctx, event.user_id, &prompt).await,
        }
    }
}
