//! Bot command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;

use super::context::CommandContext;
use super::event::CommandInvocation;

/// Trait for bot command handlers
///
/// Each command handler implements this trait to process one or more commands.
/// Handlers are registered with a CommandRegistry and dispatched based on command name.
/// They never talk to the transport; the returned strings are sent in order.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl CommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: &CommandContext,
///         invocation: &CommandInvocation,
///     ) -> Result<Vec<String>> {
///         Ok(vec!["Pong!".to_string()])
///     }
/// }
/// ```
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    ///
    /// A handler can process multiple commands if they share logic.
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the command and return the replies to send
    async fn handle(
        &self,
        ctx: &CommandContext,
        invocation: &CommandInvocation,
    ) -> Result<Vec<String>>;
}
