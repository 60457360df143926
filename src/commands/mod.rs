//! # Command System
//!
//! Bot command and free-text dispatch, independent of the chat transport.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod context;
pub mod event;
pub mod handler;
pub mod handlers;
pub mod registry;
pub mod router;

pub use context::CommandContext;
pub use event::{CommandInvocation, InboundEvent, Route};
pub use handler::CommandHandler;
pub use registry::CommandRegistry;
pub use router::Router;
