//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for handler dispatch

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::CommandHandler;

/// Registry mapping command names to handlers
///
/// Several names may share one handler, as the mode-switch commands do.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in handler
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for handler in super::handlers::create_all_handlers() {
            registry.register(handler);
        }
        registry
    }

    /// Register a handler under all of its `command_names()`
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(*name, Arc::clone(&handler));
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names, not unique handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered names, sorted
    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::CommandContext;
    use crate::commands::event::CommandInvocation;
    use anyhow::Result;
    use async_trait::async_trait;

    struct MockHandler {
        names: &'static [&'static str],
    }

    #[async_trait]
    impl CommandHandler for MockHandler {
        fn command_names(&self) -> &'static [&'static str] {
            self.names
        }

        async fn handle(
            &self,
            _ctx: &CommandContext,
            _invocation: &CommandInvocation,
        ) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_register_multiple_names() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler {
            names: &["analyze", "review", "faq"],
        }));

        assert_eq!(registry.len(), 3);
        assert!(registry.contains("review"));
        assert!(registry.get("faq").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_defaults_cover_every_bot_command() {
        let registry = CommandRegistry::with_defaults();
        assert_eq!(
            registry.command_names(),
            vec!["analyze", "faq", "help", "review", "start"]
        );
    }
}
