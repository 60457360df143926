//! System instruction construction
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Allow the preamble to be replaced from SYSTEM_PROMPT_PATH
//! - 1.0.0: Initial release

use super::{base_prompt, Mode, ModeStore};

/// Builder for the instructions sent alongside user input
///
/// # Example
///
/// ```ignore
/// let instructions = PromptBuilder::for_user(&store, user_id)
///     .with_base(config_override.as_deref())
///     .build();
/// ```
pub struct PromptBuilder<'a> {
    mode: Mode,
    base: Option<&'a str>,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(mode: Mode) -> Self {
        Self { mode, base: None }
    }

    /// Start from the user's current mode
    pub fn for_user(store: &ModeStore, user_id: u64) -> Self {
        Self::new(store.get(user_id))
    }

    /// Replace the built-in preamble; `None` keeps it
    pub fn with_base(mut self, base: Option<&'a str>) -> Self {
        self.base = base;
        self
    }

    pub fn build(self) -> String {
        let base = self.base.unwrap_or(base_prompt());
        format!("{base}\n{}", self.mode.hint())
    }
}
