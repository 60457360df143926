//! # Feature: Assistant Modes
//!
//! Three fixed personas for marketplace sellers: competitor analysis, review replies
//! and customer question answers. The shared preamble and each mode's hint block are
//! loaded from prompt/*.md files at compile time.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Added display names for mode-switch confirmations
//! - 1.0.0: Initial release with analyze, review and faq modes

use std::fmt;

const BASE_PROMPT: &str = include_str!("../../../prompt/base.md");
const ANALYZE_HINT: &str = include_str!("../../../prompt/analyze.md");
const REVIEW_HINT: &str = include_str!("../../../prompt/review.md");
const FAQ_HINT: &str = include_str!("../../../prompt/faq.md");

/// Built-in persona preamble shared by every mode
pub fn base_prompt() -> &'static str {
    BASE_PROMPT.trim()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Competitor analysis and listing optimisation
    #[default]
    Analyze,
    /// Replies to customer reviews
    Review,
    /// Short answers to customer questions
    Faq,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Analyze, Mode::Review, Mode::Faq];

    /// Bot command that switches to this mode (without the leading slash)
    pub fn command(self) -> &'static str {
        match self {
            Mode::Analyze => "analyze",
            Mode::Review => "review",
            Mode::Faq => "faq",
        }
    }

    /// Name shown to the user when the mode is switched
    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Analyze => "АНАЛИЗ",
            Mode::Review => "ОТЗЫВЫ",
            Mode::Faq => "ВОПРОСЫ",
        }
    }

    /// Mode-specific instruction block, also shown to the user as an input template
    pub fn hint(self) -> &'static str {
        let hint = match self {
            Mode::Analyze => ANALYZE_HINT,
            Mode::Review => REVIEW_HINT,
            Mode::Faq => FAQ_HINT,
        };
        hint.trim()
    }

    pub fn from_command(name: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|m| m.command() == name)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}
