//! Transport-neutral inbound events and command parsing
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Commands addressed to another bot's `@username` are ignored
//! - 1.0.0: Initial release

/// One inbound update from the messaging transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub user_id: u64,
    /// `None` for updates without text (photos, stickers, ...)
    pub text: Option<String>,
}

impl InboundEvent {
    pub fn text(user_id: u64, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: Some(text.into()),
        }
    }

    pub fn non_text(user_id: u64) -> Self {
        Self {
            user_id,
            text: None,
        }
    }
}

/// A parsed `/command` addressed to the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub user_id: u64,
    /// Lower-cased, without the slash or `@botname` suffix
    pub name: String,
}

/// What the router should do with an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Ignore,
    Command(CommandInvocation),
    /// Free text for the completion model, already trimmed
    Chat(String),
}

impl Route {
    /// Classify an event for a bot named `bot_username`.
    ///
    /// A command carrying an `@name` suffix for a different bot is ignored, like any
    /// other command. With no known username every suffix is accepted.
    pub fn classify(event: &InboundEvent, bot_username: Option<&str>) -> Route {
        let Some(text) = event.text.as_deref() else {
            return Route::Ignore;
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Route::Ignore;
        }

        match parse_command(trimmed) {
            Some((_, Some(target)))
                if bot_username.is_some_and(|me| !me.eq_ignore_ascii_case(target)) =>
            {
                Route::Ignore
            }
            Some((name, _)) => Route::Command(CommandInvocation {
                user_id: event.user_id,
                name,
            }),
            None => Route::Chat(trimmed.to_string()),
        }
    }
}

/// Split `/name@bot args` into `("name", Some("bot"))`. Arguments are dropped.
///
/// Returns `None` when the text is not a command. A bare `/` is not a command.
fn parse_command(text: &str) -> Option<(String, Option<&str>)> {
    let rest = text.strip_prefix('/')?;
    let token = rest.split(char::is_whitespace).next().unwrap_or_default();
    let (name, target) = match token.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (token, None),
    };
    if name.is_empty() {
        return None;
    }
    Some((name.to_lowercase(), target))
}
