//! # Telegram Transport
//!
//! Long-polling adapter: converts teloxide messages into [`InboundEvent`]s, runs them
//! through the [`Router`] and sends each reply as a separate message, in order.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Bot username from `getMe`; segments re-split to Telegram's UTF-16 limit
//! - 1.0.0: Initial long-polling transport

use log::{debug, info, warn};
use std::sync::Arc;
use teloxide::{
    dispatching::{Dispatcher, UpdateFilterExt},
    dptree,
    payloads::SendMessageSetters,
    prelude::*,
    types::{BotCommand, ChatAction, Message, ReplyParameters, Update},
    Bot,
};

use crate::commands::{InboundEvent, Route, Router};
use crate::core::fit_telegram_limit;
use crate::features::modes::Mode;

/// Commands advertised in the Telegram client menu
pub fn bot_commands() -> Vec<BotCommand> {
    let mut commands = vec![
        BotCommand::new("start", "приветствие и подсказки"),
        BotCommand::new("help", "краткая справка"),
    ];
    commands.extend(Mode::ALL.into_iter().map(|mode| {
        let description = match mode {
            Mode::Analyze => "анализ конкурентов и оптимизация карточек",
            Mode::Review => "ответы на отзывы (3 стиля)",
            Mode::Faq => "ответы на вопросы покупателей (кратко)",
        };
        BotCommand::new(mode.command(), description)
    }));
    commands
}

/// Register the command menu. Failure only affects client-side autocompletion.
pub async fn register_commands(bot: &Bot) {
    match bot.set_my_commands(bot_commands()).await {
        Ok(_) => info!("Registered {} bot commands", bot_commands().len()),
        Err(e) => warn!("Failed to register bot commands: {e}"),
    }
}

/// Event for a Telegram message, `None` when it has no human sender
pub fn to_inbound_event(msg: &Message) -> Option<InboundEvent> {
    let user = msg.from.as_ref()?;
    if user.is_bot {
        return None;
    }
    Some(InboundEvent {
        user_id: user.id.0,
        text: msg.text().map(str::to_string),
    })
}

/// Messages to send for the router's replies, in order.
///
/// Empty segments are dropped because Telegram rejects them. Anything over the UTF-16
/// limit is split further.
pub fn outgoing_messages(replies: &[String]) -> Vec<String> {
    replies
        .iter()
        .filter(|reply| !reply.is_empty())
        .flat_map(|reply| fit_telegram_limit(reply))
        .collect()
}

/// Run the dispatcher until Ctrl-C
pub async fn run(bot: Bot, router: Router) {
    register_commands(&bot).await;

    let username = match bot.get_me().await {
        Ok(me) => me.user.username.clone(),
        Err(e) => {
            warn!("Failed to fetch bot username, accepting commands for any @name: {e}");
            None
        }
    };
    if let Some(name) = &username {
        info!("Running as @{name}");
    }

    let router = Arc::new(router.with_bot_username(username));
    info!("Bot started (long polling)");

    Dispatcher::builder(bot, Update::filter_message().endpoint(handle_message))
        .dependencies(dptree::deps![router])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
}

async fn handle_message(bot: Bot, msg: Message, router: Arc<Router>) -> ResponseResult<()> {
    let Some(event) = to_inbound_event(&msg) else {
        return Ok(());
    };

    if matches!(router.route(&event), Route::Chat(_)) {
        if let Err(e) = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await {
            warn!("Failed to send typing indicator to chat {}: {e}", msg.chat.id);
        }
    }

    let replies = router.handle(&event).await;
    let messages = outgoing_messages(&replies);
    if messages.len() != replies.len() {
        debug!(
            "Sending {} messages for {} reply chunks to user {}",
            messages.len(),
            replies.len(),
            event.user_id
        );
    }
    for text in messages {
        bot.send_message(msg.chat.id, text)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(value: serde_json::Value) -> Message {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    #[test]
    fn test_bot_commands_match_router() {
        let names: Vec<String> = bot_commands().into_iter().map(|c| c.command).collect();
        assert_eq!(names, vec!["start", "help", "analyze", "review", "faq"]);
    }

    #[test]
    fn test_text_message_to_event() {
        let msg = message(json!({
            "message_id": 10,
            "date": 1_700_000_000,
            "chat": {"id": 4242, "type": "private", "first_name": "Ann"},
            "from": {"id": 4242, "is_bot": false, "first_name": "Ann"},
            "text": "Отзыв: \"плохая доставка\""
        }));
        let event = to_inbound_event(&msg).unwrap();
        assert_eq!(event, InboundEvent::text(4242, "Отзыв: \"плохая доставка\""));
    }

    #[test]
    fn test_photo_message_has_no_text() {
        let msg = message(json!({
            "message_id": 11,
            "date": 1_700_000_000,
            "chat": {"id": 4242, "type": "private", "first_name": "Ann"},
            "from": {"id": 4242, "is_bot": false, "first_name": "Ann"},
            "photo": [{"file_id": "AgAD", "file_unique_id": "AQAD", "width": 90, "height": 90, "file_size": 1024}]
        }));
        let event = to_inbound_event(&msg).unwrap();
        assert_eq!(event, InboundEvent::non_text(4242));
    }

    #[test]
    fn test_bot_sender_is_dropped() {
        let msg = message(json!({
            "message_id": 12,
            "date": 1_700_000_000,
            "chat": {"id": -100, "type": "group", "title": "Sellers"},
            "from": {"id": 7, "is_bot": true, "first_name": "OtherBot"},
            "text": "/start"
        }));
        assert!(to_inbound_event(&msg).is_none());
    }

    #[test]
    fn test_outgoing_messages_skip_empty_chunks() {
        assert!(outgoing_messages(&[String::new()]).is_empty());
        assert_eq!(
            outgoing_messages(&["a".to_string(), String::new(), "b".to_string()]),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_outgoing_messages_respect_utf16_limit() {
        // 3200 chars is a valid chunk size, but emoji take two UTF-16 units each
        let emoji_chunk = "💡".repeat(3200);
        let replies = vec![emoji_chunk.clone(), "Итог".to_string()];

        let messages = outgoing_messages(&replies);

        assert_eq!(messages.len(), 3);
        assert!(messages
            .iter()
            .all(|m| m.encode_utf16().count() <= crate::core::TELEGRAM_MESSAGE_LIMIT));
        assert_eq!(messages.concat(), format!("{emoji_chunk}Итог"));
    }
}
