//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::events::{callback_event, inbound_from_message, sender_from_user};
use super::types::{HandlerDeps, HandlerError};
use crate::registration::Inbound;
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same tree is used in production and in integration tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        // Commands must be matched before plain text
        .branch(command_handler(deps_commands))
        .branch(message_handler(deps_messages))
        .branch(callback_handler(deps_callback))
}

/// Handler for /start and /cancel
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                let event = match cmd {
                    Command::Start => Inbound::Start,
                    Command::Cancel => Inbound::Cancel,
                };
                dispatch_message(&deps, &msg, event).await
            }
        },
    ))
}

/// Handler for every other private message: text, contacts, photos
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |msg: Message| {
        let deps = deps.clone();
        async move {
            let event = inbound_from_message(&msg);
            dispatch_message(&deps, &msg, event).await
        }
    })
}

/// Handler for the admin approval button
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |q: CallbackQuery| {
        let deps = deps.clone();
        async move { dispatch_callback(&deps, &q).await }
    })
}

async fn dispatch_message(deps: &HandlerDeps, msg: &Message, event: Inbound) -> Result<(), HandlerError> {
    // Channel posts and anonymous admins have no sender to key a session on
    let Some(sender) = msg.from.as_ref().and_then(sender_from_user) else {
        log::debug!("Ignoring message without sender in chat {}", msg.chat.id);
        return Ok(());
    };

    deps.controller.handle_message(msg.chat.id, &sender, event).await?;
    Ok(())
}

async fn dispatch_callback(deps: &HandlerDeps, q: &CallbackQuery) -> Result<(), HandlerError> {
    let Some(event) = callback_event(q) else {
        log::warn!("Ignoring callback query {} with unusable sender", q.id.0);
        return Ok(());
    };

    deps.controller.handle_callback(event).await?;
    Ok(())
}
