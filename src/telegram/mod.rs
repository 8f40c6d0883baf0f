//! Telegram bot integration and handlers

pub mod bot;
pub mod callback;
pub mod handlers;
pub mod keyboards;
pub mod messenger;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use callback::{CallbackPayload, CallbackPayloadError};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use messenger::{Messenger, OutgoingText, TeloxideMessenger};
