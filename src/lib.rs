//! Zegju - Telegram registration bot
//!
//! Walks a user through language choice, contact sharing, password entry
//! and a payment screenshot, then forwards the submission to administrators
//! who can activate the account with one button.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors, logging and domain types
//! - `i18n`: Fluent translations for English and Amharic
//! - `registration`: Conversation state machine and its controller
//! - `storage`: Per-user session storage
//! - `telegram`: Telegram bot integration and handlers

pub mod core;
pub mod i18n;
pub mod registration;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use self::core::{config, AppError, AppResult, Config};
pub use registration::RegistrationController;
pub use storage::{InMemorySessionStore, SessionStore};
pub use telegram::{schema, HandlerDeps, Messenger, TeloxideMessenger};
