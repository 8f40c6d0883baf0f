//! Telegram bot handler tree configuration
//!
//! Incoming updates are converted into registration events and handed to the
//! controller. `tests/telegram_schema_test.rs` dispatches JSON-built updates
//! through this same tree.

mod events;
mod schema;
mod types;

pub use events::{callback_event, inbound_from_message, sender_from_user};
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
