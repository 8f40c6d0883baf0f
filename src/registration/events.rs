//! Transport-independent inbound events

use crate::core::types::{PhotoVariant, Sender};

/// Something a user sent to the bot in a chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// `/start`
    Start,
    /// `/cancel`
    Cancel,
    Text(String),
    Contact { phone_number: String },
    /// Resolution variants of one photo, as listed by Telegram
    Photo(Vec<PhotoVariant>),
    /// Stickers, documents, voice notes and the like
    Other,
}

/// Discriminant of [`Inbound`], used as the router's column key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    Cancel,
    Text,
    Contact,
    Photo,
    Other,
}

impl Inbound {
    pub fn kind(&self) -> EventKind {
        match self {
            Inbound::Start => EventKind::Start,
            Inbound::Cancel => EventKind::Cancel,
            Inbound::Text(_) => EventKind::Text,
            Inbound::Contact { .. } => EventKind::Contact,
            Inbound::Photo(_) => EventKind::Photo,
            Inbound::Other => EventKind::Other,
        }
    }
}

/// An inline-button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackEvent {
    /// Callback query id, needed to acknowledge the press
    pub id: String,
    pub from: Sender,
    pub data: Option<String>,
}
