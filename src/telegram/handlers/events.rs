//! Conversion of teloxide updates into registration events

use teloxide::types::{CallbackQuery, Message, PhotoSize, User};

use crate::core::types::{PhotoVariant, Sender};
use crate::registration::{CallbackEvent, Inbound};

/// Identity of a Telegram user, `None` if the id does not fit an `i64`.
pub fn sender_from_user(user: &User) -> Option<Sender> {
    let user_id = i64::try_from(user.id.0).ok()?;
    Some(Sender {
        user_id,
        username: user.username.clone(),
        full_name: user.full_name(),
    })
}

fn photo_variant(photo: &PhotoSize) -> PhotoVariant {
    PhotoVariant {
        file_id: photo.file.id.0.clone(),
        width: photo.width,
        height: photo.height,
    }
}

/// Classifies a non-command message by its content.
pub fn inbound_from_message(msg: &Message) -> Inbound {
    if let Some(contact) = msg.contact() {
        return Inbound::Contact {
            phone_number: contact.phone_number.clone(),
        };
    }

    if let Some(photos) = msg.photo() {
        return Inbound::Photo(photos.iter().map(photo_variant).collect());
    }

    match msg.text() {
        Some(text) => Inbound::Text(text.to_string()),
        None => Inbound::Other,
    }
}

/// Extracts the parts of a callback query the controller needs.
pub fn callback_event(q: &CallbackQuery) -> Option<CallbackEvent> {
    Some(CallbackEvent {
        id: q.id.0.clone(),
        from: sender_from_user(&q.from)?,
        data: q.data.clone(),
    })
}
