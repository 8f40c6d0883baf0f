//! Reply and inline keyboards used by the registration flow

use teloxide::types::{ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

use crate::core::config::registration::{AMHARIC_LABEL, ENGLISH_LABEL};
use crate::core::types::Language;
use crate::i18n;
use crate::telegram::callback::CallbackPayload;

/// Two-button language choice
pub fn language_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(ENGLISH_LABEL),
        KeyboardButton::new(AMHARIC_LABEL),
    ]])
    .resize_keyboard()
}

/// Single button that shares the user's phone number
pub fn contact_keyboard(lang: Language) -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(i18n::t(lang, "contact-button")).request(ButtonRequest::Contact)
    ]])
    .resize_keyboard()
}

/// Approval button attached to a submission forwarded to admins
pub fn approval_keyboard(user_id: i64) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        i18n::t(Language::En, "approve-button"),
        CallbackPayload::Login { user_id }.to_string(),
    )]])
}
