//! Messenger double that records every outbound call
//!
//! Chats can be marked as failing; sends to them return the same error the
//! Bot API gives when a user has blocked the bot and are not recorded.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use teloxide::types::{ChatId, InlineKeyboardMarkup};
use teloxide::{ApiError, RequestError};
use zegju_bot::core::{AppError, AppResult};
use zegju_bot::telegram::{Messenger, OutgoingText};

/// One outbound call, as the controller issued it
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Text {
        chat_id: ChatId,
        message: OutgoingText,
    },
    Photo {
        chat_id: ChatId,
        file_id: String,
        caption: String,
        keyboard: InlineKeyboardMarkup,
    },
    CallbackAnswer {
        callback_id: String,
        text: Option<String>,
    },
}

#[derive(Default)]
pub struct RecordingMessenger {
    calls: Mutex<Vec<Call>>,
    failing_chats: Mutex<HashSet<ChatId>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later send to `chat_id` fail.
    pub fn fail_chat(&self, chat_id: ChatId) {
        self.failing_chats.lock().unwrap().insert(chat_id);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the recorded calls and forgets them.
    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    /// Texts sent to `chat_id`, in order
    pub fn texts_to(&self, chat_id: ChatId) -> Vec<OutgoingText> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Text { chat_id: to, message } if to == chat_id => Some(message),
                _ => None,
            })
            .collect()
    }

    fn check(&self, chat_id: ChatId) -> AppResult<()> {
        if self.failing_chats.lock().unwrap().contains(&chat_id) {
            return Err(AppError::Telegram(RequestError::Api(ApiError::BotBlocked)));
        }
        Ok(())
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, message: OutgoingText) -> AppResult<()> {
        self.check(chat_id)?;
        self.record(Call::Text { chat_id, message });
        Ok(())
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        file_id: &str,
        caption: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> AppResult<()> {
        self.check(chat_id)?;
        self.record(Call::Photo {
            chat_id,
            file_id: file_id.to_string(),
            caption: caption.to_string(),
            keyboard,
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> AppResult<()> {
        self.record(Call::CallbackAnswer {
            callback_id: callback_id.to_string(),
            text: text.map(str::to_string),
        });
        Ok(())
    }
}
