//! Outbound side of the bot
//!
//! The registration flow talks to Telegram only through [`Messenger`], so it
//! can be driven in tests without a Bot API server.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQueryId, FileId, InlineKeyboardMarkup, InputFile, KeyboardMarkup, KeyboardRemove, ParseMode, ReplyMarkup,
};

use crate::core::error::AppResult;

/// A text message about to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingText {
    pub text: String,
    pub reply_markup: Option<ReplyMarkup>,
    pub parse_mode: Option<ParseMode>,
}

impl OutgoingText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reply_markup: None,
            parse_mode: None,
        }
    }

    pub fn keyboard(mut self, keyboard: KeyboardMarkup) -> Self {
        self.reply_markup = Some(ReplyMarkup::Keyboard(keyboard));
        self
    }

    /// Hides whatever reply keyboard the chat currently shows.
    pub fn remove_keyboard(mut self) -> Self {
        self.reply_markup = Some(ReplyMarkup::KeyboardRemove(KeyboardRemove::new()));
        self
    }

    pub fn markdown_v2(mut self) -> Self {
        self.parse_mode = Some(ParseMode::MarkdownV2);
        self
    }
}

/// Outbound calls the registration flow needs from the chat platform
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, message: OutgoingText) -> AppResult<()>;

    /// Re-sends an already uploaded photo by its file id.
    async fn send_photo(
        &self,
        chat_id: ChatId,
        file_id: &str,
        caption: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> AppResult<()>;

    /// Stops the button spinner, optionally showing a short notice.
    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> AppResult<()>;
}

/// [`Messenger`] backed by the Bot API
#[derive(Clone)]
pub struct TeloxideMessenger {
    bot: Bot,
}

impl TeloxideMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TeloxideMessenger {
    async fn send_text(&self, chat_id: ChatId, message: OutgoingText) -> AppResult<()> {
        let mut request = self.bot.send_message(chat_id, message.text);
        if let Some(markup) = message.reply_markup {
            request = request.reply_markup(markup);
        }
        if let Some(mode) = message.parse_mode {
            request = request.parse_mode(mode);
        }
        request.await?;
        Ok(())
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        file_id: &str,
        caption: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> AppResult<()> {
        self.bot
            .send_photo(chat_id, InputFile::file_id(FileId(file_id.to_string())))
            .caption(caption)
            .reply_markup(keyboard)
            .await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> AppResult<()> {
        let mut request = self.bot.answer_callback_query(CallbackQueryId(callback_id.to_string()));
        if let Some(text) = text {
            request = request.text(text);
        }
        request.await?;
        Ok(())
    }
}
