//! Registration conversation controller
//!
//! Loads the sender's session, asks the router which handler applies, runs
//! it and writes the session back. All replies go through [`Messenger`].

use std::sync::Arc;

use teloxide::types::ChatId;

use crate::core::config::registration::MIN_PASSWORD_LEN;
use crate::core::error::AppResult;
use crate::core::types::{best_photo, Language, PhotoVariant, RegistrationState, Sender, Session, Submission};
use crate::i18n;
use crate::registration::events::{CallbackEvent, Inbound};
use crate::registration::router::{route, Route};
use crate::storage::SessionStore;
use crate::telegram::callback::CallbackPayload;
use crate::telegram::keyboards::{approval_keyboard, contact_keyboard, language_keyboard};
use crate::telegram::messenger::{Messenger, OutgoingText};

/// Returns the trimmed password if it is long enough.
pub fn validate_password(text: &str) -> Option<&str> {
    let password = text.trim();
    (password.chars().count() >= MIN_PASSWORD_LEN).then_some(password)
}

/// Drives every user's registration conversation and the admin approval button
#[derive(Clone)]
pub struct RegistrationController {
    admin_ids: Arc<[i64]>,
    messenger: Arc<dyn Messenger>,
    sessions: Arc<dyn SessionStore>,
}

impl RegistrationController {
    pub fn new(admin_ids: Vec<i64>, messenger: Arc<dyn Messenger>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            admin_ids: admin_ids.into(),
            messenger,
            sessions,
        }
    }

    /// Handles one message from `sender` in `chat_id`.
    pub async fn handle_message(&self, chat_id: ChatId, sender: &Sender, event: Inbound) -> AppResult<()> {
        let session = self.sessions.load(sender.user_id).await?;
        let kind = event.kind();
        let selected = route(session.state, kind);

        log::debug!(
            "user {} in {:?} sent {:?} -> {:?}",
            sender.user_id,
            session.state,
            kind,
            selected
        );

        match (selected, event) {
            (Route::Start, _) => self.start(chat_id, sender).await,
            (Route::Cancel, _) => self.cancel(chat_id, sender, &session).await,
            (Route::ChooseLanguage, Inbound::Text(text)) => self.choose_language(chat_id, sender, session, &text).await,
            (Route::SaveContact, Inbound::Contact { phone_number }) => {
                self.save_contact(chat_id, sender, session, phone_number).await
            }
            (Route::RemindContact, _) => self.reply(chat_id, session.lang(), "contact-reminder").await,
            (Route::SavePassword, Inbound::Text(text)) => self.save_password(chat_id, sender, session, &text).await,
            (Route::SaveScreenshot, Inbound::Photo(variants)) => {
                self.save_screenshot(chat_id, sender, session, &variants).await
            }
            (Route::RemindScreenshot, _) => self.reply(chat_id, session.lang(), "screenshot-reminder").await,
            _ => Ok(()),
        }
    }

    /// Handles an inline-button press.
    pub async fn handle_callback(&self, callback: CallbackEvent) -> AppResult<()> {
        let payload = match callback.data.as_deref().map(str::parse::<CallbackPayload>) {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                log::warn!("Ignoring callback from {}: {}", callback.from.user_id, e);
                return self.messenger.answer_callback(&callback.id, None).await;
            }
            None => return self.messenger.answer_callback(&callback.id, None).await,
        };

        match payload {
            CallbackPayload::Login { user_id } => self.send_login_info(&callback, user_id).await,
        }
    }

    async fn start(&self, chat_id: ChatId, sender: &Sender) -> AppResult<()> {
        self.sessions.save(sender.user_id, Session::started()).await?;
        log::info!("User {} started registration", sender.user_id);

        let message = OutgoingText::plain(i18n::t(Language::En, "language-prompt")).keyboard(language_keyboard());
        self.messenger.send_text(chat_id, message).await
    }

    async fn cancel(&self, chat_id: ChatId, sender: &Sender, session: &Session) -> AppResult<()> {
        self.sessions.clear(sender.user_id).await?;
        log::info!("User {} cancelled registration in {:?}", sender.user_id, session.state);

        let message = OutgoingText::plain(i18n::t(session.lang(), "cancelled")).remove_keyboard();
        self.messenger.send_text(chat_id, message).await
    }

    async fn choose_language(&self, chat_id: ChatId, sender: &Sender, mut session: Session, text: &str) -> AppResult<()> {
        let lang = Language::from_choice(text);
        session.language = Some(lang);
        session.state = RegistrationState::Contact;
        self.sessions.save(sender.user_id, session).await?;

        let message = OutgoingText::plain(i18n::t(lang, "contact-prompt")).keyboard(contact_keyboard(lang));
        self.messenger.send_text(chat_id, message).await
    }

    async fn save_contact(&self, chat_id: ChatId, sender: &Sender, mut session: Session, phone: String) -> AppResult<()> {
        let lang = session.lang();
        session.phone = Some(phone);
        session.state = RegistrationState::Password;
        self.sessions.save(sender.user_id, session).await?;

        let message = OutgoingText::plain(i18n::t(lang, "password-prompt")).remove_keyboard();
        self.messenger.send_text(chat_id, message).await
    }

    async fn save_password(&self, chat_id: ChatId, sender: &Sender, mut session: Session, text: &str) -> AppResult<()> {
        let lang = session.lang();
        let Some(password) = validate_password(text) else {
            return self.reply(chat_id, lang, "password-too-short").await;
        };

        session.password = Some(password.to_string());
        session.state = RegistrationState::PaymentScreenshot;
        self.sessions.save(sender.user_id, session).await?;

        let message = OutgoingText::plain(i18n::t(lang, "payment-instructions")).markdown_v2();
        self.messenger.send_text(chat_id, message).await
    }

    async fn save_screenshot(
        &self,
        chat_id: ChatId,
        sender: &Sender,
        session: Session,
        variants: &[PhotoVariant],
    ) -> AppResult<()> {
        let lang = session.lang();
        let Some(photo) = best_photo(variants) else {
            return self.reply(chat_id, lang, "screenshot-reminder").await;
        };

        let submission = Submission {
            phone: session.phone.unwrap_or_default(),
            password: session.password.unwrap_or_default(),
            language: lang,
            sender: sender.clone(),
            photo_file_id: photo.file_id.clone(),
        };
        self.notify_admins(&submission).await?;

        self.sessions.clear(sender.user_id).await?;
        log::info!(
            "User {} submitted payment screenshot, forwarded to {} admin(s)",
            sender.user_id,
            self.admin_ids.len()
        );

        self.reply(chat_id, lang, "thank-you").await
    }

    async fn notify_admins(&self, submission: &Submission) -> AppResult<()> {
        let caption = submission.caption();
        for admin_id in self.admin_ids.iter() {
            self.messenger
                .send_photo(
                    ChatId(*admin_id),
                    &submission.photo_file_id,
                    &caption,
                    approval_keyboard(submission.sender.user_id),
                )
                .await?;
        }
        Ok(())
    }

    async fn send_login_info(&self, callback: &CallbackEvent, user_id: i64) -> AppResult<()> {
        let ack = match self.send_activation(user_id).await {
            Ok(()) => {
                log::info!("Admin {} approved user {}", callback.from.user_id, user_id);
                i18n::t(Language::En, "approval-sent")
            }
            Err(e) => {
                log::error!("Failed to message user {}: {}", user_id, e);
                i18n::t(Language::En, "approval-failed")
            }
        };
        self.messenger.answer_callback(&callback.id, Some(ack.as_str())).await
    }

    /// Amharic first, then English.
    async fn send_activation(&self, user_id: i64) -> AppResult<()> {
        for lang in [Language::Am, Language::En] {
            self.messenger
                .send_text(ChatId(user_id), OutgoingText::plain(i18n::t(lang, "activation")))
                .await?;
        }
        Ok(())
    }

    async fn reply(&self, chat_id: ChatId, lang: Language, key: &str) -> AppResult<()> {
        self.messenger.send_text(chat_id, OutgoingText::plain(i18n::t(lang, key))).await
    }
}
