//! Test fixtures for the registration flow

#![allow(dead_code)]

use std::sync::Arc;

use teloxide::types::ChatId;
use zegju_bot::core::types::PhotoVariant;
use zegju_bot::core::{Sender, Session};
use zegju_bot::registration::{CallbackEvent, Inbound, RegistrationController};
use zegju_bot::storage::{InMemorySessionStore, SessionStore};

use super::recorder::RecordingMessenger;

pub const USER_ID: i64 = 555_000_111;
pub const ADMIN_ID: i64 = 900_000_001;

pub fn sender(user_id: i64, username: Option<&str>) -> Sender {
    Sender {
        user_id,
        username: username.map(str::to_string),
        full_name: "Abebe Kebede".to_string(),
    }
}

pub fn photo(file_id: &str, width: u32, height: u32) -> PhotoVariant {
    PhotoVariant {
        file_id: file_id.to_string(),
        width,
        height,
    }
}

pub fn callback(id: &str, admin_id: i64, data: Option<&str>) -> CallbackEvent {
    CallbackEvent {
        id: id.to_string(),
        from: sender(admin_id, Some("admin")),
        data: data.map(str::to_string),
    }
}

/// Controller wired to a recording messenger and an in-memory store
pub struct TestEnvironment {
    pub controller: RegistrationController,
    pub messenger: Arc<RecordingMessenger>,
    pub sessions: Arc<InMemorySessionStore>,
}

impl TestEnvironment {
    pub fn new(admin_ids: Vec<i64>) -> Self {
        let messenger = Arc::new(RecordingMessenger::new());
        let sessions = Arc::new(InMemorySessionStore::new());
        let controller = RegistrationController::new(admin_ids, messenger.clone(), sessions.clone());
        Self {
            controller,
            messenger,
            sessions,
        }
    }

    /// Sends `event` from `user` in their private chat.
    pub async fn send(&self, user: &Sender, event: Inbound) {
        self.controller
            .handle_message(ChatId(user.user_id), user, event)
            .await
            .expect("message handling failed");
    }

    pub async fn session(&self, user_id: i64) -> Session {
        self.sessions.load(user_id).await.expect("session load failed")
    }
}
