//! Dispatcher schema tests
//!
//! Updates are deserialized from Telegram JSON and run through the same
//! handler tree as production, with a recording messenger behind the
//! controller.
//! Run with: cargo test --test telegram_schema_test

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::ops::ControlFlow;
use std::sync::Arc;

use common::{Call, TestEnvironment, ADMIN_ID, USER_ID};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use teloxide::dptree;
use teloxide::types::{ChatId, Me, Update};
use zegju_bot::core::{Language, RegistrationState};
use zegju_bot::i18n::t;
use zegju_bot::telegram::{schema, HandlerDeps};

fn me() -> Me {
    serde_json::from_value(json!({
        "id": 7000,
        "is_bot": true,
        "first_name": "Zegju",
        "username": "zegju_bot",
        "can_join_groups": false,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false,
        "can_connect_to_business": false,
        "has_main_web_app": false
    }))
    .unwrap()
}

fn user_json(id: i64) -> Value {
    json!({ "id": id, "is_bot": false, "first_name": "Abebe", "username": "abebe" })
}

fn message_update(content: Value) -> Update {
    let mut message = json!({
        "message_id": 1,
        "date": 1234567890,
        "chat": { "id": USER_ID, "type": "private", "first_name": "Abebe" },
        "from": user_json(USER_ID)
    });
    if let (Some(base), Some(extra)) = (message.as_object_mut(), content.as_object()) {
        base.extend(extra.clone());
    }
    serde_json::from_str(&json!({ "update_id": 1, "message": message }).to_string()).unwrap()
}

fn callback_update(data: &str) -> Update {
    serde_json::from_str(
        &json!({
        "update_id": 2,
        "callback_query": {
            "id": "cb-1",
            "from": user_json(ADMIN_ID),
            "chat_instance": "1",
            "data": data
        }
    })
        .to_string(),
    )
    .unwrap()
}

async fn dispatch(env: &TestEnvironment, update: Update) {
    let deps = HandlerDeps::new(Arc::new(env.controller.clone()));
    let result = schema(deps).dispatch(dptree::deps![update, me()]).await;
    match result {
        ControlFlow::Break(Ok(())) => {}
        ControlFlow::Break(Err(e)) => panic!("handler failed: {}", e),
        ControlFlow::Continue(_) => panic!("update was not handled"),
    }
}

#[tokio::test]
async fn test_start_command_is_routed() {
    let env = TestEnvironment::new(vec![ADMIN_ID]);

    dispatch(&env, message_update(json!({ "text": "/start" }))).await;

    assert_eq!(env.session(USER_ID).await.state, RegistrationState::ChooseLang);
    let sent = env.messenger.texts_to(ChatId(USER_ID));
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, t(Language::En, "language-prompt"));
}

#[tokio::test]
async fn test_full_registration_through_updates() {
    let env = TestEnvironment::new(vec![ADMIN_ID]);

    dispatch(&env, message_update(json!({ "text": "/start" }))).await;
    dispatch(&env, message_update(json!({ "text": "🇪🇹 አማርኛ" }))).await;
    dispatch(
        &env,
        message_update(json!({
            "contact": { "phone_number": "+251911111111", "first_name": "Abebe", "user_id": USER_ID }
        })),
    )
    .await;

    let session = env.session(USER_ID).await;
    assert_eq!(session.state, RegistrationState::Password);
    assert_eq!(session.language, Some(Language::Am));
    assert_eq!(session.phone.as_deref(), Some("+251911111111"));

    dispatch(&env, message_update(json!({ "text": "abcd" }))).await;
    dispatch(
        &env,
        message_update(json!({
            "photo": [
                { "file_id": "small", "file_unique_id": "u1", "width": 90, "height": 160, "file_size": 1000 },
                { "file_id": "large", "file_unique_id": "u2", "width": 720, "height": 1280, "file_size": 90000 }
            ]
        })),
    )
    .await;

    assert!(env.sessions.is_empty());
    let forwarded: Vec<String> = env
        .messenger
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            Call::Photo { chat_id, file_id, .. } if chat_id == ChatId(ADMIN_ID) => Some(file_id),
            _ => None,
        })
        .collect();
    assert_eq!(forwarded, vec!["large".to_string()]);
}

#[tokio::test]
async fn test_cancel_command_is_routed() {
    let env = TestEnvironment::new(vec![ADMIN_ID]);

    dispatch(&env, message_update(json!({ "text": "/start" }))).await;
    dispatch(&env, message_update(json!({ "text": "/cancel@zegju_bot" }))).await;

    assert!(env.sessions.is_empty());
    let sent = env.messenger.texts_to(ChatId(USER_ID));
    assert_eq!(sent.last().map(|m| m.text.clone()), Some(t(Language::En, "cancelled")));
}

#[tokio::test]
async fn test_message_without_sender_is_dropped() {
    let env = TestEnvironment::new(vec![ADMIN_ID]);
    let update: Update = serde_json::from_str(
        &json!({
            "update_id": 3,
            "message": {
                "message_id": 1,
                "date": 1234567890,
                "chat": { "id": USER_ID, "type": "private", "first_name": "Abebe" },
                "text": "/start"
            }
        })
        .to_string(),
    )
    .unwrap();

    dispatch(&env, update).await;

    assert!(env.messenger.calls().is_empty());
    assert!(env.sessions.is_empty());
}

#[tokio::test]
async fn test_approval_button_is_routed() {
    let env = TestEnvironment::new(vec![ADMIN_ID]);

    dispatch(&env, callback_update(&format!("login:{}", USER_ID))).await;

    let sent = env.messenger.texts_to(ChatId(USER_ID));
    assert_eq!(
        sent.iter().map(|m| m.text.clone()).collect::<Vec<_>>(),
        vec![t(Language::Am, "activation"), t(Language::En, "activation")]
    );
    assert!(env.messenger.calls().contains(&Call::CallbackAnswer {
        callback_id: "cb-1".to_string(),
        text: Some(t(Language::En, "approval-sent")),
    }));
}
