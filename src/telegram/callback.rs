//! Inline-button payload codec
//!
//! Callback data is limited to 64 bytes by Telegram, so payloads are encoded
//! as short `action:args` strings. Nothing else in the crate splits or
//! formats callback data by hand.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const LOGIN: &str = "login";

/// Action attached to an inline button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackPayload {
    /// Send the activation messages to `user_id`
    Login { user_id: i64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallbackPayloadError {
    #[error("malformed callback data: {0:?}")]
    Malformed(String),

    #[error("unknown callback action: {0:?}")]
    UnknownAction(String),

    #[error("invalid user id in callback data: {0:?}")]
    InvalidUserId(String),
}

impl fmt::Display for CallbackPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackPayload::Login { user_id } => write!(f, "{}:{}", LOGIN, user_id),
        }
    }
}

impl FromStr for CallbackPayload {
    type Err = CallbackPayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action, args) = s
            .split_once(':')
            .ok_or_else(|| CallbackPayloadError::Malformed(s.to_string()))?;

        match action {
            LOGIN => {
                let user_id = args
                    .parse::<i64>()
                    .map_err(|_| CallbackPayloadError::InvalidUserId(args.to_string()))?;
                Ok(CallbackPayload::Login { user_id })
            }
            other => Err(CallbackPayloadError::UnknownAction(other.to_string())),
        }
    }
}
