use thiserror::Error;

/// Centralized error types for the application
///
/// Validation failures of user input are not errors: the conversation
/// re-prompts in place. Everything that reaches this enum is either a
/// startup problem or a failed call to the Bot API.
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Missing or malformed startup configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
