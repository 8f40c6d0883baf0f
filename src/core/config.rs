use std::collections::HashMap;
use std::env;
use std::time::Duration;

use itertools::Itertools;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::core::error::{AppError, AppResult};

/// Default log file path, used when LOG_FILE_PATH is not set
pub const DEFAULT_LOG_FILE_PATH: &str = "app.log";

/// Process-wide configuration, read once at startup and immutable afterwards.
///
/// Environment variables:
/// - `BOT_TOKEN` (or `TELOXIDE_TOKEN`): required
/// - `ADMIN_IDS`: comma-separated numeric Telegram ids; absent means nobody is notified
/// - `LOG_FILE_PATH`: defaults to `app.log`
/// - `BOT_API_URL`: optional custom Bot API server
#[derive(Debug)]
pub struct Config {
    pub bot_token: SecretString,
    pub admin_ids: Vec<i64>,
    pub log_file_path: String,
    pub bot_api_url: Option<Url>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> AppResult<Self> {
        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Builds the configuration from an explicit variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> AppResult<Self> {
        let lookup = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let bot_token = lookup("BOT_TOKEN")
            .or_else(|| lookup("TELOXIDE_TOKEN"))
            .ok_or_else(|| AppError::Config("BOT_TOKEN environment variable not set".to_string()))?;

        let admin_ids = lookup("ADMIN_IDS").map(admin::parse_admin_ids).unwrap_or_default();

        let log_file_path = lookup("LOG_FILE_PATH").unwrap_or(DEFAULT_LOG_FILE_PATH).to_string();

        let bot_api_url = lookup("BOT_API_URL")
            .map(|raw| Url::parse(raw).map_err(|e| AppError::Config(format!("Invalid BOT_API_URL: {}", e))))
            .transpose()?;

        Ok(Self {
            bot_token: SecretString::from(bot_token.to_string()),
            admin_ids,
            log_file_path,
            bot_api_url,
        })
    }

    /// Log file location, readable before the rest of the configuration
    /// so that configuration warnings reach the log.
    pub fn log_file_path_from_env() -> String {
        env::var("LOG_FILE_PATH")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string())
    }

    pub fn token(&self) -> &str {
        self.bot_token.expose_secret()
    }
}

/// Administrator configuration
pub mod admin {
    use super::Itertools;

    /// Parses a comma-separated admin id list.
    ///
    /// Whitespace around entries is ignored, unparsable entries are skipped
    /// with a warning and duplicates collapse to their first occurrence.
    pub fn parse_admin_ids(raw: &str) -> Vec<i64> {
        raw.split([',', ' ', '\n', '\t'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .filter_map(|part| match part.parse::<i64>() {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("Ignoring invalid ADMIN_IDS entry {:?}: {}", part, e);
                    None
                }
            })
            .unique()
            .collect()
    }
}

/// Registration flow configuration
pub mod registration {
    /// Minimum password length in characters, counted after trimming
    pub const MIN_PASSWORD_LEN: usize = 4;

    /// Substring of the Amharic language button that selects Amharic
    pub const AMHARIC_MARKER: &str = "አማርኛ";

    /// Language keyboard labels
    pub const ENGLISH_LABEL: &str = "🇬🇧 English";
    pub const AMHARIC_LABEL: &str = "🇪🇹 አማርኛ";
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
