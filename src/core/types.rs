use std::fmt;

use crate::core::config::registration::AMHARIC_MARKER;

/// Conversation language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Am,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Am => "am",
        }
    }

    /// Infers the language from the text of the language-choice reply.
    ///
    /// Anything that does not mention Amharic falls back to English.
    pub fn from_choice(text: &str) -> Self {
        if text.contains(AMHARIC_MARKER) {
            Language::Am
        } else {
            Language::En
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a user currently is in the registration conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegistrationState {
    /// No conversation in progress
    #[default]
    Idle,
    ChooseLang,
    Contact,
    Password,
    PaymentScreenshot,
}

/// Per-user conversation data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub state: RegistrationState,
    pub language: Option<Language>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl Session {
    /// A fresh session waiting for the language choice.
    pub fn started() -> Self {
        Self {
            state: RegistrationState::ChooseLang,
            ..Self::default()
        }
    }

    /// Language for replies; English until the user picks one.
    pub fn lang(&self) -> Language {
        self.language.unwrap_or_default()
    }
}

/// The Telegram user an event came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub user_id: i64,
    pub username: Option<String>,
    pub full_name: String,
}

impl Sender {
    /// `@username` when the user has one, full name otherwise.
    pub fn display_name(&self) -> String {
        match self.username.as_deref() {
            Some(username) if !username.is_empty() => format!("@{}", username),
            _ => self.full_name.clone(),
        }
    }
}

/// One resolution variant of an uploaded photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoVariant {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
}

impl PhotoVariant {
    fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Picks the highest-resolution variant of an upload.
///
/// Telegram lists variants smallest first, so on equal area the later one wins.
pub fn best_photo(variants: &[PhotoVariant]) -> Option<&PhotoVariant> {
    variants.iter().max_by_key(|v| v.area())
}

/// Data forwarded to administrators once the payment screenshot arrives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub phone: String,
    pub password: String,
    pub language: Language,
    pub sender: Sender,
    pub photo_file_id: String,
}

impl Submission {
    /// Caption attached to the screenshot sent to each admin.
    pub fn caption(&self) -> String {
        format!(
            "🆕 Registration:\n📱 Phone: {}\n🔑 Password: {}\n🌐 Lang: {}\n👤 From: {} (id {})",
            self.phone,
            self.password,
            self.language,
            self.sender.display_name(),
            self.sender.user_id
        )
    }
}
