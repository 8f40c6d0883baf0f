use fluent_templates::{static_loader, Loader};
use unic_langid::{langid, LanguageIdentifier};

use crate::core::types::Language;

static_loader! {
    static LOCALES = {
        locales: "./locales",
        fallback_language: "en-US",
    };
}

const ENGLISH: LanguageIdentifier = langid!("en-US");
const AMHARIC: LanguageIdentifier = langid!("am");

/// Maps a conversation language to its Fluent locale.
pub fn lang_id(lang: Language) -> LanguageIdentifier {
    match lang {
        Language::En => ENGLISH,
        Language::Am => AMHARIC,
    }
}

/// Returns a localized string for the given key.
/// Converts literal `\n` sequences to actual newlines for proper Telegram formatting.
pub fn t(lang: Language, key: &str) -> String {
    let text = LOCALES
        .lookup(&lang_id(lang), key)
        .unwrap_or_else(|| LOCALES.lookup(&ENGLISH, key).unwrap_or_else(|| key.to_string()));
    text.replace("\\n", "\n")
}
