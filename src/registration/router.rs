//! Transition table of the registration conversation
//!
//! Maps `(current state, event kind)` to the handler that must run. Guards
//! that depend on the event payload (password length) are checked by the
//! handler itself.

use crate::core::types::RegistrationState;
use crate::registration::events::EventKind;

/// Handler selected for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Reset the session and ask for the language
    Start,
    /// Drop the session
    Cancel,
    ChooseLanguage,
    SaveContact,
    RemindContact,
    SavePassword,
    SaveScreenshot,
    RemindScreenshot,
    /// No handler: the event is dropped silently
    Ignore,
}

pub fn route(state: RegistrationState, kind: EventKind) -> Route {
    use EventKind as E;
    use RegistrationState as S;

    match (state, kind) {
        (_, E::Start) => Route::Start,
        (_, E::Cancel) => Route::Cancel,
        (S::ChooseLang, E::Text) => Route::ChooseLanguage,
        (S::Contact, E::Contact) => Route::SaveContact,
        (S::Contact, _) => Route::RemindContact,
        (S::Password, E::Text) => Route::SavePassword,
        (S::PaymentScreenshot, E::Photo) => Route::SaveScreenshot,
        (S::PaymentScreenshot, _) => Route::RemindScreenshot,
        (S::Idle, _) | (S::ChooseLang, _) | (S::Password, _) => Route::Ignore,
    }
}
