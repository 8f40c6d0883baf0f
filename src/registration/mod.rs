//! Registration conversation: events, transition table and controller

pub mod controller;
pub mod events;
pub mod router;

pub use controller::{validate_password, RegistrationController};
pub use events::{CallbackEvent, EventKind, Inbound};
pub use router::{route, Route};
