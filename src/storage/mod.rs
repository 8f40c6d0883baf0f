//! Conversation session storage

pub mod sessions;

// Re-exports for convenience
pub use sessions::{InMemorySessionStore, SessionStore};
