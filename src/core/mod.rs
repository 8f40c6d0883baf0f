//! Core types, configuration, errors and logging

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::{AppError, AppResult};
pub use logging::{init_logger, install_panic_hook};
pub use types::{Language, RegistrationState, Sender, Session, Submission};
