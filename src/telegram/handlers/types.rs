//! Handler types and dependencies

use std::sync::Arc;

use crate::registration::RegistrationController;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub controller: Arc<RegistrationController>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(controller: Arc<RegistrationController>) -> Self {
        Self { controller }
    }
}
