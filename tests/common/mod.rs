//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod fixtures;
pub mod recorder;

#[allow(unused_imports)]
pub use fixtures::{callback, photo, sender, TestEnvironment, ADMIN_ID, USER_ID};
#[allow(unused_imports)]
pub use recorder::{Call, RecordingMessenger};
