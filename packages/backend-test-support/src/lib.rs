//! Backend test support utilities
//!
//! Unified logging initialization and game snapshot builders shared by the
//! backend's integration tests.

pub mod fixtures;
pub mod logging;
