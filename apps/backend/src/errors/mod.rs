//! Error handling for the scorekeeping engine.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{ErrorKind, ValidationError};
pub use error_code::ErrorCode;
