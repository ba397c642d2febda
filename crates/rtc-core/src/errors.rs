//! Cross-cutting error types.

use thiserror::Error;

/// Errors that can be raised by any RuntimeComponent crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A fully-qualified type name is not of the form `<package>.<Kind>`.
    #[error("Invalid type name '{name}': {reason}")]
    InvalidTypeName { name: String, reason: &'static str },
}
