//! Registry error types.

use rtc_core::CoreError;
use thiserror::Error;

use crate::check::Violation;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Requested definition was not found in the registry.
    #[error("Definition not found: {0}")]
    NotFound(String),

    /// JSON value did not pass validation against a definition.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Definitions violate one or more structural invariants.
    #[error("{} consistency violation(s): {}", violations.len(), summarize(violations))]
    Inconsistent { violations: Vec<Violation> },

    /// A validation schema could not be compiled.
    #[error("Schema generation error: {0}")]
    Generation(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
