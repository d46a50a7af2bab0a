//! Error types for rec_ast crate.

use thiserror::Error;

/// Errors raised when a method name cannot be turned into a [`crate::MethodHint`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MethodHintError {
    /// Named method exists in the literature but has no solver here.
    #[error("method '{0}' is not supported")]
    Unsupported(String),

    /// Name does not refer to any method.
    #[error("unknown method '{0}' (expected master, substitution or iteration)")]
    Unknown(String),
}
