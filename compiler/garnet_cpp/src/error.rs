//! Backend error types.

use crate::template::TemplateError;

/// Failure reported by a [`Translator`](crate::Translator).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("translation failed: {message}")]
pub struct TranslateError {
    pub message: String,
}

impl TranslateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error produced while generating a compilation unit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The runtime template violates its marker contract.
    #[error("invalid runtime template: {0}")]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Translate(#[from] TranslateError),
}
