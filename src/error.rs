// WHY: a single typed error for the core; binaries and I/O edges wrap it in anyhow

use thiserror::Error;

/// Errors raised by the detection and paraphrase core
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("text is required")]
    EmptyText,

    #[error("unsupported paraphrase style: {0}")]
    UnsupportedStyle(String),

    #[error("dictionary term {term:?} cannot be compiled: {message}")]
    InvalidPattern { term: String, message: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Validation failures the caller should surface as a 4xx-style error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyText | Self::UnsupportedStyle(_))
    }
}

/// Reject null-equivalent input before any detection work starts
pub fn require_text(text: &str) -> Result<(), EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyText);
    }
    Ok(())
}
