//! Documentation index errors.

use std::path::PathBuf;

/// Errors raised while collecting or checking documentation sources.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// Two modules claim the same documentation class.
    #[error("doc class '{class}' is declared by both '{first}' and '{second}'")]
    DuplicateClass {
        class: String,
        first: String,
        second: String,
    },

    /// The modules root handed to a source check does not exist.
    #[error("modules root not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// JSON serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for documentation operations.
pub type Result<T> = std::result::Result<T, DocsError>;
