//! Module and registry error types.

use kiln_env::EnvError;

/// Failure inside a configure hook. Always build-fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigureError {
    /// The environment rejected a mutation.
    #[error(transparent)]
    Env(#[from] EnvError),

    /// A required option is missing or unusable.
    #[error("option '{key}' is required: {detail}")]
    MissingOption { key: String, detail: String },
}

/// Errors raised while building a module registry.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// Two descriptors registered under the same name.
    #[error("module '{name}' is already registered")]
    DuplicateModule { name: String },

    /// A descriptor name that cannot be used as an option suffix or directory.
    #[error("invalid module name '{name}': {detail}")]
    InvalidName { name: String, detail: String },

    /// A descriptor declared an empty documentation path.
    #[error("module '{name}' declares an empty documentation path")]
    EmptyDocPath { name: String },

    /// Lookup of an unregistered module.
    #[error("unknown module: {name}")]
    UnknownModule { name: String },
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, ModuleError>;
