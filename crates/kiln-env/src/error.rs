//! Error types for environment operations.

/// Errors that can occur while reading or augmenting the build environment.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// A preprocessor symbol was defined twice with different values.
    #[error("define '{name}' already set to {existing:?}, refusing to redefine as {requested:?}")]
    ConflictingDefine {
        /// Symbol name.
        name: String,
        /// Value already present in the configuration.
        existing: Option<String>,
        /// Value the caller tried to set.
        requested: Option<String>,
    },

    /// An option holds a value of a different kind than the caller expected.
    #[error("option '{key}' is a {actual}, expected a {expected}")]
    OptionType {
        /// Option key.
        key: String,
        /// Kind the caller asked for.
        expected: &'static str,
        /// Kind actually stored.
        actual: &'static str,
    },

    /// A `key=value` assignment could not be split.
    #[error("invalid option assignment '{input}': expected KEY=VALUE")]
    InvalidAssignment {
        /// The raw assignment text.
        input: String,
    },
}

/// Result type for environment operations.
pub type Result<T> = std::result::Result<T, EnvError>;
