//! Error types for pagefix-rules

/// Result type for pagefix-rules operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a rule book. Applying rules never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] pagefix_fs::Error),

    #[error("Invalid pattern in rule set `{set}`: {source}")]
    Pattern {
        set: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule {index} in set `{set}` has an empty `find`")]
    EmptyFind { set: String, index: usize },

    #[error("Failed to parse built-in rule book: {0}")]
    Builtin(#[from] toml::de::Error),
}
