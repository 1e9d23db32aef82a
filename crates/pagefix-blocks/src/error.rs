//! Error types for pagefix-blocks

/// Result type for pagefix-blocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or preparing a block.
///
/// Per-document structural problems are not errors here; they are reported
/// through [`crate::Outcome::StructuralError`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] pagefix_fs::Error),

    #[error("Invalid canonical block: `{field}` {reason}")]
    InvalidBlock { field: &'static str, reason: String },

    #[error("Invalid anchor pattern: {0}")]
    AnchorPattern(#[from] regex::Error),
}

impl Error {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidBlock {
            field,
            reason: reason.into(),
        }
    }
}
