//! Error types for pagefix-core

/// Result type for pagefix-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Run-level errors. Anything here aborts a run before documents are touched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] pagefix_fs::Error),

    #[error(transparent)]
    Blocks(#[from] pagefix_blocks::Error),

    #[error(transparent)]
    Rules(#[from] pagefix_rules::Error),

    #[error("No canonical block configured; pass --block or set `pitch.block`")]
    NoBlockSource,
}
