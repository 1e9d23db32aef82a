//! Filesystem layer for pagefix
//!
//! Provides the document file-set enumeration, atomic text I/O and
//! format-agnostic configuration loading used by the rewrite passes.

pub mod config;
pub mod enumerate;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use enumerate::{DEFAULT_SKIP_FILES, FileEntry, FileSet, FileSetSpec, SkipList};
pub use error::{Error, Result};
