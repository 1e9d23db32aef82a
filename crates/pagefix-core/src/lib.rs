//! Batch orchestration for pagefix.
//!
//! A run enumerates a [`pagefix_fs::FileSet`], feeds each document through one
//! [`DocumentPass`] and returns a [`RunStats`] value. Documents are processed
//! strictly one after another: read, transform, write, next. A failure in one
//! document is recorded and the batch moves on.

pub mod claims;
pub mod document;
pub mod error;
pub mod pass;
pub mod pitch;
pub mod preview;
pub mod runner;
pub mod settings;
pub mod stats;

pub use claims::ClaimsPass;
pub use document::Document;
pub use error::{Error, Result};
pub use pass::{DocumentPass, PassResult};
pub use pitch::PitchPass;
pub use runner::{BatchRunner, NullReporter, Reporter, RunOptions};
pub use settings::{PitchSettings, RulesSettings, Settings};
pub use stats::{FileError, FileReport, FileStatus, RunStats};
