//! Command implementations for pagefix-cli

pub mod claims;
pub mod files;
pub mod pitch;

use std::path::Path;

use pagefix_core::Settings;

use crate::cli::Cli;
use crate::error::{CliError, Result};

pub use claims::run_claims;
pub use files::run_files;
pub use pitch::run_pitch;

/// Resolve settings from `--config`, `./pagefix.toml` or defaults, then apply
/// global flag overrides.
pub fn load_settings(cwd: &Path, cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(CliError::user(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            Settings::load(&path)?
        }
        None => Settings::discover(cwd)?,
    };

    if let Some(dir) = &cli.public_dir {
        settings.public_dir = cwd.join(dir);
    }
    Ok(settings)
}
