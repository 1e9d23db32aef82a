//! Run settings, optionally loaded from `pagefix.toml`

use std::path::{Path, PathBuf};

use pagefix_blocks::{CanonicalBlock, Dependency};
use pagefix_fs::{ConfigStore, DEFAULT_SKIP_FILES, FileSetSpec, SkipList};
use pagefix_rules::RuleBook;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "pagefix.toml";

/// Top-level settings. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the HTML documents
    pub public_dir: PathBuf,
    /// Subdirectories of `public_dir` that are also processed
    pub subdirs: Vec<String>,
    /// File names excluded from every run
    pub skip_files: Vec<String>,
    pub pitch: PitchSettings,
    pub rules: RulesSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("."),
            subdirs: vec!["marketing".to_string()],
            skip_files: DEFAULT_SKIP_FILES.iter().map(|s| s.to_string()).collect(),
            pitch: PitchSettings::default(),
            rules: RulesSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PitchSettings {
    /// Canonical block source (TOML, JSON or YAML)
    pub block: Option<PathBuf>,
    /// Treat any marked block as current, whatever its version
    pub keep_stale: bool,
    /// Head dependency; the Tailwind CDN snippet when unset
    pub dependency: Option<Dependency>,
    /// Regex for the Type B insertion anchor
    pub anchor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesSettings {
    /// Rule book file; the built-in claims book when unset
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a file, resolving relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let mut settings: Self = ConfigStore::new().load(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        settings.resolve_paths(base);
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Load `pagefix.toml` from `dir` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            tracing::debug!(dir = %dir.display(), "No settings file; using defaults");
            Ok(Self::default())
        }
    }

    /// Make relative paths absolute with respect to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        resolve(&mut self.public_dir, base);
        if let Some(block) = self.pitch.block.as_mut() {
            resolve(block, base);
        }
        if let Some(rules) = self.rules.path.as_mut() {
            resolve(rules, base);
        }
    }

    pub fn skip_list(&self) -> SkipList {
        SkipList::new(&self.skip_files)
    }

    /// Describe the documents a run should cover.
    pub fn file_set_spec(&self) -> FileSetSpec {
        FileSetSpec::new(&self.public_dir)
            .with_subdirs(&self.subdirs)
            .with_skip(self.skip_list())
    }

    /// Load and validate the configured canonical block.
    pub fn load_block(&self) -> Result<CanonicalBlock> {
        let path = self.pitch.block.as_deref().ok_or(Error::NoBlockSource)?;
        Ok(CanonicalBlock::load(path)?)
    }

    /// Load the configured rule book, or the built-in one.
    pub fn load_rule_book(&self) -> Result<RuleBook> {
        let book = match &self.rules.path {
            Some(path) => RuleBook::load(path)?,
            None => RuleBook::builtin()?,
        };
        Ok(book)
    }
}

fn resolve(path: &mut PathBuf, base: &Path) {
    if path.is_relative() && !base.as_os_str().is_empty() {
        *path = base.join(&*path);
    }
}
