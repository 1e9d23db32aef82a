//! A document held in memory while a pass runs

use std::path::{Path, PathBuf};

use pagefix_fs::{FileEntry, io};

/// One HTML file's full text paired with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    display_path: String,
    file_name: String,
    dir: String,
    text: String,
}

impl Document {
    /// Read a document from disk.
    pub fn open(entry: &FileEntry) -> pagefix_fs::Result<Self> {
        let text = io::read_text(&entry.path)?;
        Ok(Self::from_text(entry, text))
    }

    /// Wrap text that is already in memory.
    pub fn from_text(entry: &FileEntry, text: impl Into<String>) -> Self {
        Self {
            path: entry.path.clone(),
            display_path: entry.display_path(),
            file_name: entry.file_name().to_string(),
            dir: entry.dir.clone(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path relative to the base directory, for reports.
    pub fn display_path(&self) -> &str {
        &self.display_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Directory relative to the base ("" for the base itself).
    pub fn dir(&self) -> &str {
        &self.dir
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Overwrite the file on disk with `text` and keep it as the current text.
    pub fn save(&mut self, text: String) -> pagefix_fs::Result<()> {
        io::write_text(&self.path, &text)?;
        self.text = text;
        Ok(())
    }
}
