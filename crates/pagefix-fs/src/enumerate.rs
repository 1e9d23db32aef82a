//! Document file-set enumeration with an exclusion list
//!
//! The set is the base directory's matching files in lexicographic order,
//! followed by each configured subdirectory's files in lexicographic order.
//! Files whose name is on the skip list are reported separately.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Filenames that are known not to be content articles.
pub const DEFAULT_SKIP_FILES: &[&str] = &[
    "landing.html",
    "dashboard.html",
    "resources.html",
    "thank-you.html",
    "privacy.html",
    "terms.html",
    "component-showcase.html",
];

/// Exact-filename exclusion set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipList(BTreeSet<String>);

impl SkipList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// The built-in list of non-article pages.
    pub fn defaults() -> Self {
        Self::new(DEFAULT_SKIP_FILES.iter().copied())
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.0.contains(file_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One candidate document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Full path to the file
    pub path: PathBuf,
    /// Directory the file was found in, relative to the base ("" for the base itself)
    pub dir: String,
}

impl FileEntry {
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Path relative to the base directory, for reporting.
    pub fn display_path(&self) -> String {
        if self.dir.is_empty() {
            self.file_name().to_string()
        } else {
            format!("{}/{}", self.dir, self.file_name())
        }
    }
}

/// What to enumerate.
#[derive(Debug, Clone)]
pub struct FileSetSpec {
    pub base_dir: PathBuf,
    pub subdirs: Vec<String>,
    pub extension: String,
    pub skip: SkipList,
}

impl FileSetSpec {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            subdirs: Vec::new(),
            extension: "html".to_string(),
            skip: SkipList::defaults(),
        }
    }

    pub fn with_subdirs<I, S>(mut self, subdirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdirs = subdirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_skip(mut self, skip: SkipList) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Enumerate the file set.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectoryNotFound` if the base directory does not exist,
    /// or an I/O error if a directory cannot be read.
    pub fn enumerate(&self) -> Result<FileSet> {
        if !self.base_dir.is_dir() {
            return Err(Error::DirectoryNotFound {
                path: self.base_dir.clone(),
            });
        }

        let mut set = FileSet::default();
        self.collect(&self.base_dir, "", &mut set)?;

        for subdir in &self.subdirs {
            let dir = self.base_dir.join(subdir);
            if !dir.is_dir() {
                tracing::debug!(dir = %dir.display(), "Subdirectory not present, skipping");
                continue;
            }
            self.collect(&dir, subdir, &mut set)?;
        }

        Ok(set)
    }

    fn collect(&self, dir: &Path, label: &str, set: &mut FileSet) -> Result<()> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            if path.is_file() && self.matches_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            let entry = FileEntry {
                path,
                dir: label.to_string(),
            };
            if self.skip.contains(entry.file_name()) {
                set.skipped.push(entry);
            } else {
                set.documents.push(entry);
            }
        }
        Ok(())
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }
}

/// The enumerated documents plus the ones excluded by the skip list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileSet {
    pub documents: Vec<FileEntry>,
    pub skipped: Vec<FileEntry>,
}

impl FileSet {
    /// Move skipped entries accepted by `admit` back into `documents`,
    /// after the regular documents. Returns how many moved.
    pub fn readmit<F>(&mut self, mut admit: F) -> usize
    where
        F: FnMut(&FileEntry) -> bool,
    {
        let (readmitted, still_skipped): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.skipped).into_iter().partition(|e| admit(e));
        self.skipped = still_skipped;
        let moved = readmitted.len();
        self.documents.extend(readmitted);
        moved
    }
}
