//! Run statistics

use std::collections::BTreeMap;

use serde::Serialize;

/// What happened to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Changed,
    Unchanged,
    Skipped,
    Failed,
}

/// Per-file record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub status: FileStatus,
    pub action: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub counts: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// A file that could not be processed, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: String,
    pub reason: String,
}

/// Totals for one run. Built up by the runner and handed back at the end;
/// nothing persists between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub pass: String,
    pub dry_run: bool,
    pub files_processed: usize,
    pub files_changed: usize,
    pub files_skipped: usize,
    /// Per-category counts, sorted by category name
    pub categories: BTreeMap<String, usize>,
    pub errors: Vec<FileError>,
    pub files: Vec<FileReport>,
}

impl RunStats {
    pub fn new(pass: &str, dry_run: bool) -> Self {
        Self {
            pass: pass.to_string(),
            dry_run,
            ..Self::default()
        }
    }

    pub fn add_counts(&mut self, counts: &BTreeMap<String, usize>) {
        for (category, n) in counts {
            *self.categories.entry(category.clone()).or_default() += n;
        }
    }

    pub fn count(&self, category: &str) -> usize {
        self.categories.get(category).copied().unwrap_or(0)
    }

    /// Sum over all categories.
    pub fn total_count(&self) -> usize {
        self.categories.values().sum()
    }

    pub fn files_failed(&self) -> usize {
        self.errors.len()
    }

    pub fn files_unchanged(&self) -> usize {
        self.files_processed
            .saturating_sub(self.files_changed)
            .saturating_sub(self.files_failed())
    }

    /// Every file seen, including skipped ones.
    pub fn files_total(&self) -> usize {
        self.files_processed + self.files_skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_counts_accumulates() {
        let mut stats = RunStats::new("claims", false);
        stats.add_counts(&BTreeMap::from([("branding".to_string(), 2)]));
        stats.add_counts(&BTreeMap::from([
            ("branding".to_string(), 1),
            ("url_fix".to_string(), 3),
        ]));

        assert_eq!(stats.count("branding"), 3);
        assert_eq!(stats.count("missing"), 0);
        assert_eq!(stats.total_count(), 6);
    }

    #[test]
    fn test_unchanged_excludes_changed_and_failed() {
        let stats = RunStats {
            files_processed: 10,
            files_changed: 4,
            files_skipped: 2,
            errors: vec![FileError {
                path: "a.html".into(),
                reason: "x".into(),
            }],
            ..RunStats::default()
        };

        assert_eq!(stats.files_unchanged(), 5);
        assert_eq!(stats.files_total(), 12);
    }
}
