//! Sequential batch runner

use pagefix_fs::FileSet;

use crate::document::Document;
use crate::pass::DocumentPass;
use crate::preview::unified_diff;
use crate::stats::{FileError, FileReport, FileStatus, RunStats};

/// Options for a run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Compute and report changes without writing anything
    pub dry_run: bool,
    /// Attach a unified diff to each changed file's report
    pub diff: bool,
}

/// Receives each file's report as soon as the file is done.
pub trait Reporter {
    fn file_done(&mut self, report: &FileReport);
}

/// Reporter that discards everything.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn file_done(&mut self, _report: &FileReport) {}
}

/// Runs one pass over a file set, one document at a time.
///
/// Each document is read, processed, and written back before the next one
/// is opened, so an interrupted run leaves a prefix of the set updated.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchRunner {
    options: RunOptions,
}

impl BatchRunner {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    pub fn run<P>(&self, pass: &P, files: &FileSet, reporter: &mut dyn Reporter) -> RunStats
    where
        P: DocumentPass + ?Sized,
    {
        let mut stats = RunStats::new(pass.name(), self.options.dry_run);
        tracing::info!(
            pass = pass.name(),
            documents = files.documents.len(),
            dry_run = self.options.dry_run,
            "Starting run"
        );

        for entry in &files.skipped {
            stats.files_skipped += 1;
            let report = FileReport {
                path: entry.display_path(),
                status: FileStatus::Skipped,
                action: "skip list".to_string(),
                counts: Default::default(),
                diff: None,
            };
            reporter.file_done(&report);
            stats.files.push(report);
        }

        for entry in &files.documents {
            let report = match Document::open(entry) {
                Ok(document) => self.process_document(pass, document, &mut stats),
                Err(e) => {
                    tracing::warn!(path = %entry.path.display(), error = %e, "Cannot read document");
                    fail(&mut stats, entry.display_path(), e.to_string())
                }
            };
            reporter.file_done(&report);
            stats.files.push(report);
        }

        tracing::info!(
            pass = pass.name(),
            processed = stats.files_processed,
            changed = stats.files_changed,
            errors = stats.errors.len(),
            "Run finished"
        );
        stats
    }

    fn process_document<P>(&self, pass: &P, mut document: Document, stats: &mut RunStats) -> FileReport
    where
        P: DocumentPass + ?Sized,
    {
        stats.files_processed += 1;
        let result = pass.process(&document);
        let path = document.display_path().to_string();

        if let Some(reason) = result.failure {
            tracing::warn!(path = %path, reason = %reason, "Document left unmodified");
            stats.add_counts(&result.counts);
            return fail(stats, path, reason);
        }

        let new_text = result.text.filter(|t| t != document.text());
        let Some(new_text) = new_text else {
            stats.add_counts(&result.counts);
            return FileReport {
                path,
                status: FileStatus::Unchanged,
                action: result.action,
                counts: result.counts,
                diff: None,
            };
        };

        let diff = self
            .options
            .diff
            .then(|| unified_diff(&path, document.text(), &new_text));

        if !self.options.dry_run {
            if let Err(e) = document.save(new_text) {
                tracing::warn!(path = %path, error = %e, "Cannot write document");
                return fail(stats, path, e.to_string());
            }
        }

        tracing::debug!(path = %path, action = %result.action, "Document changed");
        stats.files_changed += 1;
        stats.add_counts(&result.counts);
        FileReport {
            path,
            status: FileStatus::Changed,
            action: result.action,
            counts: result.counts,
            diff,
        }
    }
}

fn fail(stats: &mut RunStats, path: String, reason: String) -> FileReport {
    stats.errors.push(FileError {
        path: path.clone(),
        reason: reason.clone(),
    });
    FileReport {
        path,
        status: FileStatus::Failed,
        action: reason,
        counts: Default::default(),
        diff: None,
    }
}
