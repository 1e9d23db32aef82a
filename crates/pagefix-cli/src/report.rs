//! Console output for runs

use colored::Colorize;
use pagefix_core::{FileReport, FileStatus, Reporter, RunStats};

/// Which pass a report belongs to; decides the wording of each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    Pitch,
    Claims,
}

/// Prints one line per changed or failed document as the run goes.
#[derive(Debug)]
pub struct ConsoleReporter {
    kind: PassKind,
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn new(kind: PassKind, dry_run: bool) -> Self {
        Self { kind, dry_run }
    }

    fn changed_line(&self, report: &FileReport) -> String {
        match (self.kind, self.dry_run) {
            (PassKind::Pitch, false) => {
                format!("{}: {}", report.action.green().bold(), report.path)
            }
            (PassKind::Pitch, true) => format!(
                "{} Would apply {}: {}",
                "[DRY]".yellow().bold(),
                report.action,
                report.path
            ),
            (PassKind::Claims, false) => format!(
                "{} {} ({})",
                "FIXED:".green().bold(),
                report.path,
                report.action
            ),
            (PassKind::Claims, true) => format!(
                "{} Would fix {} ({})",
                "[DRY]".yellow().bold(),
                report.path,
                report.action
            ),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn file_done(&mut self, report: &FileReport) {
        match report.status {
            FileStatus::Changed => {
                println!("  {}", self.changed_line(report));
                if let Some(diff) = &report.diff {
                    print_diff(diff);
                }
            }
            FileStatus::Failed => {
                println!(
                    "  {} {}: {}",
                    "ERROR".red().bold(),
                    report.path,
                    report.action
                );
            }
            FileStatus::Unchanged | FileStatus::Skipped => {
                tracing::debug!(path = %report.path, action = %report.action, "No change");
            }
        }
    }
}

fn print_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}

/// Print the end-of-run summary for the pitch pass.
pub fn print_pitch_summary(stats: &RunStats, version: &str) {
    println!();
    println!(
        "{} Summary (block version {})",
        "=>".blue().bold(),
        version.cyan()
    );
    let mode = if stats.dry_run { " (dry run)" } else { "" };
    summary_row("Type A (replaced)", stats.count("type_a"));
    summary_row("Type B (inserted)", stats.count("type_b"));
    summary_row("Refreshed", stats.count("refreshed"));
    summary_row("Unchanged", stats.files_unchanged());
    summary_row("Skipped", stats.files_skipped);
    summary_row("Errors", stats.files_failed());
    summary_row("Total", stats.files_total());
    println!("   {} file(s) changed{}", stats.files_changed, mode);
}

/// Print the end-of-run summary for the claims pass.
pub fn print_claims_summary(stats: &RunStats) {
    println!();
    println!("{} Summary", "=>".blue().bold());
    summary_row("Files processed", stats.files_processed);
    summary_row(
        if stats.dry_run {
            "Files to change"
        } else {
            "Files changed"
        },
        stats.files_changed,
    );
    summary_row("Skipped", stats.files_skipped);
    summary_row("Errors", stats.files_failed());

    if !stats.categories.is_empty() {
        println!();
        println!("   {}", "Replacements by category".bold());
        for (category, n) in &stats.categories {
            summary_row(category, *n);
        }
    }
    println!();
    summary_row("Total replacements", stats.total_count());
}

fn summary_row(label: &str, value: usize) {
    println!("   {:<22} {}", format!("{label}:"), value);
}
