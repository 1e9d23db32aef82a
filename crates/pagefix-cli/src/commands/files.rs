//! The `files` command

use colored::Colorize;
use pagefix_core::Settings;

use crate::error::Result;

/// Print the documents a run would cover, and the ones the skip list drops.
pub fn run_files(settings: &Settings, json: bool) -> Result<()> {
    let set = settings.file_set_spec().enumerate()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&set)?);
        return Ok(());
    }

    println!(
        "{} Documents under {}",
        "=>".blue().bold(),
        settings.public_dir.display().to_string().cyan()
    );
    for entry in &set.documents {
        println!("   {}", entry.display_path());
    }
    if !set.skipped.is_empty() {
        println!();
        println!("{}", "Skipped".yellow().bold());
        for entry in &set.skipped {
            println!("   {}", entry.display_path().dimmed());
        }
    }
    println!();
    println!(
        "{} document(s), {} skipped",
        set.documents.len(),
        set.skipped.len()
    );
    Ok(())
}
