//! The `pitch` command

use std::path::PathBuf;

use colored::Colorize;
use pagefix_core::{BatchRunner, NullReporter, PitchPass, RunOptions, Settings};

use crate::cli::RunArgs;
use crate::error::Result;
use crate::report::{ConsoleReporter, PassKind, print_pitch_summary};

/// Inject the canonical block into every document.
///
/// The block, the file set and the locator are all resolved before the
/// first document is read, so configuration errors never leave a partial run.
pub fn run_pitch(
    mut settings: Settings,
    block: Option<PathBuf>,
    keep_stale: bool,
    args: RunArgs,
) -> Result<()> {
    if let Some(block) = block {
        settings.pitch.block = Some(block);
    }
    settings.pitch.keep_stale |= keep_stale;

    let canonical = settings.load_block()?;
    let pass = PitchPass::from_settings(&canonical, &settings.pitch)?;
    let files = settings.file_set_spec().enumerate()?;

    let runner = BatchRunner::new(RunOptions {
        dry_run: args.dry_run,
        diff: args.diff,
    });

    if args.json {
        let stats = runner.run(&pass, &files, &mut NullReporter);
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "{} Applying pitch block version {} to {} document(s){}",
        "=>".blue().bold(),
        pass.version().cyan(),
        files.documents.len(),
        if args.dry_run { " (dry run)" } else { "" }
    );
    let mut reporter = ConsoleReporter::new(PassKind::Pitch, args.dry_run);
    let stats = runner.run(&pass, &files, &mut reporter);
    print_pitch_summary(&stats, pass.version());
    Ok(())
}
