//! The `claims` command

use std::path::PathBuf;

use colored::Colorize;
use pagefix_core::{BatchRunner, ClaimsPass, NullReporter, RunOptions, Settings};

use crate::cli::RunArgs;
use crate::error::Result;
use crate::report::{ConsoleReporter, PassKind, print_claims_summary};

/// Apply the rule book to every document.
pub fn run_claims(mut settings: Settings, rules: Option<PathBuf>, args: RunArgs) -> Result<()> {
    if let Some(rules) = rules {
        settings.rules.path = Some(rules);
    }

    let book = settings.load_rule_book()?;
    let mut files = settings.file_set_spec().enumerate()?;
    let pass = ClaimsPass::new(book).with_skip_list(settings.skip_list());
    pass.readmit_named(&mut files);

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
        "{} Applying {} rule(s) to {} document(s){}",
        "=>".blue().bold(),
        pass.book().rule_count(),
        files.documents.len(),
        if args.dry_run { " (dry run)" } else { "" }
    );
    let mut reporter = ConsoleReporter::new(PassKind::Claims, args.dry_run);
    let stats = runner.run(&pass, &files, &mut reporter);
    print_claims_summary(&stats);
    Ok(())
}
