//! pagefix CLI
//!
//! Batch rewrites for marketing HTML: pitch block injection and claim
//! corrections.

mod cli;
mod commands;
mod error;
mod logging;
mod report;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let Some(command) = cli.command.clone() else {
        println!("{} batch HTML rewrites", "pagefix".green().bold());
        println!();
        println!("Run {} for available commands.", "pagefix --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let settings = commands::load_settings(&cwd, &cli)?;

    match command {
        Commands::Pitch {
            block,
            keep_stale,
            run,
        } => commands::run_pitch(settings, block, keep_stale, run),
        Commands::Claims { rules, run } => commands::run_claims(settings, rules, run),
        Commands::Files { json } => commands::run_files(&settings, json),
    }
}
