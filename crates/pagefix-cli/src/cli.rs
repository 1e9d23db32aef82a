//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// pagefix - Batch rewrites for marketing HTML pages
#[derive(Parser, Debug)]
#[command(name = "pagefix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to ./pagefix.toml when present)
    #[arg(short, long, global = true, env = "PAGEFIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the HTML documents
    #[arg(short, long, global = true)]
    pub public_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Inject or refresh the canonical pitch block
    ///
    /// Replaces an existing pitch section in place (Type A), or inserts the
    /// block before the FAQ section (Type B) together with the stylesheet it
    /// needs.
    Pitch {
        /// Canonical block source (TOML, JSON or YAML)
        #[arg(short, long)]
        block: Option<PathBuf>,

        /// Leave blocks carrying an older version alone
        #[arg(long)]
        keep_stale: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Apply claim-correction rules
    Claims {
        /// Rule book to use instead of the built-in one
        #[arg(short, long)]
        rules: Option<PathBuf>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// List the documents a run would cover
    Files {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Flags shared by the rewriting commands
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print a unified diff for each changed document
    #[arg(long)]
    pub diff: bool,

    /// Output the summary as JSON for scripting
    #[arg(long)]
    pub json: bool,
}
