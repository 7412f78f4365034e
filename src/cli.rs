/// CLI argument definitions for the `skm` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "skm",
    version,
    about = "Per-author skill maps mined from git history"
)]
pub struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Scan file argument shared by the commands that read one.
#[derive(Args)]
pub struct ScanInput {
    /// Scan JSON written by `skm scan`
    #[arg(long)]
    pub scan: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter configuration file
    #[command(long_about = cli_help::INIT)]
    Init {
        /// Where to write the configuration (.toml, .yml or .yaml)
        #[arg(long, default_value = "config.toml")]
        out: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Scan a repository and write skill scores as JSON
    #[command(long_about = cli_help::SCAN)]
    Scan {
        /// Path inside the git repository (default: current directory)
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Configuration file (TOML or YAML)
        #[arg(short, long)]
        config: PathBuf,

        /// Where to write the scan JSON
        #[arg(long, default_value = "scan.json")]
        out: PathBuf,

        /// Instant decay is measured from (default: now)
        #[arg(long)]
        now: Option<String>,
    },

    /// Export skill matrix, trend and raw contribution CSVs
    #[command(long_about = cli_help::MATRIX)]
    Matrix {
        #[command(flatten)]
        input: ScanInput,

        /// Output directory
        #[arg(long, default_value = "artifacts")]
        out: PathBuf,

        /// Print the normalized matrix as JSON instead of the artifact table
        #[arg(long)]
        json: bool,
    },

    /// Build the static HTML dashboard
    #[command(long_about = cli_help::DASHBOARD)]
    Dashboard {
        #[command(flatten)]
        input: ScanInput,

        /// Output directory
        #[arg(long, default_value = "artifacts/dashboard")]
        out: PathBuf,
    },

    /// Rank authors overall or for one skill
    #[command(long_about = cli_help::TOP)]
    Top {
        #[command(flatten)]
        input: ScanInput,

        /// Rank by this skill only
        #[arg(long)]
        skill: Option<String>,

        /// Show only the top N authors (default: 10)
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout
    Completions {
        /// Target shell
        shell: Shell,
    },
}
