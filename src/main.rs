mod author;
mod classify;
mod cli;
mod cli_help;
mod config;
mod dashboard;
mod decay;
mod error;
mod git;
mod matrix;
mod report_helpers;
mod scan;
mod util;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "skm=debug" } else { "skm=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Init { out, force } => config::run_init(&out, force),
        Commands::Scan {
            repo,
            config,
            out,
            now,
        } => scan::run(&repo, &config, &out, now.as_deref()),
        Commands::Matrix { input, out, json } => matrix::run(&input.scan, &out, json),
        Commands::Dashboard { input, out } => dashboard::run(&input.scan, &out),
        Commands::Top {
            input,
            skill,
            limit,
            json,
        } => matrix::run_top(&input.scan, skill.as_deref(), limit, json),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "skm", &mut std::io::stdout());
            Ok(())
        }
    }
}
