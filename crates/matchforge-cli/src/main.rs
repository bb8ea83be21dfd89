//! `matchforge` - run practice-match sessions from the terminal.

mod output;
mod simulate;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use matchforge::{ConfigError, PlanError, PlanFailure, SessionConfig};

#[derive(Parser)]
#[command(name = "matchforge", version, about = "Practice-match court assignment")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run auto-generated rounds and print matches and count tables
    Simulate(simulate::SimulateArgs),

    /// Validate a configuration file
    Check {
        /// Configuration file (TOML or YAML)
        config: PathBuf,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("{0}")]
    NoPairing(PlanFailure),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Simulate(args) => simulate::run(args),
        Command::Check { config } => check(&config),
    }
}

fn check(path: &Path) -> Result<(), CliError> {
    let config = SessionConfig::load(path)?;
    config.validate()?;
    println!(
        "{} {} players on team A, {} on team B, {} doubles pairs",
        "configuration ok:".green().bold(),
        config.teams.team_a,
        config.teams.team_b,
        config.teams.pairs_a.len() + config.teams.pairs_b.len(),
    );
    Ok(())
}
