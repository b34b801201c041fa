//! refsync CLI
//!
//! The command-line interface for keeping tsconfig project references in
//! sync with workspace dependencies. Commands produce a report and an
//! exit code; termination happens here and nowhere else.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

#[tokio::main]
async fn main() {
    let code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            1
        }
    };
    std::process::exit(code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;
    match cli.command {
        Commands::Check { diff } => commands::run_check(&cwd, diff).await,
        Commands::Write => commands::run_write(&cwd).await,
    }
}
