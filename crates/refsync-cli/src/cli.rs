//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Keep tsconfig project references in sync with workspace dependencies
#[derive(Parser, Debug)]
#[command(name = "refsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check that project references match workspace dependencies
    ///
    /// Exits 1 when any tsconfig is out of sync.
    Check {
        /// Print a unified diff for each out-of-sync file
        #[arg(long)]
        diff: bool,
    },

    /// Rewrite tsconfig files to match workspace dependencies
    Write,
}
