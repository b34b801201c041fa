//! Check and write command implementations

use std::path::Path;

use colored::Colorize;

use refsync_core::{Mode, RunReport, run};
use refsync_fs::find_workspace_root;
use refsync_workspace::YarnProvider;

use crate::error::Result;

/// Run the check command.
///
/// Reports drift without touching any file. Returns the process exit
/// code: 0 when everything is in sync, 1 when any config drifted.
pub async fn run_check(path: &Path, show_diff: bool) -> Result<i32> {
    println!("{} Checking project references...", "=>".blue().bold());

    let root = find_workspace_root(path)?;
    let provider = YarnProvider::new();
    let report = run(&root, Mode::Check, &provider).await?;

    if report.in_sync() {
        println!(
            "{} Project references are in sync. No drift detected.",
            "OK".green().bold()
        );
    } else {
        println!(
            "{} Project references have drifted:",
            "DRIFTED".red().bold()
        );
        for entry in &report.drifted {
            println!("   {} {}", "!".red(), entry.file.cyan());
        }
        if show_diff {
            for entry in &report.drifted {
                if let Some(diff) = &entry.diff {
                    println!();
                    println!("{}", entry.file.cyan());
                    print!("{}", diff);
                }
            }
        }
    }

    render_message(&report);
    Ok(report.exit_code)
}

/// Run the write command.
///
/// Rewrites every drifted config. Always returns exit code 0.
pub async fn run_write(path: &Path) -> Result<i32> {
    println!(
        "{} Synchronizing project references...",
        "=>".blue().bold()
    );

    let root = find_workspace_root(path)?;
    let provider = YarnProvider::new();
    let report = run(&root, Mode::Write, &provider).await?;

    for entry in &report.drifted {
        println!("   {} {}", "+".green(), entry.file.cyan());
    }
    render_message(&report);
    Ok(report.exit_code)
}

/// Print the report's summary message, on stderr when the run failed.
fn render_message(report: &RunReport) {
    if let Some(message) = &report.message {
        if report.exit_code == 0 {
            println!("{} {}", "OK".green().bold(), message);
        } else {
            eprintln!("{}", message);
        }
    }
}
