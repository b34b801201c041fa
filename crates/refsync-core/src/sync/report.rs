//! Run reports and drift summaries
//!
//! A run produces plain data. Nothing here prints or terminates; the CLI
//! renders the report and `main` owns the exit.

/// Which of the two operations is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report drift and leave files untouched
    Check,
    /// Rewrite drifted files in place
    Write,
}

/// What happened to a single config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOutcome {
    /// Current bytes differ from the canonical form
    pub out_of_sync: bool,
    /// The file was rewritten
    pub written: bool,
}

/// One config file whose content did not match its canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftEntry {
    /// Path relative to the workspace root
    pub file: String,
    /// Unified diff against the canonical form (check mode only)
    pub diff: Option<String>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub mode: Mode,
    pub drifted: Vec<DriftEntry>,
    pub exit_code: i32,
    pub message: Option<String>,
}

impl RunReport {
    /// True when no file drifted.
    pub fn in_sync(&self) -> bool {
        self.drifted.is_empty()
    }
}

/// Remediation hint appended when a check finds drift.
pub const CHECK_HINT: &str = "You can run \"refsync write\" to fix them.";

/// Fold the drifted-file list into the run verdict.
pub fn summarize(mode: Mode, drifted: Vec<DriftEntry>) -> RunReport {
    let (exit_code, message) = match (mode, drifted.is_empty()) {
        (Mode::Check, false) => (
            1,
            Some(format!(
                "Project references are not in sync with dependencies.\n{CHECK_HINT}"
            )),
        ),
        (Mode::Check, true) => (0, None),
        (Mode::Write, false) => (
            0,
            Some("Project references were synced with dependencies.".to_string()),
        ),
        (Mode::Write, true) => (
            0,
            Some("Project references are in sync with dependencies.".to_string()),
        ),
    };

    RunReport {
        mode,
        drifted,
        exit_code,
        message,
    }
}
