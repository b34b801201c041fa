//! Core sync engine for refsync
//!
//! Orchestrates a run: query the workspace graph, locate package
//! tsconfigs, compute reference lists, and converge or report each file.

pub mod error;
pub mod locate;
pub mod references;
pub mod sync;

pub use error::{Error, Result};
pub use locate::{ConfigIndex, locate};
pub use sync::{DriftEntry, FileOutcome, Mode, RunReport, SyncEngine, run, summarize};
