//! Drift detection and rewriting of project references

mod engine;
mod report;

pub use engine::{SyncEngine, run};
pub use report::{CHECK_HINT, DriftEntry, FileOutcome, Mode, RunReport, summarize};
