//! Shared test utilities for the refsync workspace.
//!
//! Standardised workspace fixtures so crate test suites do not each
//! hand-roll directory layouts. Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`workspace`]: [`TestWorkspace`] builder plus a static in-memory
//!   [`WorkspaceProvider`](refsync_workspace::WorkspaceProvider)

pub mod workspace;

pub use workspace::{StaticProvider, TestWorkspace};
