//! Workspace graph discovery for refsync
//!
//! Wraps the package manager's workspace metadata in a typed dependency
//! graph and hides the invocation behind the `WorkspaceProvider` trait,
//! so the sync engine never shells out directly.

pub mod error;
pub mod graph;
pub mod provider;
pub mod yarn;

pub use error::{Error, Result};
pub use graph::{WorkspaceGraph, WorkspacePackage};
pub use provider::WorkspaceProvider;
pub use yarn::YarnProvider;
