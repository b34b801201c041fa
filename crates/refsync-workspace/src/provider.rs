//! WorkspaceProvider trait

use async_trait::async_trait;
use refsync_fs::NormalizedPath;

use crate::Result;
use crate::graph::WorkspaceGraph;

/// A source of workspace dependency metadata.
///
/// The sync engine talks to the package manager only through this trait,
/// so tests can substitute a static graph and support for other package
/// managers can be added without touching sync logic.
#[async_trait]
pub trait WorkspaceProvider: Send + Sync {
    /// Short identifier used in logs.
    fn id(&self) -> &str;

    /// Query the full dependency graph for the workspace at `root`.
    async fn query(&self, root: &NormalizedPath) -> Result<WorkspaceGraph>;
}
