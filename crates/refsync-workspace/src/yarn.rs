//! Yarn workspace provider
//!
//! Queries the dependency graph with a single `yarn --silent workspaces
//! info --json` invocation at the workspace root. `--silent` keeps yarn's
//! wrapper lines out of stdout so the payload parses as plain JSON.

use std::process::Stdio;

use async_trait::async_trait;
use refsync_fs::NormalizedPath;
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::graph::WorkspaceGraph;
use crate::provider::WorkspaceProvider;

/// Provider backed by yarn classic workspaces.
pub struct YarnProvider;

impl YarnProvider {
    /// Create a new YarnProvider instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for YarnProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkspaceProvider for YarnProvider {
    fn id(&self) -> &str {
        "yarn"
    }

    async fn query(&self, root: &NormalizedPath) -> Result<WorkspaceGraph> {
        let output = Command::new("yarn")
            .args(["--silent", "workspaces", "info", "--json"])
            .current_dir(root.to_native())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| Error::Spawn { source })?;

        if !output.status.success() {
            return Err(Error::QueryFailed {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let graph = WorkspaceGraph::parse(&stdout)?;
        tracing::debug!(packages = graph.len(), "Queried workspace graph");
        Ok(graph)
    }
}
