//! Concurrent tsconfig discovery
//!
//! One existence probe per package, fanned out through a `JoinSet`. The
//! index records every package, present or not, so reference computation
//! treats "package without a config" and "name yarn does not know" the
//! same way: both resolve to nothing.

use std::collections::BTreeMap;

use refsync_fs::{NormalizedPath, WorkspaceFile, io};
use refsync_workspace::WorkspaceGraph;
use tokio::task::JoinSet;

use crate::error::Result;

/// Where each workspace package keeps its tsconfig, if it has one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigIndex {
    entries: BTreeMap<String, Option<NormalizedPath>>,
}

impl ConfigIndex {
    /// Path of the package's config. `None` when the package has no
    /// config or the name is not a workspace package at all.
    pub fn config_path(&self, package: &str) -> Option<&NormalizedPath> {
        self.entries.get(package).and_then(|entry| entry.as_ref())
    }

    /// Whether the package was probed at all.
    pub fn contains(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a probe result.
    pub fn insert(&mut self, package: impl Into<String>, path: Option<NormalizedPath>) {
        self.entries.insert(package.into(), path);
    }
}

/// Probe every package directory for a tsconfig, concurrently.
///
/// Fails fast: the first probe error drops the set, aborting the
/// remaining tasks.
pub async fn locate(graph: &WorkspaceGraph, root: &NormalizedPath) -> Result<ConfigIndex> {
    let mut tasks = JoinSet::new();
    for package in graph.packages() {
        let name = package.name.clone();
        let candidate = root
            .join(&package.location)
            .join(WorkspaceFile::TsConfig.as_str());
        tasks.spawn(async move {
            let present = io::probe(&candidate).await?;
            tracing::debug!(package = %name, present, "Probed for tsconfig");
            Ok::<_, refsync_fs::Error>((name, present.then_some(candidate)))
        });
    }

    let mut index = ConfigIndex::default();
    while let Some(joined) = tasks.join_next().await {
        let (name, path) = joined??;
        index.insert(name, path);
    }
    Ok(index)
}
