//! Workspace dependency graph
//!
//! The graph mirrors the document `yarn workspaces info --json` emits: a
//! map of package names to their location and workspace-internal
//! dependencies. Yarn's key order is the workspace declaration order and
//! the root config renders references in that order, so deserialization
//! goes through a visitor that keeps entries as a sequence instead of
//! collecting them into a map.

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::error::Result;

/// One workspace package as reported by the package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePackage {
    /// Package name from its manifest, e.g. `@scope/core`
    pub name: String,
    /// Location relative to the workspace root, e.g. `packages/core`
    pub location: String,
    /// Names of dependencies that are themselves workspace packages
    pub workspace_dependencies: Vec<String>,
}

impl WorkspacePackage {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        dependencies: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            workspace_dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Shape of a single value in the yarn output map.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageEntry {
    location: String,
    #[serde(default)]
    workspace_dependencies: Vec<String>,
}

/// Every workspace package, in the package manager's declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceGraph {
    packages: Vec<WorkspacePackage>,
}

impl WorkspaceGraph {
    /// Build a graph from an already ordered package list.
    pub fn from_packages(packages: Vec<WorkspacePackage>) -> Self {
        Self { packages }
    }

    /// Parse the JSON document emitted by `yarn workspaces info --json`.
    pub fn parse(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// All packages in declaration order.
    pub fn packages(&self) -> &[WorkspacePackage] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Look up a package by name.
    pub fn get(&self, name: &str) -> Option<&WorkspacePackage> {
        self.packages.iter().find(|p| p.name == name)
    }
}

impl<'de> Deserialize<'de> for WorkspaceGraph {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GraphVisitor;

        impl<'de> Visitor<'de> for GraphVisitor {
            type Value = WorkspaceGraph;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a map of package names to workspace metadata")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut packages = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, entry)) = access.next_entry::<String, PackageEntry>()? {
                    packages.push(WorkspacePackage {
                        name,
                        location: entry.location,
                        workspace_dependencies: entry.workspace_dependencies,
                    });
                }
                Ok(WorkspaceGraph { packages })
            }
        }

        deserializer.deserialize_map(GraphVisitor)
    }
}
