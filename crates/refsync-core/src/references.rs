//! Reference computation
//!
//! Turns dependency lists into `references` entries. A dependency without
//! a config is skipped rather than reported: a workspace package that
//! opts out of TypeScript is not an error, and a name the package manager
//! never mentioned resolves to nothing the same way.

use refsync_fs::{NormalizedPath, relative};
use refsync_tsconfig::ProjectReference;
use refsync_workspace::{WorkspaceGraph, WorkspacePackage};

use crate::locate::ConfigIndex;

/// References for one package's config, in dependency declaration order.
pub fn package_references(
    package: &WorkspacePackage,
    index: &ConfigIndex,
    config_dir: &NormalizedPath,
) -> Vec<ProjectReference> {
    package
        .workspace_dependencies
        .iter()
        .filter_map(|dependency| match index.config_path(dependency) {
            Some(path) => Some(ProjectReference::new(relative(config_dir, path).as_str())),
            None => {
                tracing::debug!(
                    package = %package.name,
                    dependency = %dependency,
                    "Skipping dependency without a tsconfig"
                );
                None
            }
        })
        .collect()
}

/// References for the root config: every package with a config, in the
/// graph's declaration order, relative to the workspace root.
pub fn root_references(
    graph: &WorkspaceGraph,
    index: &ConfigIndex,
    root: &NormalizedPath,
) -> Vec<ProjectReference> {
    graph
        .packages()
        .iter()
        .filter_map(|package| index.config_path(&package.name))
        .map(|path| ProjectReference::new(relative(root, path).as_str()))
        .collect()
}
