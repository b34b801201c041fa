//! Workspace root discovery

use std::path::Path;

use crate::constants::WorkspaceFile;
use crate::{Error, NormalizedPath, Result};

/// Find the workspace root by walking up from `start`.
///
/// The nearest directory (including `start` itself) containing a
/// `package.json` wins. The starting point is canonicalized first so
/// relative inputs and symlinked working directories resolve to the same
/// root.
pub fn find_workspace_root(start: &Path) -> Result<NormalizedPath> {
    let canonical = dunce::canonicalize(start).map_err(|e| Error::io(start, e))?;

    let mut current = Some(canonical.as_path());
    while let Some(dir) = current {
        if dir.join(WorkspaceFile::PackageManifest).is_file() {
            let root = NormalizedPath::new(dir);
            tracing::debug!(root = %root, "workspace root located");
            return Ok(root);
        }
        current = dir.parent();
    }

    Err(Error::WorkspaceRootNotFound)
}
