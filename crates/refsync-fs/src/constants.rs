//! Well-known file names inside a workspace.

use std::path::Path;

/// File names the tool keys on when walking a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceFile {
    /// The `package.json` manifest marking the workspace root
    PackageManifest,
    /// A `tsconfig.json` TypeScript project configuration
    TsConfig,
}

impl WorkspaceFile {
    /// Get the string representation of the file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PackageManifest => "package.json",
            Self::TsConfig => "tsconfig.json",
        }
    }
}

impl AsRef<Path> for WorkspaceFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for WorkspaceFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for WorkspaceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
