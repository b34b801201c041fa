//! Error types for refsync-workspace

/// Result type for refsync-workspace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying the workspace graph
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The package manager binary could not be started
    #[error("Failed to run yarn: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    /// The package manager ran but reported failure
    #[error("yarn workspaces info failed with exit code {code}: {stderr}")]
    QueryFailed { code: i32, stderr: String },

    /// The package manager output did not match the expected shape
    #[error("Invalid workspace metadata: {source}")]
    Metadata {
        #[from]
        source: serde_json::Error,
    },
}
