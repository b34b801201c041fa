//! Error types for refsync-core

use std::path::PathBuf;

/// Result type for refsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a sync run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem failure
    #[error(transparent)]
    Fs(#[from] refsync_fs::Error),

    /// Workspace graph query failure
    #[error(transparent)]
    Workspace(#[from] refsync_workspace::Error),

    /// Style discovery or rendering failure
    #[error(transparent)]
    Tsconfig(#[from] refsync_tsconfig::Error),

    /// A detected tsconfig file failed to parse
    #[error("Invalid tsconfig at {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: refsync_tsconfig::Error,
    },

    /// A worker task was cancelled or panicked
    #[error("Worker task failed: {source}")]
    TaskJoin {
        #[from]
        source: tokio::task::JoinError,
    },
}
