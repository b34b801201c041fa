//! Error types for refsync-tsconfig

use std::path::PathBuf;

/// Result type for refsync-tsconfig operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in refsync-tsconfig operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Document violates a structural expectation
    #[error("Parse error ({format}): {message}")]
    Parse { format: String, message: String },

    /// Style config file could not be parsed
    #[error("Failed to parse {format} style config at {path}: {message}")]
    StyleParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// Style config file could not be read
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON syntax error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn style(
        path: impl Into<PathBuf>,
        format: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::StyleParse {
            path: path.into(),
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
