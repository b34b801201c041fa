//! Filesystem primitives for refsync
//!
//! Normalized cross-platform paths, relative path computation, and the
//! small set of async I/O operations the sync engine needs.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod root;

pub use constants::WorkspaceFile;
pub use error::{Error, Result};
pub use path::{NormalizedPath, relative};
pub use root::find_workspace_root;
