//! Async file reads, probes, and atomic writes

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::{Error, NormalizedPath, Result};

/// Read the full text content of a file.
pub async fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native)
        .await
        .map_err(|e| Error::io(&native, e))
}

/// Check whether a file exists.
///
/// A clean not-found is `Ok(false)`. Any other failure (permissions,
/// unreadable mounts) propagates as an error instead of masquerading as
/// absence.
pub async fn probe(path: &NormalizedPath) -> Result<bool> {
    let native = path.to_native();
    fs::try_exists(&native)
        .await
        .map_err(|e| Error::io(&native, e))
}

/// Write content atomically to a file.
///
/// Uses the write-to-temp-then-rename strategy so readers never observe a
/// partially written file. The temp file lives in the target directory to
/// keep the rename on one filesystem.
pub async fn write_atomic(path: &NormalizedPath, content: &str) -> Result<()> {
    let native = path.to_native();

    if let Some(parent) = native.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        native
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native.with_file_name(&temp_name);

    let mut temp_file = fs::File::create(&temp_path)
        .await
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .write_all(content.as_bytes())
        .await
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .await
        .map_err(|e| Error::io(&temp_path, e))?;
    drop(temp_file);

    fs::rename(&temp_path, &native)
        .await
        .map_err(|e| Error::io(&native, e))?;

    Ok(())
}
