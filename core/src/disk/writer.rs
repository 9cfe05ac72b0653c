use crate::error::{Result, ScaffoldError};
use std::path::Path;

pub async fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ScaffoldError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::trace!(path = %path.display(), "File written");
    Ok(())
}

pub async fn ensure_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ScaffoldError::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })
}
