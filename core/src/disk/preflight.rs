use crate::error::{Result, ScaffoldError};
use std::path::Path;

pub async fn prepare_target(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ScaffoldError::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut entries =
        tokio::fs::read_dir(dir)
            .await
            .map_err(|source| ScaffoldError::DirectoryRead {
                path: dir.to_path_buf(),
                source,
            })?;

    let first = entries
        .next_entry()
        .await
        .map_err(|source| ScaffoldError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

    if let Some(entry) = first {
        tracing::debug!(
            path = %dir.display(),
            entry = %entry.file_name().to_string_lossy(),
            "Target directory is not empty"
        );
        return Err(ScaffoldError::DirectoryNotEmpty {
            path: dir.to_path_buf(),
        });
    }

    tracing::debug!(path = %dir.display(), "Target directory ready");
    Ok(())
}
