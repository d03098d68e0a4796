//! Backup file access.
//!
//! The backup is one JSON document holding the entire survey. It is never
//! appended to; every save replaces it through a temp file + rename so a
//! reader never sees a half-written document. The temp file and, on unix,
//! the containing directory are synced before `save` returns.

use super::types::Survey;
use crate::error::{Result, SurveyError};

use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Reads the survey stored at `path`.
///
/// Returns `Ok(None)` when no backup exists yet. Any other read failure, or a
/// document that does not parse, is an error.
pub async fn load(path: &Path) -> Result<Option<Survey>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SurveyError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let survey = serde_json::from_slice(&bytes).map_err(|source| SurveyError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(survey))
}

/// Writes `survey` to `path`, replacing whatever was there.
pub async fn save(path: &Path, survey: &Survey) -> Result<()> {
    let mut encoded = serde_json::to_vec_pretty(survey).map_err(SurveyError::Encode)?;
    encoded.push(b'\n');

    let tmp_path = temp_path_for(path);

    let mut file = tokio::fs::File::create(&tmp_path)
        .await
        .map_err(|source| SurveyError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    let written = async {
        file.write_all(&encoded).await?;
        file.sync_all().await
    }
    .await;
    drop(file);

    if let Err(source) = written {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(SurveyError::Io {
            path: tmp_path,
            source,
        });
    }

    if let Err(source) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(SurveyError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    sync_dir(&parent_dir(path)).await
}

/// Flushes the directory entry so the rename itself survives a crash.
#[cfg(unix)]
async fn sync_dir(dir: &Path) -> Result<()> {
    let io_err = |source| SurveyError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let handle = tokio::fs::File::open(dir).await.map_err(io_err)?;
    handle.sync_all().await.map_err(io_err)
}

// Directories cannot be opened as files here; the rename is all we get.
#[cfg(not(unix))]
async fn sync_dir(_dir: &Path) -> Result<()> {
    Ok(())
}

/// Directory holding `path`; a bare file name lives in the working directory.
pub(crate) fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Sibling of `path` used as the write target before the rename.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "survey".to_string());
    path.with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()))
}
