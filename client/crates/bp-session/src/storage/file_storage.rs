use crate::{Result as SessionErrorResult, SessionError, SessionStorage};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    #[track_caller]
    pub fn path_for(&self, key: &str) -> SessionErrorResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(SessionError::invalid_key(key));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl SessionStorage for FileStorage {
    async fn read(&self, key: &str) -> SessionErrorResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session file at {path:?}");
                Ok(None)
            }
            Err(e) => Err(SessionError::file_read(path, e)),
        }
    }

    /// Writes using the atomic pattern:
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    async fn write(&self, key: &str, value: &str) -> SessionErrorResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SessionError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .await
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(SessionError::atomic_rename(temp_path, final_path, e));
        }

        debug!("Wrote session file {final_path:?} ({} bytes)", value.len());
        Ok(())
    }

    async fn erase(&self, key: &str) -> SessionErrorResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("Removed session file {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_remove(path, e)),
        }
    }
}
