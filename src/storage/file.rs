//! File-backed key-value store

use super::KeyValueStore;
use crate::error::{GomarketError, GomarketResult};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Stores each key as `<dir>/<hash>.json`
///
/// Keys are hashed so that characters such as `@` and `:` never reach the
/// filesystem.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub async fn open(dir: impl Into<PathBuf>) -> GomarketResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(|e| {
            GomarketError::io(format!("creating store directory {}", dir.display()), e)
        })?;

        Ok(Self { dir })
    }

    /// Root directory of this store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the value for `key`
    pub fn key_path(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        let result = hasher.finalize();

        // 16 hex chars (8 bytes) is plenty for a handful of keys
        self.dir.join(format!("{}.json", hex::encode(&result[..8])))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> GomarketResult<Option<Vec<u8>>> {
        let path = self.key_path(key);

        if !path.exists() {
            debug!("No stored value for {}", key);
            return Ok(None);
        }

        let bytes = fs::read(&path)
            .await
            .map_err(|e| GomarketError::io(format!("reading {} from {}", key, path.display()), e))?;

        Ok(Some(bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> GomarketResult<()> {
        let path = self.key_path(key);

        fs::write(&path, value)
            .await
            .map_err(|e| GomarketError::io(format!("writing {} to {}", key, path.display()), e))?;

        debug!("Stored {} bytes for {}", value.len(), key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> GomarketResult<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path).await.map_err(|e| {
                GomarketError::io(format!("removing {} at {}", key, path.display()), e)
            })?;
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
