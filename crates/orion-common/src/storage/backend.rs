//! Storage backends

use async_trait::async_trait;
use dashmap::DashMap;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, instrument};

use super::StorageError;
use crate::config::StorageConfig;

/// Where uploaded bytes end up
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store an object and return its public URL
    async fn put(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> Result<String, StorageError>;

    /// Fetch a stored object
    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Remove an object; a missing object is not an error
    async fn delete(&self, path: &str) -> Result<(), StorageError>;
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

// ============================================================================
// Local filesystem
// ============================================================================

/// Stores objects under a directory on the local disk
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.upload_dir, &config.base_url)
    }

    /// Resolve an object path inside the root, refusing to escape it
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe || path.is_empty() {
            return Err(StorageError::Upload(format!("invalid object path: {path}")));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, bytes).await?;

        debug!(path = %target.display(), "Stored object");
        Ok(join_url(&self.base_url, path))
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let target = self.resolve(path)?;
        match tokio::fs::read(&target).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let target = self.resolve(path)?;
        match tokio::fs::remove_file(&target).await {
            Ok(()) => {
                debug!(path = %target.display(), "Removed object");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Keeps objects in memory; used by tests and local runs
#[derive(Debug, Default)]
pub struct MemoryStorage {
    base_url: String,
    objects: DashMap<String, (String, Vec<u8>)>,
}

impl MemoryStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: DashMap::new(),
        }
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.objects.contains_key(path)
    }

    /// Content type recorded for an object
    #[must_use]
    pub fn content_type(&self, path: &str) -> Option<String> {
        self.objects.get(path).map(|entry| entry.0.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
        self.objects
            .insert(path.to_string(), (content_type.to_string(), bytes));
        Ok(join_url(&self.base_url, path))
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.objects.get(path).map(|entry| entry.1.clone()))
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        self.objects.remove(path);
        Ok(())
    }
}
