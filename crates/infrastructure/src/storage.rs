// Object-storage collaborator. The service layer never moves blob bytes
// itself: callers upload first and messages record the resulting public URL.

use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;

/// Default bucket upload cap, matching the original system's 10 MB limit.
pub const MAX_OBJECT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("object of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("storage error: {0}")]
    Backend(#[from] anyhow::Error),
}

#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores the bytes under `path` and returns the public URL.
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, UploadError>;
}

/// In-memory bucket used by tests and local runs.
pub struct MemoryObjectStore {
    base_url: String,
    limit: usize,
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryObjectStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_limit(base_url, MAX_OBJECT_BYTES)
    }

    /// Bucket with a configured cap other than the default.
    pub fn with_limit(base_url: impl Into<String>, limit: usize) -> Self {
        Self {
            base_url: base_url.into(),
            limit,
            objects: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.objects.read().await.get(path).cloned()
    }
}

#[async_trait::async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, UploadError> {
        if bytes.len() > self.limit {
            return Err(UploadError::TooLarge {
                size: bytes.len(),
                limit: self.limit,
            });
        }
        self.objects
            .write()
            .await
            .insert(path.to_string(), bytes.to_vec());
        Ok(format!("{}/{}", self.base_url.trim_end_matches('/'), path))
    }
}
