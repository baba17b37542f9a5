// src/shared/storage.rs
//
// Entities reference uploaded blobs by path. Row lifecycle owns the blobs:
// deleting a parent (or replacing its attachments) should also drop the files
// from disk, but a cleanup failure must never fail the request.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FileStoreError {
    #[error("I/O error: {0}")]
    Io(String),
}

/// Outgoing port for stored-file removal.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn remove(&self, path: &str) -> Result<(), FileStoreError>;
}

/// Blob storage rooted at `MEDIA_ROOT` on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn remove(&self, path: &str) -> Result<(), FileStoreError> {
        let full = self.root.join(path.trim_start_matches('/'));

        match tokio::fs::remove_file(&full).await {
            Ok(()) => Ok(()),
            // Already gone counts as removed.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FileStoreError::Io(e.to_string())),
        }
    }
}

/// Best-effort cleanup: failures are logged and swallowed so the owning row
/// deletion always completes.
pub async fn discard_blobs(store: &dyn FileStore, refs: &[String]) {
    for file_ref in refs {
        if let Err(e) = store.remove(file_ref).await {
            warn!("failed to remove stored file {}: {}", file_ref, e);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_root() -> PathBuf {
        let root = std::env::temp_dir().join(format!("portfolio-media-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&root).unwrap();
        root
    }

    #[tokio::test]
    async fn remove_deletes_existing_file() {
        let root = scratch_root();
        std::fs::write(root.join("shot.png"), b"png").unwrap();

        let store = LocalFileStore::new(root.clone());
        store.remove("shot.png").await.unwrap();

        assert!(!root.join("shot.png").exists());
    }

    #[tokio::test]
    async fn remove_tolerates_missing_file() {
        let store = LocalFileStore::new(scratch_root());
        assert!(store.remove("never-existed.png").await.is_ok());
    }

    #[tokio::test]
    async fn discard_blobs_swallows_failures() {
        struct FailingStore;

        #[async_trait]
        impl FileStore for FailingStore {
            async fn remove(&self, _path: &str) -> Result<(), FileStoreError> {
                Err(FileStoreError::Io("disk on fire".to_string()))
            }
        }

        // Must not panic or propagate.
        discard_blobs(&FailingStore, &["a.png".to_string(), "b.png".to_string()]).await;
    }
}
