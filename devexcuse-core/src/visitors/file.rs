use super::{VisitorCount, VisitorError, VisitorStore};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Visitor count kept as a `{"count": n}` JSON document on disk.
///
/// Reads and writes go through one async mutex, so the read-modify-write in
/// `increment` is serialized within the process. Writes land in a sibling
/// temp file that is renamed over the document.
#[derive(Debug)]
pub struct FileVisitorStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileVisitorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<VisitorCount, VisitorError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(VisitorCount::default()),
            Err(source) => {
                return Err(VisitorError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&raw).map_err(|source| VisitorError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn store(&self, doc: VisitorCount) -> Result<(), VisitorError> {
        let write_err = |source: std::io::Error| VisitorError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let body = serde_json::to_vec(&doc).map_err(|e| write_err(e.into()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, body).await.map_err(write_err)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(write_err)?;

        Ok(())
    }
}

#[async_trait]
impl VisitorStore for FileVisitorStore {
    async fn count(&self) -> Result<VisitorCount, VisitorError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn increment(&self) -> Result<VisitorCount, VisitorError> {
        let _guard = self.lock.lock().await;

        let mut doc = self.load().await?;
        doc.count += 1;
        self.store(doc).await?;

        tracing::debug!(count = doc.count, path = %self.path.display(), "visitor count incremented");
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_file_reads_as_zero() {
        let dir = tempdir().unwrap();
        let store = FileVisitorStore::new(dir.path().join("visitors.json"));

        assert_eq!(store.count().await.unwrap(), VisitorCount { count: 0 });
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn increment_persists_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("visitors.json");
        let store = FileVisitorStore::new(&path);

        assert_eq!(store.increment().await.unwrap().count, 1);
        assert_eq!(store.increment().await.unwrap().count, 2);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"count":2}"#);

        // A fresh store over the same file picks up where the last one stopped.
        let reopened = FileVisitorStore::new(&path);
        assert_eq!(reopened.count().await.unwrap().count, 2);
    }

    #[tokio::test]
    async fn malformed_document_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("visitors.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileVisitorStore::new(&path).count().await.unwrap_err();
        assert!(matches!(err, VisitorError::Malformed { .. }), "{err}");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_are_not_lost() {
        let dir = tempdir().unwrap();
        let store = Arc::new(FileVisitorStore::new(dir.path().join("visitors.json")));

        let tasks: Vec<_> = (0..32)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.increment().await.unwrap() })
            })
            .collect();

        let mut seen = Vec::new();
        for task in tasks {
            seen.push(task.await.unwrap().count);
        }
        seen.sort_unstable();

        assert_eq!(seen, (1..=32).collect::<Vec<u64>>());
        assert_eq!(store.count().await.unwrap().count, 32);
    }
}
