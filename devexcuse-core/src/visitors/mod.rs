mod file;
mod memory;

pub use file::FileVisitorStore;
pub use memory::MemoryVisitorStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisitorError {
    #[error("failed to read visitor count from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write visitor count to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("visitor document at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The single persisted visitor document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorCount {
    pub count: u64,
}

/// Single-document visitor counter.
///
/// `increment` must never lose an update, however many callers race it.
#[async_trait]
pub trait VisitorStore: Send + Sync {
    /// Current count. A store that was never written reads as zero.
    async fn count(&self) -> Result<VisitorCount, VisitorError>;

    /// Add one and return the new count.
    async fn increment(&self) -> Result<VisitorCount, VisitorError>;
}
