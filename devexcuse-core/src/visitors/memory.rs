use super::{VisitorCount, VisitorError, VisitorStore};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-local counter, lost on restart.
#[derive(Debug, Default)]
pub struct MemoryVisitorStore {
    count: AtomicU64,
}

impl MemoryVisitorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisitorStore for MemoryVisitorStore {
    async fn count(&self) -> Result<VisitorCount, VisitorError> {
        Ok(VisitorCount {
            count: self.count.load(Ordering::SeqCst),
        })
    }

    async fn increment(&self) -> Result<VisitorCount, VisitorError> {
        let count = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(VisitorCount { count })
    }
}
