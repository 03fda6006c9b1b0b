use std::sync::atomic::{AtomicU64, Ordering};

/// Tracks how many excuses have been handed out since startup.
///
/// The count is informational only; implementations may be approximate
/// under concurrent use.
pub trait ServeCounter: Send + Sync {
    fn record_served(&self);

    fn served(&self) -> u64;
}

#[derive(Debug, Default)]
pub struct AtomicServeCounter {
    served: AtomicU64,
}

impl AtomicServeCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ServeCounter for AtomicServeCounter {
    fn record_served(&self) {
        self.served.fetch_add(1, Ordering::Relaxed);
    }

    fn served(&self) -> u64 {
        self.served.load(Ordering::Relaxed)
    }
}
