use crate::conf::DevExcuseConfig;
use crate::corpus::Corpus;
use crate::proxy::handlers::AppState;
use crate::selection::{AtomicServeCounter, IndexSource, SeededIndex, SelectionEngine, ThreadRngIndex};
use crate::visitors::{FileVisitorStore, MemoryVisitorStore, VisitorStore};
use std::sync::Arc;

/// Assemble the shared state every worker reads from.
pub fn build_app_state(config: Arc<DevExcuseConfig>) -> AppState {
    let corpus = Arc::new(Corpus::builtin());

    let index_source: Arc<dyn IndexSource> = match config.selection.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded excuse selection");
            Arc::new(SeededIndex::new(seed))
        }
        None => Arc::new(ThreadRngIndex::default()),
    };

    let engine = SelectionEngine::new(corpus, index_source, Arc::new(AtomicServeCounter::new()));
    let visitors = build_visitor_store(&config);

    tracing::debug!(
        excuses = engine.corpus().len(),
        categories = engine.list_categories().len(),
        "corpus loaded"
    );

    AppState::new(engine, visitors, config)
}

pub fn build_visitor_store(config: &DevExcuseConfig) -> Arc<dyn VisitorStore> {
    match &config.visitors.path {
        Some(path) => {
            tracing::info!(path = %path.display(), "visitor count persisted to file");
            Arc::new(FileVisitorStore::new(path))
        }
        None => Arc::new(MemoryVisitorStore::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn state_uses_builtin_corpus() {
        let state = build_app_state(Arc::new(DevExcuseConfig::default()));

        assert_eq!(state.engine.corpus().len(), Corpus::builtin().len());
        assert_eq!(state.engine.served(), 0);
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let mut config = DevExcuseConfig::default();
        config.selection.seed = Some(7);
        let config = Arc::new(config);

        let a = build_app_state(config.clone());
        let b = build_app_state(config);

        assert_eq!(a.engine.pick_many(5, None), b.engine.pick_many(5, None));
    }

    #[tokio::test]
    async fn visitor_store_follows_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DevExcuseConfig::default();
        config.visitors.path = Some(dir.path().join("visitors.json"));

        let store = build_visitor_store(&config);
        store.increment().await.unwrap();

        assert!(dir.path().join("visitors.json").exists());
    }
}
