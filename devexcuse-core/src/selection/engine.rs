use crate::corpus::{Corpus, ExcuseRecord};
use crate::selection::{
    AtomicServeCounter, IndexSource, SearchHit, SearchOutcome, ServeCounter, ThreadRngIndex,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Random picks, category listing and text search over a fixed corpus.
///
/// The engine holds no mutable state of its own apart from the injected
/// serve counter, so a single instance is shared by every request.
pub struct SelectionEngine {
    corpus: Arc<Corpus>,
    index_source: Arc<dyn IndexSource>,
    counter: Arc<dyn ServeCounter>,
}

impl SelectionEngine {
    pub fn new(
        corpus: Arc<Corpus>,
        index_source: Arc<dyn IndexSource>,
        counter: Arc<dyn ServeCounter>,
    ) -> Self {
        Self {
            corpus,
            index_source,
            counter,
        }
    }

    /// Engine backed by the thread-local RNG and a fresh counter.
    pub fn with_thread_rng(corpus: Arc<Corpus>) -> Self {
        Self::new(
            corpus,
            Arc::new(ThreadRngIndex::default()),
            Arc::new(AtomicServeCounter::new()),
        )
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Number of successful picks since the counter was created.
    pub fn served(&self) -> u64 {
        self.counter.served()
    }

    /// Pick one excuse uniformly at random, optionally restricted to a
    /// category (case-insensitive). `None` when nothing is eligible.
    pub fn pick_one(&self, category: Option<&str>) -> Option<ExcuseRecord> {
        let eligible: Vec<&ExcuseRecord> = match category {
            Some(category) => self
                .corpus
                .records()
                .iter()
                .filter(|r| r.in_category(category))
                .collect(),
            None => self.corpus.records().iter().collect(),
        };

        if eligible.is_empty() {
            return None;
        }

        let idx = self.index_source.index(eligible.len());
        let picked = eligible.get(idx).map(|r| (*r).clone());

        if picked.is_some() {
            self.counter.record_served();
        } else {
            tracing::warn!(idx, len = eligible.len(), "index source returned out-of-range index");
        }

        picked
    }

    /// `count` independent picks. Draws may repeat; picks that find nothing
    /// are dropped, so the result can be shorter than `count`.
    pub fn pick_many(&self, count: usize, category: Option<&str>) -> Vec<ExcuseRecord> {
        (0..count).filter_map(|_| self.pick_one(category)).collect()
    }

    /// Distinct categories in ascending byte order, exact case preserved.
    pub fn list_categories(&self) -> Vec<String> {
        self.corpus
            .records()
            .iter()
            .map(|r| r.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Case-insensitive substring search over excuse text, in corpus order.
    pub fn search(&self, query: &str) -> SearchOutcome {
        if query.is_empty() {
            return SearchOutcome::no_query();
        }

        let needle = query.to_lowercase();
        let hits: Vec<SearchHit> = self
            .corpus
            .records()
            .iter()
            .filter(|r| r.text.to_lowercase().contains(&needle))
            .map(|r| SearchHit {
                excuse: r.text.clone(),
                category: r.category.clone(),
            })
            .collect();

        if hits.is_empty() {
            SearchOutcome::no_matches(query)
        } else {
            SearchOutcome::found(query, hits)
        }
    }
}
