use serde::Serialize;

/// One search match, shaped the way `/search` clients expect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub excuse: String,
    pub category: String,
}

/// Result of a substring search over the corpus.
///
/// Every variant is a normal value: an empty query and a query without
/// matches are both distinguishable from a hit purely by shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    /// The caller supplied no query at all.
    NoQuery {
        results: Vec<SearchHit>,
        message: String,
    },

    /// A valid query that matched nothing.
    NoMatches {
        results: Vec<SearchHit>,
        message: String,
        query: String,
        count: usize,
    },

    Found {
        excuses: Vec<SearchHit>,
        count: usize,
        query: String,
        message: String,
    },
}

impl SearchOutcome {
    pub fn no_query() -> Self {
        Self::NoQuery {
            results: Vec::new(),
            message: "No search query provided".to_string(),
        }
    }

    pub fn no_matches(query: &str) -> Self {
        Self::NoMatches {
            results: Vec::new(),
            message: format!(
                "No excuses found containing \"{query}\". Try a different search term."
            ),
            query: query.to_string(),
            count: 0,
        }
    }

    pub fn found(query: &str, excuses: Vec<SearchHit>) -> Self {
        let count = excuses.len();
        Self::Found {
            excuses,
            count,
            query: query.to_string(),
            message: format!("Found {count} excuse(s) containing \"{query}\""),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            SearchOutcome::NoQuery { .. } => 0,
            SearchOutcome::NoMatches { count, .. } | SearchOutcome::Found { count, .. } => *count,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}
