use serde::{Deserialize, Serialize};

/// A single excuse and the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcuseRecord {
    pub text: String,
    pub category: String,
}

impl ExcuseRecord {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Category comparison used by selection (ASCII case-insensitive).
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }

    /// The fixed record served by `/excuse/devil`, independent of the corpus.
    pub fn devil() -> Self {
        Self::new("I deleted production.", "devil")
    }
}
