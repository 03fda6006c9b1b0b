mod data;
mod record;

pub use record::ExcuseRecord;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("excuse #{index} has empty text")]
    EmptyText { index: usize },

    #[error("excuse #{index} has empty category")]
    EmptyCategory { index: usize },
}

/// Immutable, ordered collection of excuses.
///
/// Records are addressed by position only. Duplicate texts are allowed and
/// are treated as independent records.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<ExcuseRecord>,
}

impl Corpus {
    /// Build a corpus, rejecting any record with empty text or category.
    pub fn new(records: Vec<ExcuseRecord>) -> Result<Self, CorpusError> {
        for (index, record) in records.iter().enumerate() {
            if record.text.trim().is_empty() {
                return Err(CorpusError::EmptyText { index });
            }
            if record.category.trim().is_empty() {
                return Err(CorpusError::EmptyCategory { index });
            }
        }

        Ok(Self { records })
    }

    /// The excuses compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            records: data::builtin_records(),
        }
    }

    pub fn records(&self) -> &[ExcuseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
