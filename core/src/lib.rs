use serde::{Deserialize, Serialize};

pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod stopwords;
pub mod tokenizer;

pub type DocId = u32;

/// A ranked search result. Results are independent copies of the index
/// state: callers may mutate or discard them freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    /// TF-IDF relevance, recomputed per query.
    pub relevance: f64,
    /// Average of the ratings supplied at insertion, 0 if none were.
    pub rating: i32,
}

pub use engine::SearchEngine;
pub use error::SearchError;
pub use index::Index;
pub use query::Query;
pub use ranker::MAX_RESULT_DOCUMENT_COUNT;
pub use stopwords::StopWordFilter;
