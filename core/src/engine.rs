use crate::error::SearchError;
use crate::index::Index;
use crate::query::parse_query;
use crate::ranker::rank;
use crate::stopwords::StopWordFilter;
use crate::{DocId, Document};

/// Facade over the stop-word filter, index, query parser and ranker.
#[derive(Debug, Default)]
pub struct SearchEngine {
    stop_words: StopWordFilter,
    index: Index,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words(text: &str) -> Self {
        Self {
            stop_words: StopWordFilter::from_text(text),
            index: Index::new(),
        }
    }

    /// Add more stop words. Idempotent: repeating a word changes nothing.
    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words.add_from_text(text);
    }

    /// Index a document under a caller-assigned id. An id may be added only
    /// once; re-adding fails rather than silently overwriting.
    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        ratings: &[i32],
    ) -> Result<(), SearchError> {
        if self.index.contains(id) {
            return Err(SearchError::DuplicateDocument(id));
        }
        self.index.add_document(id, text, ratings, &self.stop_words);
        tracing::debug!(id, total = self.index.document_count(), "indexed document");
        Ok(())
    }

    /// Parse `raw_query` and return the highest-ranked matching documents.
    pub fn find_top_documents(&self, raw_query: &str) -> Vec<Document> {
        let query = parse_query(raw_query, &self.stop_words);
        rank(&query, &self.index)
    }

    pub fn document_count(&self) -> u32 {
        self.index.document_count()
    }

    pub fn rating(&self, id: DocId) -> Result<i32, SearchError> {
        self.index.rating(id)
    }
}
