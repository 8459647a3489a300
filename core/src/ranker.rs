use crate::index::Index;
use crate::query::Query;
use crate::{DocId, Document};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Upper bound on the number of documents a query returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Score and rank documents for `query`, keeping the top
/// [`MAX_RESULT_DOCUMENT_COUNT`] results.
pub fn rank(query: &Query, index: &Index) -> Vec<Document> {
    rank_top_k(query, index, MAX_RESULT_DOCUMENT_COUNT)
}

/// Score and rank documents for `query`, keeping the top `k` results.
///
/// Relevance is the sum of `tf * idf` over the query's plus-words; any
/// document containing a minus-word is disqualified outright. Ordering is
/// deterministic: descending relevance, ties by descending rating, then
/// ascending document id.
pub fn rank_top_k(query: &Query, index: &Index, k: usize) -> Vec<Document> {
    let mut relevance: HashMap<DocId, f64> = HashMap::new();
    for word in &query.plus_words {
        let Some(freqs) = index.document_frequencies(word) else {
            continue;
        };
        let idf = inverse_document_frequency(index.document_count(), freqs.len());
        for (&doc_id, &term_freq) in freqs {
            *relevance.entry(doc_id).or_insert(0.0) += term_freq * idf;
        }
    }

    for word in &query.minus_words {
        let Some(freqs) = index.document_frequencies(word) else {
            continue;
        };
        for &doc_id in freqs.keys() {
            relevance.remove(&doc_id);
        }
    }

    let mut matched: Vec<Document> = relevance
        .into_iter()
        .map(|(id, relevance)| Document {
            id,
            relevance,
            // every id in the frequency table has a rating entry
            rating: index.rating(id).unwrap_or(0),
        })
        .collect();

    matched.sort_by(compare_documents);
    matched.truncate(k);
    matched
}

/// `ln(N / df)`. Only called for words present in the index, so `df >= 1`.
fn inverse_document_frequency(total_docs: u32, docs_with_word: usize) -> f64 {
    (f64::from(total_docs) / docs_with_word as f64).ln()
}

fn compare_documents(lhs: &Document, rhs: &Document) -> Ordering {
    rhs.relevance
        .partial_cmp(&lhs.relevance)
        .unwrap_or(Ordering::Equal)
        .then_with(|| rhs.rating.cmp(&lhs.rating))
        .then_with(|| lhs.id.cmp(&rhs.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: DocId, relevance: f64, rating: i32) -> Document {
        Document { id, relevance, rating }
    }

    #[test]
    fn ties_break_by_rating_then_id() {
        let mut docs = vec![doc(3, 0.5, 1), doc(1, 0.5, 4), doc(2, 0.5, 4)];
        docs.sort_by(compare_documents);
        let ids: Vec<DocId> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn idf_is_zero_for_ubiquitous_words() {
        assert_eq!(inverse_document_frequency(4, 4), 0.0);
        assert!(inverse_document_frequency(4, 1) > 0.0);
    }
}
