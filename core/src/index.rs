use crate::error::SearchError;
use crate::stopwords::StopWordFilter;
use crate::tokenizer::split_into_words;
use crate::DocId;
use std::collections::HashMap;

/// Inverted index: word → per-document term frequency, plus a rating store.
///
/// Term frequency is the share of a document's non-stop words taken by one
/// word, so the frequencies stored for a document sum to 1.0. No ordering of
/// the maps is relied upon; ranking applies its own explicit sort.
#[derive(Debug, Default)]
pub struct Index {
    word_to_document_freqs: HashMap<String, HashMap<DocId, f64>>,
    document_ratings: HashMap<DocId, i32>,
    document_count: u32,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one document. Duplicate words accumulate their frequency. A
    /// document whose words are all stop words is still counted and rated,
    /// but contributes no term frequencies (guarding the division below).
    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        ratings: &[i32],
        stop_words: &StopWordFilter,
    ) {
        let words = stop_words.filter(split_into_words(text));
        if words.is_empty() {
            tracing::debug!(id, "document is empty after stop-word filtering");
        } else {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                *self
                    .word_to_document_freqs
                    .entry(word.to_string())
                    .or_default()
                    .entry(id)
                    .or_insert(0.0) += inv_word_count;
            }
        }
        self.document_ratings.insert(id, average_rating(ratings));
        self.document_count += 1;
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.document_ratings.contains_key(&id)
    }

    /// Per-document term frequencies for `word`, or `None` for a word that
    /// was never indexed. Lookup of an unknown word is not an error.
    pub fn document_frequencies(&self, word: &str) -> Option<&HashMap<DocId, f64>> {
        self.word_to_document_freqs.get(word)
    }

    pub fn document_count(&self) -> u32 {
        self.document_count
    }

    /// Stored rating for `id`, or `UnknownDocument` if it was never added.
    pub fn rating(&self, id: DocId) -> Result<i32, SearchError> {
        self.document_ratings
            .get(&id)
            .copied()
            .ok_or(SearchError::UnknownDocument(id))
    }
}

/// Integer average truncated toward zero; 0 when no ratings were supplied.
fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rating_truncates_toward_zero() {
        assert_eq!(average_rating(&[1, 2, 3, 4, 5]), 3);
        assert_eq!(average_rating(&[1, 2]), 1);
        assert_eq!(average_rating(&[-1, -2]), -1);
        assert_eq!(average_rating(&[]), 0);
    }

    #[test]
    fn empty_document_is_counted_but_not_indexed() {
        let stops = StopWordFilter::from_text("и в на");
        let mut index = Index::new();
        index.add_document(7, "и в на", &[4], &stops);
        assert_eq!(index.document_count(), 1);
        assert_eq!(index.rating(7), Ok(4));
        assert!(index.document_frequencies("и").is_none());
    }
}
