use crate::stopwords::StopWordFilter;
use crate::tokenizer::split_into_words;
use std::collections::BTreeSet;

/// A parsed query: words that add relevance and words that disqualify.
///
/// The sets are disjoint by construction: the minus prefix is stripped
/// before a word is classified, so the same word cannot land in both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

/// Parse `text` into plus- and minus-word sets.
///
/// A leading `-` marks a minus word. Stop words are discarded after the
/// prefix is stripped. A token that is just `-` carries no word and is
/// dropped; the rest of the query is still parsed.
pub fn parse_query(text: &str, stop_words: &StopWordFilter) -> Query {
    let mut query = Query::default();
    for token in split_into_words(text) {
        let (word, is_minus) = match token.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (token, false),
        };
        if word.is_empty() {
            tracing::debug!("dropping bare '-' query token");
            continue;
        }
        if stop_words.is_stop_word(word) {
            continue;
        }
        if is_minus {
            query.minus_words.insert(word.to_string());
        } else {
            query.plus_words.insert(word.to_string());
        }
    }
    query
}
