use crate::tokenizer::split_into_words;
use std::collections::HashSet;

/// Membership-only set of stop words. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct StopWordFilter {
    words: HashSet<String>,
}

impl StopWordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        let mut filter = Self::default();
        filter.add_from_text(text);
        filter
    }

    /// Insert every word of `text` into the stop set. Re-adding a word that
    /// is already present is a no-op, so repeated calls are idempotent.
    pub fn add_from_text(&mut self, text: &str) {
        for word in split_into_words(text) {
            self.words.insert(word.to_string());
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Drop stop words from `tokens`, preserving order.
    pub fn filter<'a>(&self, tokens: Vec<&'a str>) -> Vec<&'a str> {
        tokens
            .into_iter()
            .filter(|word| !self.is_stop_word(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_and_preserves_order() {
        let stops = StopWordFilter::from_text("и в на");
        assert!(stops.is_stop_word("и"));
        assert!(!stops.is_stop_word("кот"));
        assert_eq!(
            stops.filter(vec!["кот", "и", "пёс"]),
            vec!["кот", "пёс"]
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        let stops = StopWordFilter::from_text("the");
        assert!(!stops.is_stop_word("The"));
    }
}
