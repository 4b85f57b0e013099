// Per-document term frequency.
//
// Counts content tokens (long enough, not stop words) and normalizes each
// count by the number of surviving tokens. Length is measured in characters,
// not bytes, so a two-character Chinese word counts as two.

use std::collections::HashMap;

use super::stopwords::StopWordFilter;
use super::traits::Token;

/// Normalized term frequencies for a single document.
#[derive(Debug, Clone, Default)]
pub struct TermFrequency {
    freqs: HashMap<String, f64>,
    /// Number of tokens that survived filtering
    total: usize,
}

impl TermFrequency {
    /// Frequency of `word`, or `None` if it never occurred.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.freqs.get(word).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.freqs.iter().map(|(w, &f)| (w.as_str(), f))
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }
}

/// Builds a `TermFrequency` from a token stream.
#[derive(Debug, Clone)]
pub struct TermFrequencyBuilder {
    pub stop_words: StopWordFilter,
    /// Tokens shorter than this many characters are dropped
    pub min_chars: usize,
    /// Count sub-word fragments from search-mode segmentation
    pub keep_fragments: bool,
}

impl Default for TermFrequencyBuilder {
    fn default() -> Self {
        Self {
            stop_words: StopWordFilter::default(),
            min_chars: 2,
            keep_fragments: true,
        }
    }
}

impl TermFrequencyBuilder {
    pub fn new(stop_words: StopWordFilter) -> Self {
        Self {
            stop_words,
            ..Self::default()
        }
    }

    fn is_candidate(&self, token: &Token) -> bool {
        if !token.full_word && !self.keep_fragments {
            return false;
        }
        token.text.chars().count() >= self.min_chars && !self.stop_words.is_stop_word(&token.text)
    }

    /// Count and normalize. A document with no surviving tokens yields an
    /// empty table rather than dividing by zero.
    pub fn build(&self, tokens: &[Token]) -> TermFrequency {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut total = 0usize;

        for token in tokens.iter().filter(|t| self.is_candidate(t)) {
            *counts.entry(token.text.clone()).or_insert(0) += 1;
            total += 1;
        }

        if total == 0 {
            return TermFrequency::default();
        }

        let freqs = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / total as f64))
            .collect();

        TermFrequency { freqs, total }
    }
}
