// Keyword ranking: score = term frequency × corpus IDF, highest first.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::corpus::FrequencyTable;
use super::term_freq::TermFrequency;

/// Number of keywords returned when the caller doesn't ask for a count.
pub const DEFAULT_TOP_K: usize = 10;

/// A word and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: String,
    pub score: f64,
}

impl ScoredWord {
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Descending by score; equal scores fall back to the word so output is
/// reproducible.
pub fn by_score_desc(a: &ScoredWord, b: &ScoredWord) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.word.cmp(&b.word))
}

/// Score every word in `tf` against `corpus` and keep the best `top_k`.
///
/// Fewer than `top_k` candidates means all of them are returned.
pub fn rank(tf: &TermFrequency, corpus: &FrequencyTable, top_k: usize) -> Vec<ScoredWord> {
    let mut scored: Vec<ScoredWord> = tf
        .iter()
        .map(|(word, freq)| ScoredWord::new(word, freq * corpus.lookup(word)))
        .collect();

    scored.sort_unstable_by(by_score_desc);
    scored.truncate(top_k);
    scored
}
