// Corpus IDF table: precomputed word weights with a median fallback.
//
// The corpus file is plain text, one `<word> <float>` entry per line. The
// median of all weights is computed once at load time and returned for any
// word the corpus has never seen, so unknown words are neither free nor
// infinitely rare.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use super::ranker::{by_score_desc, ScoredWord};
use crate::error::{KeywordError, Result};

/// Word → IDF weight table with a fixed fallback weight.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    weights: HashMap<String, f64>,
    /// Fallback for unknown words; never recomputed after construction
    median: f64,
}

impl FrequencyTable {
    /// Load a corpus file. Any malformed line aborts the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "Cannot open IDF corpus");
            KeywordError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let table = Self::from_reader(BufReader::new(file), path)?;
        info!(
            path = %path.display(),
            entries = table.len(),
            median = table.median,
            "Loaded IDF corpus"
        );
        Ok(table)
    }

    /// Parse corpus entries from any buffered reader. `origin` names the
    /// source in error messages.
    pub fn from_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut weights = HashMap::new();
        let mut all_weights = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| KeywordError::Io {
                path: origin.to_path_buf(),
                source,
            })?;

            let Some((word, weight)) = parse_line(&line) else {
                warn!(path = %origin.display(), line = idx + 1, "Malformed IDF corpus line");
                return Err(KeywordError::MalformedLine {
                    path: origin.to_path_buf(),
                    line: idx + 1,
                    content: line,
                });
            };

            weights.insert(word.to_string(), weight);
            all_weights.push(weight);
        }

        let median = index_median(&mut all_weights).ok_or_else(|| KeywordError::EmptyCorpus {
            path: origin.to_path_buf(),
        })?;

        Ok(Self { weights, median })
    }

    /// Build a table directly from (word, weight) pairs.
    ///
    /// Returns `None` when `entries` is empty, since there is no median.
    pub fn from_weights<I, S>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut weights = HashMap::new();
        let mut all_weights = Vec::new();
        for (word, weight) in entries {
            weights.insert(word.into(), weight);
            all_weights.push(weight);
        }
        let median = index_median(&mut all_weights)?;
        Some(Self { weights, median })
    }

    /// Weight for `word`, or the median when the corpus doesn't contain it.
    pub fn lookup(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(self.median)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// All corpus entries with their raw weights, highest weight first.
    pub fn words(&self) -> Vec<ScoredWord> {
        let mut words: Vec<ScoredWord> = self
            .weights
            .iter()
            .map(|(word, &weight)| ScoredWord::new(word.clone(), weight))
            .collect();
        words.sort_unstable_by(by_score_desc);
        words
    }
}

/// Parse `<word> <whitespace> <float>`. Trailing fields are ignored.
/// Weights must be finite and non-negative.
fn parse_line(line: &str) -> Option<(&str, f64)> {
    let mut fields = line.split_whitespace();
    let word = fields.next()?;
    let weight: f64 = fields.next()?.parse().ok()?;
    if !weight.is_finite() || weight < 0.0 {
        return None;
    }
    Some((word, weight))
}

/// Element at index `len / 2` of the ascending-sorted weights. For even
/// counts this is the upper of the two middle elements, not their average.
fn index_median(weights: &mut [f64]) -> Option<f64> {
    if weights.is_empty() {
        return None;
    }
    weights.sort_unstable_by(f64::total_cmp);
    Some(weights[weights.len() / 2])
}
