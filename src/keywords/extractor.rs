// Extractor: owns the IDF corpus and the segmenter, answers keyword queries.
//
// Both collaborators are loaded once and never mutated, so one Extractor can
// serve any number of documents, from any number of threads.

use std::path::Path;

use tracing::debug;

use super::corpus::FrequencyTable;
use super::ranker::{rank, ScoredWord, DEFAULT_TOP_K};
use super::segment::JiebaSegmenter;
use super::term_freq::TermFrequencyBuilder;
use super::traits::Segmenter;
use crate::error::Result;

pub struct Extractor {
    corpus: FrequencyTable,
    segmenter: Box<dyn Segmenter>,
    term_freq: TermFrequencyBuilder,
}

impl Extractor {
    /// Load the IDF corpus and the segmenter dictionary (comma-separated
    /// paths allowed). Fails if either resource can't be loaded.
    pub fn new(idf_path: impl AsRef<Path>, dictionary_paths: &str) -> Result<Self> {
        let corpus = FrequencyTable::load(idf_path)?;
        let segmenter = JiebaSegmenter::load(dictionary_paths)?;
        Ok(Self::from_parts(corpus, Box::new(segmenter)))
    }

    /// Assemble an extractor from an already-loaded corpus and any segmenter.
    pub fn from_parts(corpus: FrequencyTable, segmenter: Box<dyn Segmenter>) -> Self {
        Self {
            corpus,
            segmenter,
            term_freq: TermFrequencyBuilder::default(),
        }
    }

    /// Replace the term-frequency policy (stop words, minimum length,
    /// fragment handling).
    pub fn with_term_frequency(mut self, term_freq: TermFrequencyBuilder) -> Self {
        self.term_freq = term_freq;
        self
    }

    pub fn corpus(&self) -> &FrequencyTable {
        &self.corpus
    }

    /// The `top_k` highest-scoring keywords of `text`, best first.
    /// `None` means `DEFAULT_TOP_K`.
    pub fn keywords(&self, text: &str, top_k: Option<usize>) -> Vec<ScoredWord> {
        let top_k = top_k.unwrap_or(DEFAULT_TOP_K);
        let tokens = self.segmenter.segment(text);
        let tf = self.term_freq.build(&tokens);
        let keywords = rank(&tf, &self.corpus, top_k);

        debug!(
            tokens = tokens.len(),
            candidates = tf.len(),
            returned = keywords.len(),
            "Extracted keywords"
        );

        keywords
    }
}
