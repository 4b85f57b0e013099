// tfidf-keywords: TF-IDF keyword extraction against a precomputed IDF corpus.
//
// This is the library root. Text is segmented into tokens, counted into a
// per-document term-frequency table, weighted by corpus IDF and ranked.

pub mod config;
pub mod error;
pub mod keywords;
pub mod output;

pub use error::{KeywordError, Result};
pub use keywords::corpus::FrequencyTable;
pub use keywords::extractor::Extractor;
pub use keywords::ranker::{ScoredWord, DEFAULT_TOP_K};
pub use keywords::segment::{JiebaSegmenter, WhitespaceSegmenter};
pub use keywords::stopwords::StopWordFilter;
pub use keywords::term_freq::{TermFrequency, TermFrequencyBuilder};
pub use keywords::traits::{Segmenter, Token};
