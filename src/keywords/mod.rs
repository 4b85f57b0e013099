// Keyword extraction: segmentation, term frequency, IDF lookup, ranking.

pub mod traits;
pub mod segment;
pub mod stopwords;
pub mod term_freq;
pub mod corpus;
pub mod ranker;
pub mod extractor;
