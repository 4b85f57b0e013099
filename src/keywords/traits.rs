// Segmenter trait: the word segmentation capability.
//
// Keyword extraction only needs an ordered token stream. Any segmenter that
// can produce one plugs in here; the default is dictionary-based (jieba),
// with a plain whitespace splitter for space-delimited scripts.

use serde::{Deserialize, Serialize};

/// A single unit of text produced by a segmenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// False for sub-word fragments emitted in search mode
    pub full_word: bool,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            full_word: true,
        }
    }

    pub fn fragment(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            full_word: false,
        }
    }
}

/// Trait for splitting a document into tokens.
///
/// Implementations are shared read-only across extraction calls, so they must
/// be safe for concurrent use.
pub trait Segmenter: Send + Sync {
    /// Split `text` into an ordered sequence of tokens.
    fn segment(&self, text: &str) -> Vec<Token>;
}
