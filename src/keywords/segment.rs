// Segmenter implementations.
//
// JiebaSegmenter is the dictionary-based default. It runs in search mode:
// long words are also emitted as their dictionary sub-words, which are
// tagged as fragments so the term-frequency step can decide whether to count
// them. WhitespaceSegmenter is for scripts that already put spaces between
// words.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use jieba_rs::{Jieba, TokenizeMode};
use tracing::{info, warn};

use super::traits::{Segmenter, Token};
use crate::error::{KeywordError, Result};

/// Dictionary-based segmenter backed by jieba.
pub struct JiebaSegmenter {
    jieba: Jieba,
    /// Use the HMM to guess words missing from the dictionary
    pub hmm: bool,
}

impl Default for JiebaSegmenter {
    /// Uses jieba's bundled dictionary.
    fn default() -> Self {
        Self {
            jieba: Jieba::new(),
            hmm: false,
        }
    }
}

impl JiebaSegmenter {
    /// Load one or more dictionaries, given as a comma-separated list of
    /// paths. Entries use jieba's `<word> [freq] [tag]` format.
    pub fn load(paths: &str) -> Result<Self> {
        let mut jieba = Jieba::empty();
        let mut loaded = 0usize;

        for path in paths.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            load_dictionary(&mut jieba, Path::new(path))?;
            loaded += 1;
        }

        if loaded == 0 {
            return Err(KeywordError::configuration("no dictionary path given"));
        }

        Ok(Self { jieba, hmm: false })
    }

    pub fn with_hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }
}

fn load_dictionary(jieba: &mut Jieba, path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|source| KeywordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    jieba.load_dict(&mut reader).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Cannot load dictionary");
        KeywordError::Dictionary {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    info!(path = %path.display(), "Loaded segmenter dictionary");
    Ok(())
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<Token> {
        // Spans of the plain segmentation; anything else search mode emits
        // is a sub-word of one of them.
        let full_spans: HashSet<(usize, usize)> = self
            .jieba
            .tokenize(text, TokenizeMode::Default, self.hmm)
            .into_iter()
            .map(|t| (t.start, t.end))
            .collect();

        self.jieba
            .tokenize(text, TokenizeMode::Search, self.hmm)
            .into_iter()
            .filter(|t| !t.word.trim().is_empty())
            .map(|t| Token {
                text: t.word.to_string(),
                full_word: full_spans.contains(&(t.start, t.end)),
            })
            .collect()
    }
}

/// Splits on anything that isn't a letter or digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Vec<Token> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(Token::word)
            .collect()
    }
}
