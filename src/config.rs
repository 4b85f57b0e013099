use std::env;
use std::path::PathBuf;

use crate::error::{KeywordError, Result};

/// Keywords printed by the CLI when `-n` isn't given.
pub const DEFAULT_CLI_TOP_K: usize = 30;

/// Central configuration loaded from environment variables.
///
/// The binary loads a .env file first via dotenvy; command-line flags
/// override whatever is found here.
#[derive(Debug, Clone)]
pub struct Config {
    /// IDF corpus file (TFIDF_IDF_PATH)
    pub idf_path: PathBuf,
    /// Segmenter dictionary, comma-separated paths allowed (TFIDF_DICT_PATH)
    pub dictionary_path: String,
    /// How many keywords to report (TFIDF_TOP_K)
    pub top_k: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default; only a malformed TFIDF_TOP_K is an error.
    pub fn load() -> Result<Self> {
        let top_k = match env::var("TFIDF_TOP_K") {
            Ok(raw) => parse_top_k(&raw)?,
            Err(_) => DEFAULT_CLI_TOP_K,
        };

        Ok(Self {
            idf_path: env::var("TFIDF_IDF_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("idf.txt")),
            dictionary_path: env::var("TFIDF_DICT_PATH")
                .unwrap_or_else(|_| "dictionary.txt".to_string()),
            top_k,
        })
    }

    /// Check that the corpus file exists before trying to build an extractor.
    pub fn require_corpus(&self) -> Result<()> {
        if !self.idf_path.exists() {
            return Err(KeywordError::configuration(format!(
                "IDF corpus not found at {}\n\
                 Set TFIDF_IDF_PATH or pass --idf <path>.",
                self.idf_path.display()
            )));
        }
        Ok(())
    }
}

fn parse_top_k(raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| {
        KeywordError::configuration(format!(
            "TFIDF_TOP_K must be a non-negative integer, got {raw:?}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_k() {
        assert_eq!(parse_top_k("25").unwrap(), 25);
        assert_eq!(parse_top_k(" 7 ").unwrap(), 7);
        assert!(parse_top_k("-3").is_err());
        assert!(parse_top_k("many").is_err());
    }

    #[test]
    fn test_require_corpus_missing() {
        let config = Config {
            idf_path: PathBuf::from("/nonexistent/idf.txt"),
            dictionary_path: "dictionary.txt".to_string(),
            top_k: 10,
        };
        let err = config.require_corpus().unwrap_err();
        assert!(!err.is_resource());
    }
}
