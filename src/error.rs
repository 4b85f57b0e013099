// Error taxonomy for keyword extraction.
//
// Two families: resource errors (the IDF corpus or the segmenter dictionary
// could not be loaded) and configuration errors (an invocation parameter is
// missing or invalid). Extraction itself never fails.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for keyword extraction operations.
pub type Result<T> = std::result::Result<T, KeywordError>;

#[derive(Debug, Error)]
pub enum KeywordError {
    /// A resource file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus line did not parse as `<word> <float>`.
    #[error("malformed corpus line {line} in {}: {content:?}", .path.display())]
    MalformedLine {
        path: PathBuf,
        /// 1-based line number
        line: usize,
        content: String,
    },

    /// The corpus file contained no entries, so no median exists.
    #[error("corpus {} has no entries", .path.display())]
    EmptyCorpus { path: PathBuf },

    /// The segmenter dictionary was rejected.
    #[error("cannot load dictionary {}: {message}", .path.display())]
    Dictionary { path: PathBuf, message: String },

    /// A required parameter is missing or a configured value is invalid.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl KeywordError {
    /// True for errors caused by an unreadable or malformed resource file.
    pub fn is_resource(&self) -> bool {
        !matches!(self, KeywordError::Configuration { .. })
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        KeywordError::Configuration {
            message: message.into(),
        }
    }
}
