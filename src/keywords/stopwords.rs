// Stop-word filtering: an immutable word set plus pattern rules.
//
// The default filter mixes common English function words with frequent
// Chinese narrative words, and adds a measure-word rule: two-character
// tokens starting with "一" ("one") are almost always quantity phrases like
// 一只 or 一声. That rule is corpus-specific, so it's an ordinary pattern that
// callers can leave out or replace.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Built-in stop words used by `StopWordFilter::default()`.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "of", "is", "and", "to", "in", "that", "we", "for", "an", "are", "by", "be", "as", "on",
    "with", "can", "if", "from", "which", "you", "it", "this", "then", "at", "have", "all", "not",
    "one", "has", "or",
    "你们", "要是", "坐在", "没有", "还是", "一样", "不是", "回来", "一句", "一声", "自己", "已经",
    "这个", "他们", "的话", "一只", "那个", "两个", "以后", "地上", "随之", "就是", "咱们", "仍然",
    "出来", "刚刚", "下来", "屋里", "时候", "说话", "不能", "几乎", "进入", "然后", "觉得", "不要",
    "那些", "什么", "完全", "走出", "似的", "开始", "这样", "这儿", "三个", "怎么", "整个", "突然",
    "接着", "听到", "出门", "不敢", "可以", "只是", "不住", "直到", "只有", "之后", "最后", "人们",
    "坐下", "终于", "十分", "而且", "想到", "无法", "不再", "这回", "发生", "那种", "全都", "更加",
    "不过", "这种", "而是", "牲畜", "学校", "院里", "不下", "有点", "早已", "重新", "跟前", "今日",
    "第二天", "先生",
];

type Pattern = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Decides whether a token is noise or a keyword candidate.
///
/// Matching is case-insensitive: both the word set and the patterns see the
/// lower-cased token.
#[derive(Clone)]
pub struct StopWordFilter {
    words: HashSet<String>,
    patterns: Vec<Pattern>,
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS.iter().copied()).with_pattern(is_measure_word)
    }
}

impl fmt::Debug for StopWordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopWordFilter")
            .field("words", &self.words.len())
            .field("patterns", &self.patterns.len())
            .finish()
    }
}

impl StopWordFilter {
    /// A filter that rejects nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
            patterns: Vec::new(),
        }
    }

    /// A filter with exactly these words and no patterns.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::empty().with_words(words)
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Add a language's stop-word list from the `stop-words` crate.
    pub fn with_language(self, language: LANGUAGE) -> Self {
        let words: Vec<String> = get(language);
        self.with_words(words)
    }

    /// Add a rule; any token for which it returns true is a stop word.
    pub fn with_pattern<F>(mut self, pattern: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.patterns.push(Arc::new(pattern));
        self
    }

    /// Add a regex rule matched against the lower-cased token.
    pub fn with_regex(self, regex: Regex) -> Self {
        self.with_pattern(move |word| regex.is_match(word))
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.contains(&word) || self.patterns.iter().any(|p| p(&word))
    }

    /// Number of listed words, not counting patterns.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.patterns.is_empty()
    }
}

/// Two characters starting with "一": a measure-word phrase such as 一只.
pub fn is_measure_word(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next() == Some('一') && chars.next().is_some() && chars.next().is_none()
}
