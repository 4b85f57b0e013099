// Unit tests for stop-word filtering and term-frequency construction.

use regex_lite::Regex;
use tfidf_keywords::keywords::stopwords::{is_measure_word, DEFAULT_STOP_WORDS};
use tfidf_keywords::{StopWordFilter, TermFrequencyBuilder, Token};

fn words(texts: &[&str]) -> Vec<Token> {
    texts.iter().map(|t| Token::word(*t)).collect()
}

// ============================================================
// StopWordFilter
// ============================================================

#[test]
fn default_list_is_case_insensitive() {
    let filter = StopWordFilter::default();
    for word in ["The", "AND", "Which", "tHiS"] {
        assert!(filter.is_stop_word(word), "{word} should be a stop word");
    }
}

#[test]
fn every_builtin_word_is_rejected() {
    let filter = StopWordFilter::default();
    for word in DEFAULT_STOP_WORDS {
        assert!(filter.is_stop_word(word), "{word} should be a stop word");
    }
}

#[test]
fn measure_word_rule_is_replaceable() {
    let plain = StopWordFilter::from_words(["the"]);
    assert!(!plain.is_stop_word("一条"));

    let with_rule = plain.clone().with_pattern(is_measure_word);
    assert!(with_rule.is_stop_word("一条"));

    // a different corpus might drop two-letter abbreviations instead
    let custom = plain.with_regex(Regex::new("^[a-z]{2}$").unwrap());
    assert!(custom.is_stop_word("ok"));
    assert!(!custom.is_stop_word("一条"));
}

#[test]
fn extra_words_extend_the_default() {
    let filter = StopWordFilter::default().with_words(["Lorem"]);
    assert!(filter.is_stop_word("lorem"));
    assert!(filter.is_stop_word("the"));
}

// ============================================================
// TermFrequencyBuilder
// ============================================================

#[test]
fn only_stop_words_and_single_chars_give_empty_table() {
    let tf = TermFrequencyBuilder::default().build(&words(&[
        "the", "a", "of", "I", "的", "一个", "先生",
    ]));
    assert!(tf.is_empty());
    assert_eq!(tf.total(), 0);
}

#[test]
fn frequencies_are_normalized_by_surviving_tokens() {
    let tf = TermFrequencyBuilder::default().build(&words(&[
        "apple", "apple", "apple", "banana", "banana", "the", "x",
    ]));
    assert_eq!(tf.total(), 5);
    assert!((tf.get("apple").unwrap() - 0.6).abs() < 1e-9);
    assert!((tf.get("banana").unwrap() - 0.4).abs() < 1e-9);
}

#[test]
fn custom_minimum_length() {
    let builder = TermFrequencyBuilder {
        min_chars: 4,
        ..TermFrequencyBuilder::new(StopWordFilter::empty())
    };
    let tf = builder.build(&words(&["cat", "kitten", "中文字符"]));
    assert_eq!(tf.len(), 2);
    assert!(tf.get("cat").is_none());
    assert!(tf.get("中文字符").is_some());
}
