// Unit tests for IDF corpus loading and lookup.
//
// Tests the file-backed load path: median fallback under the integer-index
// rule, fail-fast on malformed lines, and resource error classification.

use std::io::Write;

use tempfile::NamedTempFile;
use tfidf_keywords::{FrequencyTable, KeywordError};

fn corpus_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================
// Median fallback
// ============================================================

#[test]
fn median_of_three_is_middle_element() {
    let file = corpus_file("alpha 1.0\nbeta 2.0\ngamma 3.0\n");
    let table = FrequencyTable::load(file.path()).unwrap();
    assert_eq!(table.lookup("unseen"), 2.0);
}

#[test]
fn median_of_four_is_index_two() {
    let file = corpus_file("alpha 1.0\nbeta 2.0\ngamma 3.0\ndelta 4.0\n");
    let table = FrequencyTable::load(file.path()).unwrap();
    // index 4 / 2 = 2 of [1, 2, 3, 4], not the averaged 2.5
    assert_eq!(table.lookup("unseen"), 3.0);
}

#[test]
fn median_ignores_file_order() {
    let file = corpus_file("gamma 3.0\nalpha 1.0\nbeta 2.0\n");
    let table = FrequencyTable::load(file.path()).unwrap();
    assert_eq!(table.median(), 2.0);
}

#[test]
fn known_words_return_stored_weight() {
    let file = corpus_file("alpha 1.0\nbeta 2.0\ngamma 3.0\n");
    let table = FrequencyTable::load(file.path()).unwrap();
    assert_eq!(table.lookup("alpha"), 1.0);
    assert_eq!(table.lookup("gamma"), 3.0);
    assert_eq!(table.len(), 3);
    assert!(table.contains("beta"));
    assert!(!table.contains("delta"));
}

#[test]
fn lookup_is_case_sensitive() {
    let file = corpus_file("Rust 9.0\nother 1.0\nthird 2.0\n");
    let table = FrequencyTable::load(file.path()).unwrap();
    assert_eq!(table.lookup("Rust"), 9.0);
    assert_eq!(table.lookup("rust"), table.median());
}

#[test]
fn cjk_words_and_tabs() {
    let file = corpus_file("中国\t3.5\n人民\t2.25\n");
    let table = FrequencyTable::load(file.path()).unwrap();
    assert_eq!(table.lookup("中国"), 3.5);
    assert_eq!(table.lookup("人民"), 2.25);
}

// ============================================================
// Load failures
// ============================================================

#[test]
fn malformed_line_is_resource_error() {
    let file = corpus_file("badword notanumber\n");
    let err = FrequencyTable::load(file.path()).unwrap_err();
    assert!(err.is_resource());
    assert!(matches!(err, KeywordError::MalformedLine { line: 1, .. }));
}

#[test]
fn blank_line_in_middle_aborts_load() {
    let file = corpus_file("alpha 1.0\n\nbeta 2.0\n");
    let err = FrequencyTable::load(file.path()).unwrap_err();
    assert!(matches!(err, KeywordError::MalformedLine { line: 2, .. }));
}

#[test]
fn empty_file_is_resource_error() {
    let file = corpus_file("");
    let err = FrequencyTable::load(file.path()).unwrap_err();
    assert!(err.is_resource());
    assert!(matches!(err, KeywordError::EmptyCorpus { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let err = FrequencyTable::load("/nonexistent/idf.txt").unwrap_err();
    assert!(matches!(err, KeywordError::Io { .. }));
}
