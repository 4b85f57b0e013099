// Rendering of ranked keyword lists: colored table, JSON, or log lines.

use colored::Colorize;
use tracing::info;

use super::truncate_chars;
use crate::keywords::ranker::ScoredWord;

/// Longest keyword shown in the table before truncation.
const MAX_WORD_CHARS: usize = 28;

/// Display a ranked keyword list as a table.
pub fn display_keywords(title: &str, keywords: &[ScoredWord]) {
    if keywords.is_empty() {
        println!("No keywords found. The text may contain only stop words.");
        return;
    }

    println!(
        "\n{}",
        format!("=== {title} ({} keywords) ===", keywords.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<30} {:>10}",
        "Rank".dimmed(),
        "Keyword".dimmed(),
        "Score".dimmed()
    );
    println!("  {}", "-".repeat(46).dimmed());

    let top = keywords.first().map(|k| k.score).unwrap_or(0.0);
    for (i, kw) in keywords.iter().enumerate() {
        let word = truncate_chars(&kw.word, MAX_WORD_CHARS);
        let score = format!("{:>10.4}", kw.score);
        // Highlight keywords scoring within half of the leader
        let score = if top > 0.0 && kw.score >= top * 0.5 {
            score.bright_green()
        } else {
            score.normal()
        };
        println!("  {:>4}. {:<30} {}", i, word, score);
    }
    println!();
}

/// Emit one structured log event per keyword.
pub fn log_keywords(keywords: &[ScoredWord]) {
    for (rank, kw) in keywords.iter().enumerate() {
        info!(rank, word = %kw.word, score = kw.score, "keyword");
    }
}

/// Serialize a keyword list as pretty-printed JSON.
pub fn keywords_json(keywords: &[ScoredWord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_json() {
        let json = keywords_json(&[ScoredWord::new("rust", 1.5)]).unwrap();
        let parsed: Vec<ScoredWord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![ScoredWord::new("rust", 1.5)]);
    }
}
