use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use tfidf_keywords::config::Config;
use tfidf_keywords::output::terminal;
use tfidf_keywords::{Extractor, FrequencyTable, JiebaSegmenter, Segmenter, WhitespaceSegmenter};

/// Extract the most salient keywords from a document using TF-IDF.
#[derive(Parser)]
#[command(name = "tfidf-keywords", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract keywords from a text file
    Extract {
        /// File to extract keywords from
        #[arg(short = 'f', long = "file")]
        file: PathBuf,

        /// Number of keywords (default: TFIDF_TOP_K or 30)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// How to print the result
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Word segmenter to use
        #[arg(long, value_enum, default_value_t = SegmenterKind::Jieba)]
        segmenter: SegmenterKind,

        /// IDF corpus file (overrides TFIDF_IDF_PATH)
        #[arg(long)]
        idf: Option<PathBuf>,

        /// Segmenter dictionary, comma-separated (overrides TFIDF_DICT_PATH)
        #[arg(long)]
        dict: Option<String>,
    },

    /// List the corpus words with the highest IDF weight
    Corpus {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// IDF corpus file (overrides TFIDF_IDF_PATH)
        #[arg(long)]
        idf: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Colored table on stdout
    Table,
    /// JSON array on stdout
    Json,
    /// One log line per keyword
    Log,
}

#[derive(Clone, Copy, ValueEnum)]
enum SegmenterKind {
    /// Dictionary-based segmentation (CJK-aware)
    Jieba,
    /// Split on non-alphanumeric characters
    Whitespace,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tfidf_keywords=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            count,
            format,
            segmenter,
            idf,
            dict,
        } => {
            let mut config = Config::load()?;
            if let Some(idf) = idf {
                config.idf_path = idf;
            }
            if let Some(dict) = dict {
                config.dictionary_path = dict;
            }
            config.require_corpus()?;

            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let corpus = FrequencyTable::load(&config.idf_path)?;
            let segmenter: Box<dyn Segmenter> = match segmenter {
                SegmenterKind::Jieba => Box::new(JiebaSegmenter::load(&config.dictionary_path)?),
                SegmenterKind::Whitespace => Box::new(WhitespaceSegmenter),
            };
            let extractor = Extractor::from_parts(corpus, segmenter);

            let top_k = count.unwrap_or(config.top_k);
            let keywords = extractor.keywords(&text, Some(top_k));
            info!(file = %file.display(), keywords = keywords.len(), "Extraction complete");

            match format {
                Format::Table => {
                    terminal::display_keywords(&format!("Keywords in {}", file.display()), &keywords)
                }
                Format::Json => println!("{}", terminal::keywords_json(&keywords)?),
                Format::Log => terminal::log_keywords(&keywords),
            }
        }

        Commands::Corpus { count, idf } => {
            let mut config = Config::load()?;
            if let Some(idf) = idf {
                config.idf_path = idf;
            }
            config.require_corpus()?;

            let corpus = FrequencyTable::load(&config.idf_path)?;
            let mut words = corpus.words();
            words.truncate(count);

            terminal::display_keywords("Highest IDF corpus words", &words);
            println!(
                "  {} {} entries, fallback weight for unseen words: {:.4}",
                "Corpus:".bold(),
                corpus.len(),
                corpus.median()
            );
        }
    }

    Ok(())
}
