//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use super::commands;
use wordtally::output::OutputMode;

/// wordtally - Word-frequency report for a literary corpus
#[derive(Parser, Debug)]
#[command(
    name = "wordtally",
    version,
    about = "Word-frequency report for a literary corpus",
    long_about = "Count every word in a plain-text corpus, skipping stopwords, \
                  and write the counts as a CSV ranked by frequency.\n\n\
                  With no arguments, reads data/shakespeare/stopwords.txt and \
                  data/shakespeare/shakespeare.txt and writes \
                  artifacts/shakespeare_report.csv."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// TOML file with pipeline settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stopword list
    #[arg(long, value_name = "PATH")]
    pub stopwords: Option<PathBuf>,

    /// Corpus text file
    #[arg(long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Report destination
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of front-matter lines to skip
    #[arg(long, value_name = "N")]
    pub skip_lines: Option<usize>,

    /// Line prefix where trailing boilerplate starts
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Also print the N most frequent words
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub top: usize,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::report(cli, output_mode)
}
