//! End-to-end pipeline
//!
//! ```text
//! stopwords.txt ──> StopwordSet ─────────────────┐
//!                                                v
//! corpus.txt ──> lines ──> tokens ──> FrequencyTable ──> RankedReport ──> report.csv
//! ```
//!
//! Both inputs are read before anything is written, so a read failure never
//! leaves a report behind.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::PipelineConfig;
use crate::corpus;
use crate::counter::FrequencyTable;
use crate::error::PipelineError;
use crate::report::{RankedEntry, RankedReport};
use crate::stopwords::StopwordSet;
use crate::tokenizer;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Distinct stopwords loaded
    pub stopwords: usize,
    /// Content lines extracted from the corpus
    pub lines: usize,
    /// Tokens produced from those lines
    pub tokens: usize,
    /// Tokens left after stopword filtering
    pub counted: usize,
    /// Distinct words in the report
    pub distinct: usize,
    /// Where the report was written
    pub output_path: PathBuf,
    /// Highest-ranked rows, if requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top: Vec<RankedEntry>,
}

/// Runs the stages for one config
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    top: usize,
}

impl Pipeline {
    /// Create a pipeline for a config
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config, top: 0 }
    }

    /// Include the `n` highest-ranked rows in the summary
    #[must_use]
    pub const fn with_top(mut self, n: usize) -> Self {
        self.top = n;
        self
    }

    /// The config this pipeline runs with
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load inputs and build the ranked report without writing it
    pub fn build(&self) -> Result<(RankedReport, RunSummary)> {
        let stopwords = StopwordSet::load(&self.config.stopwords_path)?;
        let lines = corpus::load_lines(
            &self.config.corpus_path,
            self.config.skip_lines,
            &self.config.terminal_marker,
        )?;

        let tokens = tokenizer::tokenize(&lines);
        let table = FrequencyTable::count(&tokens, &stopwords);
        let report = table.ranked();

        let summary = RunSummary {
            stopwords: stopwords.len(),
            lines: lines.len(),
            tokens: tokens.len(),
            counted: report.total(),
            distinct: report.len(),
            output_path: self.config.output_path.clone(),
            top: report.top(self.top).to_vec(),
        };
        Ok((report, summary))
    }

    /// Run every stage and write the report
    pub fn run(&self) -> Result<RunSummary> {
        let (report, summary) = self.build()?;
        report.write(&self.config.output_path)?;
        log::info!(
            "Wrote {} word(s) to {}",
            summary.distinct,
            self.config.output_path.display()
        );
        Ok(summary)
    }
}
