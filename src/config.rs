//! Pipeline configuration
//!
//! The defaults reproduce the one corpus edition the tool was written for:
//! a 246-line front-matter block and trailing boilerplate starting at a line
//! beginning with `End of this Etext`. A TOML file can override any field, but
//! it is only read when one is passed explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::paths;

/// Number of front-matter lines in the default corpus
pub const DEFAULT_SKIP_LINES: usize = 246;

/// Prefix of the first trailing-boilerplate line in the default corpus
pub const DEFAULT_TERMINAL_MARKER: &str = "End of this Etext";

/// Everything the pipeline needs to know to run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Stopword list to load
    pub stopwords_path: PathBuf,
    /// Corpus file to extract lines from
    pub corpus_path: PathBuf,
    /// Where the CSV report is written
    pub output_path: PathBuf,
    /// Leading corpus lines discarded unconditionally
    pub skip_lines: usize,
    /// Extraction stops at the first raw line starting with this prefix
    pub terminal_marker: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stopwords_path: paths::stopwords(),
            corpus_path: paths::corpus(),
            output_path: paths::report(),
            skip_lines: DEFAULT_SKIP_LINES,
            terminal_marker: DEFAULT_TERMINAL_MARKER.to_string(),
        }
    }
}

/// Optional values layered over a config, typically from CLI flags
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replacement stopword path
    pub stopwords_path: Option<PathBuf>,
    /// Replacement corpus path
    pub corpus_path: Option<PathBuf>,
    /// Replacement report path
    pub output_path: Option<PathBuf>,
    /// Replacement front-matter line count
    pub skip_lines: Option<usize>,
    /// Replacement terminal marker
    pub terminal_marker: Option<String>,
}

impl PipelineConfig {
    /// Load a config from a TOML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let content = fs::read_to_string(path).map_err(|source| PipelineError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| PipelineError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Replace every field that has an override
    #[must_use]
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(path) = overrides.stopwords_path {
            self.stopwords_path = path;
        }
        if let Some(path) = overrides.corpus_path {
            self.corpus_path = path;
        }
        if let Some(path) = overrides.output_path {
            self.output_path = path;
        }
        if let Some(skip) = overrides.skip_lines {
            self.skip_lines = skip;
        }
        if let Some(marker) = overrides.terminal_marker {
            self.terminal_marker = marker;
        }
        self
    }
}
