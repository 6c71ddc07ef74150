//! Pipeline error types
//!
//! Every failure is an IO or parse failure on a specific file, so each variant
//! carries the path that was being read or written.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Stopword file could not be read
    #[error("failed to read stopwords from {path}: {source}")]
    ReadStopwords {
        /// File that was being read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Corpus file could not be read
    #[error("failed to read corpus from {path}: {source}")]
    ReadCorpus {
        /// File that was being read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Report directory could not be created
    #[error("failed to create report directory {path}: {source}")]
    CreateOutputDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Report file could not be written
    #[error("failed to write report to {path}: {source}")]
    WriteReport {
        /// File that was being written
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file could not be read
    #[error("failed to read config from {path}: {source}")]
    ReadConfig {
        /// File that was being read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for a pipeline config
    #[error("invalid config in {path}: {source}")]
    ParseConfig {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

impl PipelineError {
    /// The path the failing operation was working on
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadStopwords { path, .. }
            | Self::ReadCorpus { path, .. }
            | Self::CreateOutputDir { path, .. }
            | Self::WriteReport { path, .. }
            | Self::ReadConfig { path, .. }
            | Self::ParseConfig { path, .. } => path,
        }
    }
}
