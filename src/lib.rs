//! wordtally - word-frequency reports for a plain-text literary corpus
//!
//! The library is a linear pipeline of small stages:
//!
//! - [`stopwords`] - load and normalize the stopword list
//! - [`corpus`] - extract content lines from the corpus file
//! - [`tokenizer`] - turn lines into lowercase alphabetic tokens
//! - [`counter`] - count tokens that are not stopwords
//! - [`report`] - rank the counts and write them as CSV
//!
//! [`pipeline`] runs the stages end to end using a [`config::PipelineConfig`].

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod corpus;
pub mod counter;
pub mod error;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod stopwords;
pub mod tokenizer;

pub use config::PipelineConfig;
pub use counter::FrequencyTable;
pub use error::PipelineError;
pub use pipeline::{Pipeline, RunSummary};
pub use report::RankedReport;
pub use stopwords::StopwordSet;
