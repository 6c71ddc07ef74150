//! Centralized path definitions for wordtally
//!
//! All default paths are relative to the working directory the binary is run from.
//!
//! ## Layout
//!
//! ```text
//! ./
//! ├── data/shakespeare/
//! │   ├── stopwords.txt           # Stopword list (input)
//! │   └── shakespeare.txt         # Corpus (input)
//! └── artifacts/
//!     └── shakespeare_report.csv  # Ranked report (output, created on demand)
//! ```

use std::path::PathBuf;

// =============================================================================
// Inputs
// =============================================================================

/// Directory holding both input files
pub const INPUT_DIR: &str = "data/shakespeare";

/// Stopword list filename
const STOPWORDS_FILE: &str = "stopwords.txt";

/// Corpus filename
const CORPUS_FILE: &str = "shakespeare.txt";

// =============================================================================
// Outputs
// =============================================================================

/// Directory the report is written into
pub const OUTPUT_DIR: &str = "artifacts";

/// Report filename
const REPORT_FILE: &str = "shakespeare_report.csv";

/// Get path to the default stopword list.
#[must_use]
pub fn stopwords() -> PathBuf {
    PathBuf::from(INPUT_DIR).join(STOPWORDS_FILE)
}

/// Get path to the default corpus file.
#[must_use]
pub fn corpus() -> PathBuf {
    PathBuf::from(INPUT_DIR).join(CORPUS_FILE)
}

/// Get path to the default report file.
#[must_use]
pub fn report() -> PathBuf {
    PathBuf::from(OUTPUT_DIR).join(REPORT_FILE)
}
