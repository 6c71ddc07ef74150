//! Ranked report and CSV output
//!
//! Rows are ordered by count, highest first. Words with equal counts keep the
//! order in which they first appeared in the corpus, which makes the report
//! deterministic for a given input.

use std::cmp::Reverse;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::counter::FrequencyTable;
use crate::error::PipelineError;

/// CSV header row
pub const CSV_HEADER: &str = "word,count";

/// CSV record terminator
const CSV_LINE_END: &str = "\r\n";

/// One row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// The word
    pub word: String,
    /// How many times it occurred
    pub count: usize,
}

/// Words ranked by descending count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedReport {
    entries: Vec<RankedEntry>,
}

impl RankedReport {
    /// Rank a frequency table
    ///
    /// `sort_by_key` is stable, so equal counts stay in first-occurrence order.
    #[must_use]
    pub fn from_table(table: &FrequencyTable) -> Self {
        let mut entries: Vec<RankedEntry> = table
            .iter()
            .map(|(word, count)| RankedEntry {
                word: word.to_string(),
                count,
            })
            .collect();
        entries.sort_by_key(|e| Reverse(e.count));
        Self { entries }
    }

    /// All rows, highest count first
    #[must_use]
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// The first `n` rows
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Number of rows
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the report has no rows
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Render the report as CSV, header first
    ///
    /// Words are `[a-z]+`, so no field ever needs quoting.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut csv = String::with_capacity(CSV_HEADER.len() + self.entries.len() * 16);
        csv.push_str(CSV_HEADER);
        csv.push_str(CSV_LINE_END);
        for entry in &self.entries {
            let _ = write!(csv, "{},{}{CSV_LINE_END}", entry.word, entry.count);
        }
        csv
    }

    /// Write the report to `path`, creating the parent directory if needed
    ///
    /// The CSV is rendered in full before anything touches the filesystem.
    pub fn write(&self, path: &Path) -> Result<(), PipelineError> {
        let content = self.to_csv();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PipelineError::CreateOutputDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, content).map_err(|source| PipelineError::WriteReport {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Wrote {} row(s) to {}", self.len(), path.display());
        Ok(())
    }
}
