//! Output formatting for human and JSON modes
//!
//! The run summary can be rendered either as human-readable text or
//! machine-parseable JSON.

use std::fmt::Write as _;

use crate::pipeline::RunSummary;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl RunSummary {
    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }

    /// Human-readable summary text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Counted {} word(s) from {} line(s) ({} token(s), {} stopword(s) loaded)",
            self.counted, self.lines, self.tokens, self.stopwords
        );
        let _ = writeln!(
            out,
            "Wrote {} distinct word(s) to {}",
            self.distinct,
            self.output_path.display()
        );

        if !self.top.is_empty() {
            let _ = writeln!(out, "\nTop {}:", self.top.len());
            let width = self.top.iter().map(|e| e.word.len()).max().unwrap_or(0);
            for (rank, entry) in self.top.iter().enumerate() {
                let _ = writeln!(out, "  {:>3}. {:<width$}  {}", rank + 1, entry.word, entry.count);
            }
        }
        out
    }

    /// Pretty-printed JSON summary
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
