//! Corpus line extraction
//!
//! The corpus is a single text file laid out as:
//!
//! ```text
//! <front-matter>      # fixed number of lines, skipped without looking at them
//! <content>           # kept, minus blank lines and <<annotation>> lines
//! <terminal marker>   # first raw line starting with the marker
//! <boilerplate>       # everything after the marker is dropped
//! ```

use std::fs;
use std::path::Path;

use crate::error::PipelineError;

/// Extract content lines from corpus text
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The marker is matched against
/// the raw line, before trimming, so an indented marker does not end extraction.
/// If the marker never appears the rest of the file is kept.
///
/// # Examples
///
/// ```
/// use wordtally::corpus::extract_lines;
///
/// let text = "HEADER\n  To be, or not to be  \n\n<<note>>\nTHE END\nlicense text\n";
/// assert_eq!(extract_lines(text, 1, "THE END"), vec!["To be, or not to be"]);
/// ```
#[must_use]
pub fn extract_lines(text: &str, skip_lines: usize, terminal_marker: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.lines()
        .skip(skip_lines)
        .take_while(|line| !line.starts_with(terminal_marker))
        .map(|line| line.trim_matches(is_blank))
        .filter(|line| !line.is_empty() && !is_annotation(line))
        .map(String::from)
        .collect()
}

/// Read a corpus file and extract its content lines
pub fn load_lines(
    path: &Path,
    skip_lines: usize,
    terminal_marker: &str,
) -> Result<Vec<String>, PipelineError> {
    let text = fs::read_to_string(path).map_err(|source| PipelineError::ReadCorpus {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = extract_lines(&text, skip_lines, terminal_marker);
    log::debug!(
        "Extracted {} content line(s) from {} (skipped {} header line(s))",
        lines.len(),
        path.display(),
        skip_lines
    );
    Ok(lines)
}

/// Whitespace plus the ASCII file, group, record and unit separators
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Editorial annotations are whole lines wrapped in `<<` and `>>`
fn is_annotation(line: &str) -> bool {
    line.starts_with("<<") && line.ends_with(">>")
}
