//! Text normalization and tokenization
//!
//! A token is a maximal run of ASCII letters `a-z`. Normalization lowercases the
//! text, blanks out every other character except whitespace, collapses whitespace
//! runs to a single space and strips the ends.

use std::sync::LazyLock;

use regex::Regex;

static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize text so that it contains only lowercase words separated by single spaces
///
/// # Examples
///
/// ```
/// use wordtally::tokenizer::normalize;
///
/// assert_eq!(normalize("  O Romeo,\tRomeo!  "), "o romeo romeo");
/// assert_eq!(normalize("e'er 1599"), "e er");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let letters = NON_LETTER.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&letters, " ");
    collapsed.trim().to_string()
}

/// Split lines into tokens, keeping document order
///
/// Lines are joined with a single space first, so a line break always ends a token.
#[must_use]
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let joined = lines.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" ");
    let tokens: Vec<String> = normalize(&joined).split_whitespace().map(String::from).collect();
    log::debug!("Tokenized {} line(s) into {} token(s)", lines.len(), tokens.len());
    tokens
}
