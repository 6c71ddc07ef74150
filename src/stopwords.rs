//! Stopword loading
//!
//! The stopword file has no required format: it is normalized with the same rules
//! as the corpus and every resulting word becomes a stopword.

use std::collections::HashSet;
use std::collections::hash_set::Iter;
use std::fs;
use std::iter::Map;
use std::path::Path;

use crate::error::PipelineError;
use crate::tokenizer::normalize;

/// Words excluded from frequency counting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Create an empty set (nothing is filtered)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from free-form stopword text
    #[must_use]
    pub fn parse(text: &str) -> Self {
        normalize(text).split_whitespace().map(String::from).collect()
    }

    /// Read and parse a stopword file
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let text = fs::read_to_string(path).map_err(|source| PipelineError::ReadStopwords {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::parse(&text);
        log::debug!("Loaded {} stopword(s) from {}", set.len(), path.display());
        Ok(set)
    }

    /// Check whether a word is a stopword
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if there are no stopwords
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stopwords in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.into_iter()
    }
}

impl<'a> IntoIterator for &'a StopwordSet {
    type Item = &'a str;
    type IntoIter = Map<Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        let word: fn(&'a String) -> &'a str = String::as_str;
        self.words.iter().map(word)
    }
}

impl FromIterator<String> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}
