//! Token frequency counting
//!
//! The table remembers the order in which each word was first counted. That
//! order is the tie-break when the report is ranked, so it has to survive
//! until [`FrequencyTable::ranked`] is called.

use std::iter::Map;

use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::Serialize;

use crate::report::RankedReport;
use crate::stopwords::StopwordSet;

/// Occurrence count per word, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    /// Count every token that is neither empty nor a stopword
    #[must_use]
    pub fn count<S: AsRef<str>>(tokens: &[S], stopwords: &StopwordSet) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for token in tokens {
            let token: &str = token.as_ref();
            if token.is_empty() || stopwords.contains(token) {
                continue;
            }
            if let Some(count) = counts.get_mut(token) {
                *count += 1;
            } else {
                counts.insert(token.to_string(), 1);
            }
        }
        let table = Self { counts };
        log::debug!(
            "Counted {} word(s), {} distinct, from {} token(s)",
            table.total(),
            table.len(),
            tokens.len()
        );
        table
    }

    /// Count for a word, if it was seen
    #[must_use]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no words were counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(word, count)` in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.into_iter()
    }

    /// Rank the table by count, highest first
    #[must_use]
    pub fn ranked(&self) -> RankedReport {
        RankedReport::from_table(self)
    }
}

type EntryFn<'a> = fn((&'a String, &'a usize)) -> (&'a str, usize);

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a str, usize);
    type IntoIter = Map<Iter<'a, String, usize>, EntryFn<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        let entry: EntryFn<'a> = |(word, &count)| (word.as_str(), count);
        self.counts.iter().map(entry)
    }
}
