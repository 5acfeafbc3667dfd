//! Stopword filtering for text normalization and keyword extraction.
//!
//! Uses the standard English stopword list from the `stop-words` crate
//! (Stopwords ISO). Stopwords are low-value terms filtered out at every
//! pipeline stage that builds term sets, so that scoring and keyword
//! matching focus on semantically meaningful content.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// An English stopword filter.
///
/// Uses a `HashSet` for O(1) lookup. All words are stored in lowercase for
/// case-insensitive matching.
#[derive(Clone)]
pub struct Stopwords {
    /// Lowercased stopword set.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a new stopword filter with the standard English list.
    pub fn new() -> Self {
        let words = stop_words::get(LANGUAGE::English)
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();

        Self { words }
    }

    /// Checks if a term is a stopword.
    ///
    /// The check is case-insensitive.
    pub fn contains(&self, term: &str) -> bool {
        let lower = term.to_lowercase();
        self.words.contains(&lower)
    }

    /// Returns the stopwords as a sorted vector.
    ///
    /// Sorted so callers that iterate the list (the RAKE/TextRank/YAKE
    /// extractors) behave deterministically across runs.
    pub fn as_vec(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort_unstable();
        words
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
