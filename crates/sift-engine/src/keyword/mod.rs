//! Keyword extraction from the reference document.
//!
//! The keyword list captures what the job description is actually about,
//! so it is extracted from the reference only — never from candidates —
//! and shared read-only by every downstream stage.
//!
//! The default algorithm is the frequency extractor: lemmatized
//! noun/proper-noun/adjective terms ranked by how often they occur.
//! Alternatives are available for experimentation:
//!
//! - **RAKE**: key phrases based on word co-occurrence
//! - **TextRank**: graph-based ranking similar to PageRank
//! - **YAKE**: statistical extraction, good for short texts

mod local;

use std::{
    collections::{HashMap, hash_map::Entry},
    fmt, str,
};

pub use local::{RakeExtractor, TextRankExtractor, YakeExtractor};
use serde::Serialize;
use sift_lex::Lexicon;

/// Available keyword extraction algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordAlgorithm {
    /// Frequency of lemmatized noun/proper-noun/adjective terms.
    #[default]
    Frequency,
    /// RAKE (Rapid Automatic Keyword Extraction).
    Rake,
    /// TextRank graph-based ranking.
    TextRank,
    /// YAKE (Yet Another Keyword Extractor).
    Yake,
}

impl KeywordAlgorithm {
    /// Returns a brief description of the algorithm.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Frequency => "Frequency-ranked noun/adjective lemmas",
            Self::Rake => "RAKE - key phrases based on word co-occurrence",
            Self::TextRank => "Graph-based ranking similar to PageRank",
            Self::Yake => "Statistical approach, no training needed",
        }
    }
}

impl fmt::Display for KeywordAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => write!(f, "frequency"),
            Self::Rake => write!(f, "rake"),
            Self::TextRank => write!(f, "textrank"),
            Self::Yake => write!(f, "yake"),
        }
    }
}

impl str::FromStr for KeywordAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frequency" | "freq" => Ok(Self::Frequency),
            "rake" => Ok(Self::Rake),
            "textrank" | "text-rank" | "text_rank" => Ok(Self::TextRank),
            "yake" => Ok(Self::Yake),
            _ => Err(format!(
                "unknown algorithm '{}', expected one of: frequency, rake, textrank, yake",
                s
            )),
        }
    }
}

/// A keyword with its computed score.
///
/// For the frequency algorithm the score is the raw occurrence count; for
/// the other algorithms it is whatever the extractor reports, normalized
/// so that higher always means more relevant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredKeyword {
    /// The extracted keyword.
    pub term: String,
    /// The relevance score (higher = more relevant).
    pub score: f32,
}

impl ScoredKeyword {
    /// Creates a new scored keyword.
    pub fn new(term: impl Into<String>, score: f32) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// The ranked salient terms of the reference document.
///
/// Holds at most `top_n` distinct terms in descending relevance order.
/// Immutable after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordList {
    /// Scored keywords in rank order.
    entries: Vec<ScoredKeyword>,
}

impl KeywordList {
    /// Builds a list from ranked keywords, truncating to `top_n`.
    pub fn from_ranked(mut entries: Vec<ScoredKeyword>, top_n: usize) -> Self {
        entries.truncate(top_n);
        Self { entries }
    }

    /// Returns the scored entries in rank order.
    pub fn entries(&self) -> &[ScoredKeyword] {
        &self.entries
    }

    /// Iterates the keyword terms in rank order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|k| k.term.as_str())
    }

    /// Returns the number of keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keywords were extracted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts the keyword list from the reference text.
///
/// Dispatches on the algorithm; every path truncates to `top_n` terms.
pub fn extract_keywords<L: Lexicon>(
    reference: &str,
    algorithm: KeywordAlgorithm,
    top_n: usize,
    lexicon: &L,
) -> KeywordList {
    let ranked = match algorithm {
        KeywordAlgorithm::Frequency => frequency_keywords(reference, lexicon),
        KeywordAlgorithm::Rake => RakeExtractor::new().extract(reference),
        KeywordAlgorithm::TextRank => TextRankExtractor::new().extract(reference),
        KeywordAlgorithm::Yake => YakeExtractor::new().extract(reference),
    };

    KeywordList::from_ranked(ranked, top_n)
}

/// Frequency-based extraction over noun/proper-noun/adjective lemmas.
///
/// Candidate terms must be purely alphabetic, not stopwords, and in a
/// keyword-bearing grammatical category. Distinct lemmas are counted and
/// sorted by descending frequency; the sort is stable over
/// first-occurrence order, which is the tie-break.
fn frequency_keywords<L: Lexicon>(reference: &str, lexicon: &L) -> Vec<ScoredKeyword> {
    let mut order: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in lexicon.tokenize(reference) {
        if !token.chars().all(char::is_alphabetic) {
            continue;
        }
        if lexicon.is_stopword(&token) {
            continue;
        }
        if !lexicon.classify_pos(&token).is_keyword_candidate() {
            continue;
        }

        let lemma = lexicon.lemmatize(&token);
        match index.entry(lemma) {
            Entry::Occupied(entry) => order[*entry.get()].1 += 1,
            Entry::Vacant(entry) => {
                let term = entry.key().clone();
                entry.insert(order.len());
                order.push((term, 1));
            }
        }
    }

    // Stable sort: equal counts keep first-occurrence order
    order.sort_by(|a, b| b.1.cmp(&a.1));

    order
        .into_iter()
        .map(|(term, count)| ScoredKeyword::new(term, count as f32))
        .collect()
}
