//! Alternative keyword extraction algorithms.
//!
//! These extractors work on the raw reference text without the linguistic
//! backend; they use the `keyword_extraction` crate internally with the
//! standard English stopword list.

use std::cmp::Ordering;

use keyword_extraction::{
    rake::{Rake, RakeParams},
    text_rank::{TextRank, TextRankParams},
    yake::{Yake, YakeParams},
};
use sift_lex::Stopwords;

use super::ScoredKeyword;

/// Punctuation characters that delimit phrases.
static PUNCTUATION: &[&str] = &[
    ".", ",", ":", ";", "!", "?", "(", ")", "[", "]", "{", "}", "\"", "'", "`", "-", "—", "–", "/",
    "\\", "|", "@", "#", "$", "%", "^", "&", "*", "+", "=", "<", ">", "~", "_",
];

/// RAKE (Rapid Automatic Keyword Extraction) extractor.
///
/// Extracts key phrases based on word co-occurrence patterns within the
/// reference text. Useful when multi-word requirements matter more than
/// single terms.
pub struct RakeExtractor {
    /// Stopwords to filter out.
    stopwords: Vec<String>,
    /// Maximum phrase length to consider.
    phrase_length: Option<usize>,
}

impl Default for RakeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RakeExtractor {
    /// Creates a new RAKE extractor with default stopwords.
    pub fn new() -> Self {
        Self {
            stopwords: Stopwords::new().as_vec(),
            phrase_length: Some(3),
        }
    }

    /// Extracts keywords from text using RAKE.
    ///
    /// Returns keywords sorted by score (highest first).
    pub fn extract(&self, text: &str) -> Vec<ScoredKeyword> {
        let params =
            RakeParams::WithDefaultsAndPhraseLength(text, &self.stopwords, self.phrase_length);
        let rake = Rake::new(params);

        rake.get_ranked_keyword_scores(usize::MAX)
            .into_iter()
            .map(|(term, score)| ScoredKeyword::new(term, score))
            .collect()
    }
}

/// Default window size for TextRank co-occurrence graph.
const DEFAULT_WINDOW_SIZE: usize = 2;
/// Default damping factor for PageRank iteration.
const DEFAULT_DAMPING_FACTOR: f32 = 0.85;
/// Default convergence tolerance.
const DEFAULT_TOLERANCE: f32 = 0.00005;
/// Default maximum phrase length.
const DEFAULT_PHRASE_LENGTH: usize = 3;

/// TextRank graph-based keyword extractor.
pub struct TextRankExtractor {
    /// Stopwords to filter out.
    stopwords: Vec<String>,
    /// Punctuation characters that delimit phrases.
    punctuation: Vec<String>,
}

impl Default for TextRankExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRankExtractor {
    /// Creates a new TextRank extractor with default stopwords.
    pub fn new() -> Self {
        Self {
            stopwords: Stopwords::new().as_vec(),
            punctuation: PUNCTUATION.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Extracts keywords from text using TextRank.
    ///
    /// Returns keywords sorted by score (highest first).
    pub fn extract(&self, text: &str) -> Vec<ScoredKeyword> {
        let params = TextRankParams::All(
            text,
            &self.stopwords,
            Some(&self.punctuation),
            DEFAULT_WINDOW_SIZE,
            DEFAULT_DAMPING_FACTOR,
            DEFAULT_TOLERANCE,
            Some(DEFAULT_PHRASE_LENGTH),
        );
        let text_rank = TextRank::new(params);

        text_rank
            .get_ranked_word_scores(usize::MAX)
            .into_iter()
            .map(|(term, score)| ScoredKeyword::new(term, score))
            .collect()
    }
}

/// YAKE (Yet Another Keyword Extractor).
///
/// Statistical keyword extraction that considers term position, frequency,
/// and context. Works well on short texts without training.
pub struct YakeExtractor {
    /// Stopwords to filter out.
    stopwords: Vec<String>,
}

impl Default for YakeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl YakeExtractor {
    /// Creates a new YAKE extractor with default stopwords.
    pub fn new() -> Self {
        Self {
            stopwords: Stopwords::new().as_vec(),
        }
    }

    /// Extracts keywords from text using YAKE.
    ///
    /// YAKE natively scores lower = more relevant; scores are inverted so
    /// higher means more relevant, consistent with the other extractors.
    pub fn extract(&self, text: &str) -> Vec<ScoredKeyword> {
        let params = YakeParams::WithDefaults(text, &self.stopwords);
        let yake = Yake::new(params);

        let mut keywords: Vec<_> = yake
            .get_ranked_term_scores(usize::MAX)
            .into_iter()
            .map(|(term, score)| {
                // 1/(score + epsilon) avoids division by zero
                let inverted_score = 1.0 / (score + 0.0001);
                ScoredKeyword::new(term, inverted_score)
            })
            .collect();

        keywords.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        keywords
    }
}
