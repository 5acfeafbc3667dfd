//! Linguistic backend for sift.
//!
//! The ranking pipeline never inspects text directly; it goes through the
//! [`Lexicon`] capability trait for tokenization, lemmatization,
//! part-of-speech classification, and stopword detection. This keeps the
//! linguistic machinery swappable: the default [`SnowballLexicon`] uses
//! Snowball stemming and a heuristic tagger, and a heavier backend can be
//! substituted without touching the pipeline.
//!
//! A backend is constructed once (the stopword set and stemmer tables are
//! the only startup cost), shared read-only, and dropped at process exit.

#![warn(missing_docs)]

mod snowball;
mod stopwords;

use std::fmt;

pub use snowball::SnowballLexicon;
pub use stopwords::Stopwords;

/// Grammatical category of a single token.
///
/// Only a coarse distinction is needed: keyword extraction keeps nouns,
/// proper nouns, and adjectives, and discards the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Common noun (the default for content words).
    Noun,
    /// Proper noun.
    ProperNoun,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Verb.
    Verb,
}

impl PosTag {
    /// Returns true for the categories that qualify as keyword candidates.
    ///
    /// Salient terms in a job description are overwhelmingly nouns, proper
    /// nouns (tool and product names), and adjectives.
    pub fn is_keyword_candidate(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun | Self::Adjective)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noun => write!(f, "noun"),
            Self::ProperNoun => write!(f, "proper-noun"),
            Self::Adjective => write!(f, "adjective"),
            Self::Adverb => write!(f, "adverb"),
            Self::Verb => write!(f, "verb"),
        }
    }
}

/// Capability interface for the linguistic backend.
///
/// The four operations the ranking pipeline needs. Implementations must be
/// deterministic: the same input always produces the same output, with no
/// dependence on wall-clock, environment, or random state.
pub trait Lexicon {
    /// Splits raw text into surface tokens.
    ///
    /// Tokens keep their original casing; runs of whitespace, punctuation,
    /// and other non-alphanumeric characters act as separators and are
    /// discarded.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Reduces a token to its base form, lowercased.
    fn lemmatize(&self, token: &str) -> String;

    /// Classifies the grammatical category of a surface token.
    fn classify_pos(&self, token: &str) -> PosTag;

    /// Checks whether a token is a stopword.
    ///
    /// The check is case-insensitive.
    fn is_stopword(&self, token: &str) -> bool;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keyword_candidates() {
        assert!(PosTag::Noun.is_keyword_candidate());
        assert!(PosTag::ProperNoun.is_keyword_candidate());
        assert!(PosTag::Adjective.is_keyword_candidate());
        assert!(!PosTag::Adverb.is_keyword_candidate());
        assert!(!PosTag::Verb.is_keyword_candidate());
    }

    #[test]
    fn pos_display() {
        assert_eq!(PosTag::Noun.to_string(), "noun");
        assert_eq!(PosTag::ProperNoun.to_string(), "proper-noun");
        assert_eq!(PosTag::Adjective.to_string(), "adjective");
        assert_eq!(PosTag::Adverb.to_string(), "adverb");
        assert_eq!(PosTag::Verb.to_string(), "verb");
    }
}
