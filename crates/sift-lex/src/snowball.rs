//! Default linguistic backend built on Snowball stemming.
//!
//! Lemmatization uses the English Snowball stemmer from `rust-stemmers`.
//! Stems are not always dictionary words ("machine" becomes "machin"), but
//! they are deterministic and applied consistently to the reference and
//! every candidate, which is what matching requires.
//!
//! Part-of-speech classification is a heuristic: capitalization marks
//! proper nouns, a small suffix table marks adjectives, adverbs, and
//! verbs, and everything else defaults to noun. Content words in resumes
//! and job descriptions are noun-heavy, so the default is the common case;
//! callers needing a real tagger can implement [`Lexicon`] over one.

use rust_stemmers::{Algorithm, Stemmer};

use crate::{Lexicon, PosTag, Stopwords};

/// Adjective suffixes. Checked against the lowercased token.
static ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ish", "less", "ic", "ical",
];

/// Verb-forming suffixes.
static VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Common "-ly" words that are not adverbs.
static NOT_ADVERBS: &[&str] = &[
    "family", "assembly", "supply", "reply", "ally", "rally", "apply", "multiply", "july", "italy",
];

/// Linguistic backend combining Snowball stemming, the standard English
/// stopword list, and heuristic part-of-speech classification.
///
/// Construct once and share by reference; construction loads the stopword
/// set and stemmer tables.
pub struct SnowballLexicon {
    /// English Snowball stemmer.
    stemmer: Stemmer,
    /// English stopword set.
    stopwords: Stopwords,
}

impl Default for SnowballLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SnowballLexicon {
    /// Creates the default English backend.
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            stopwords: Stopwords::new(),
        }
    }

    /// Returns the stopword set backing this lexicon.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }
}

impl Lexicon for SnowballLexicon {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn lemmatize(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        self.stemmer.stem(&lower).into_owned()
    }

    fn classify_pos(&self, token: &str) -> PosTag {
        if token.chars().next().is_some_and(char::is_uppercase) {
            return PosTag::ProperNoun;
        }

        let lower = token.to_lowercase();
        if lower.len() > 3 && lower.ends_with("ly") && !NOT_ADVERBS.contains(&lower.as_str()) {
            return PosTag::Adverb;
        }
        if VERB_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
            return PosTag::Verb;
        }
        if ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| lower.ends_with(suffix))
        {
            return PosTag::Adjective;
        }

        PosTag::Noun
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}
