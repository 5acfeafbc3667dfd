//! Relevance ranking engine for sift.
//!
//! Ranks candidate documents (resumes) against a single reference document
//! (a job description). The pipeline runs strictly forward:
//!
//! 1. **Normalizer** — raw text into lemmatized, stopword-filtered tokens
//! 2. **Keyword extractor** — salient terms from the reference only
//! 3. **Vector space scorer** — joint TF-IDF over the whole corpus, cosine
//!    similarity per candidate
//! 4. **Coverage & summary builder** — keyword overlap views and a
//!    narrative line per candidate
//! 5. **Ranking aggregator** — join, sort, report
//!
//! The engine is pure computation: it receives text and settings and
//! returns a [`RankedReport`]. It performs no file, network, or terminal
//! I/O, and given identical inputs it produces identical reports. A
//! candidate with empty or unusable text degrades to a zero-relevance
//! record; only invalid settings or a missing reference abort a call.
//!
//! Linguistic capabilities (tokenize, lemmatize, part-of-speech, stopword)
//! come from an injected [`Lexicon`] backend constructed once by the
//! caller.

#![warn(missing_docs)]

mod error;
pub mod keyword;
mod normalize;
mod rank;
mod summary;
mod vector;

pub use error::RankError;
pub use keyword::{KeywordAlgorithm, KeywordList, ScoredKeyword, extract_keywords};
pub use normalize::{TokenSet, normalize};
pub use rank::{RankedReport, RankingRecord};
use rank::assemble_report;
use sift_config::RankingSettings;
use sift_lex::Lexicon;
pub use summary::{MatchProfile, build_profile};
pub use vector::{ScoreVector, TfidfModel, cosine_similarity, score_candidates};

/// A candidate document: an identifier plus raw extracted text.
///
/// The text may be empty when extraction failed upstream; such a document
/// still flows through the pipeline and comes out as a zero-relevance
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier, typically the source filename.
    pub name: String,
    /// Raw extracted text.
    pub text: String,
}

impl Document {
    /// Creates a new document.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Ranks candidates against the reference text.
///
/// Validates the settings, extracts the reference keyword list, scores
/// every candidate by joint-corpus TF-IDF cosine similarity, builds the
/// per-candidate coverage profile, and returns the sorted report.
///
/// # Errors
///
/// Fails only before any scoring work begins: on a blank reference, a
/// numeric setting below its minimum, or an unrecognized algorithm name.
/// Per-candidate problems never abort the call.
pub fn rank_candidates<L: Lexicon>(
    reference: &str,
    candidates: &[Document],
    settings: &RankingSettings,
    lexicon: &L,
) -> Result<RankedReport, RankError> {
    let algorithm = validate_settings(settings)?;
    if reference.trim().is_empty() {
        return Err(RankError::EmptyReference);
    }

    let keywords = extract_keywords(reference, algorithm, settings.top_n_keywords, lexicon);

    let reference_tokens = normalize(reference, lexicon);
    let candidate_tokens: Vec<TokenSet> = candidates
        .iter()
        .map(|doc| normalize(&doc.text, lexicon))
        .collect();

    let scores = score_candidates(
        &reference_tokens,
        &candidate_tokens,
        settings.max_vocabulary,
        lexicon,
    );

    let records = candidates
        .iter()
        .zip(candidate_tokens.iter())
        .zip(scores)
        .map(|((doc, tokens), score)| {
            let profile = build_profile(
                &keywords,
                tokens,
                settings.top_k_matched,
                settings.top_missing,
            );
            RankingRecord::new(doc.name.clone(), score, profile)
        })
        .collect();

    Ok(assemble_report(records))
}

/// Validates settings and resolves the algorithm name.
///
/// `top_missing` may legitimately be zero (suppress the missing view), so
/// only the other numeric settings carry a minimum.
fn validate_settings(settings: &RankingSettings) -> Result<KeywordAlgorithm, RankError> {
    check_minimum("top_n_keywords", settings.top_n_keywords)?;
    check_minimum("max_vocabulary", settings.max_vocabulary)?;
    check_minimum("top_k_matched", settings.top_k_matched)?;

    settings
        .algorithm
        .parse::<KeywordAlgorithm>()
        .map_err(|_| RankError::UnknownAlgorithm(settings.algorithm.clone()))
}

/// Rejects a parameter below 1.
fn check_minimum(name: &'static str, value: usize) -> Result<(), RankError> {
    if value < 1 {
        return Err(RankError::InvalidParameter {
            name,
            min: 1,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use sift_lex::SnowballLexicon;

    use super::*;

    #[test]
    fn empty_reference_is_rejected() {
        let lexicon = SnowballLexicon::new();
        let settings = RankingSettings::default();

        let err = rank_candidates("", &[], &settings, &lexicon).unwrap_err();
        assert!(matches!(err, RankError::EmptyReference));

        let err = rank_candidates("  \n\t ", &[], &settings, &lexicon).unwrap_err();
        assert!(matches!(err, RankError::EmptyReference));
    }

    #[test]
    fn zero_parameters_are_rejected() {
        let lexicon = SnowballLexicon::new();

        for field in ["top_n_keywords", "max_vocabulary", "top_k_matched"] {
            let mut settings = RankingSettings::default();
            match field {
                "top_n_keywords" => settings.top_n_keywords = 0,
                "max_vocabulary" => settings.max_vocabulary = 0,
                _ => settings.top_k_matched = 0,
            }

            let err = rank_candidates("python", &[], &settings, &lexicon).unwrap_err();
            match err {
                RankError::InvalidParameter { name, .. } => assert_eq!(name, field),
                other => panic!("expected InvalidParameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn zero_top_missing_is_allowed() {
        let lexicon = SnowballLexicon::new();
        let settings = RankingSettings {
            top_missing: 0,
            ..RankingSettings::default()
        };

        let report = rank_candidates(
            "python developer",
            &[Document::new("a.txt", "java developer")],
            &settings,
            &lexicon,
        )
        .unwrap();

        assert!(report.records()[0].missing_keywords.is_empty());
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let lexicon = SnowballLexicon::new();
        let settings = RankingSettings {
            algorithm: "embedding".to_string(),
            ..RankingSettings::default()
        };

        let err = rank_candidates("python", &[], &settings, &lexicon).unwrap_err();
        match err {
            RankError::UnknownAlgorithm(name) => assert_eq!(name, "embedding"),
            other => panic!("expected UnknownAlgorithm, got {other:?}"),
        }
    }

    #[test]
    fn validation_runs_before_reference_check() {
        // Both invalid: parameter error wins because the config is checked
        // first, matching the fail-before-work contract either way
        let lexicon = SnowballLexicon::new();
        let settings = RankingSettings {
            top_n_keywords: 0,
            ..RankingSettings::default()
        };

        let err = rank_candidates("", &[], &settings, &lexicon).unwrap_err();
        assert!(matches!(err, RankError::InvalidParameter { .. }));
    }

    #[test]
    fn no_candidates_gives_empty_report() {
        let lexicon = SnowballLexicon::new();
        let settings = RankingSettings::default();

        let report = rank_candidates("python developer", &[], &settings, &lexicon).unwrap();
        assert!(report.is_empty());
    }
}
