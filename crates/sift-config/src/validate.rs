//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential
//! issues. Warnings are advisory: a configuration with warnings still
//! loads, but the engine will reject the hard-invalid cases at run time.

use std::fmt;

use crate::Config;

/// Algorithm names accepted by the ranking engine.
const KNOWN_ALGORITHMS: &[&str] = &["frequency", "rake", "textrank", "yake"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `top_n_keywords` is zero; the engine rejects this.
    ZeroTopKeywords,
    /// `max_vocabulary` is zero; the engine rejects this.
    ZeroVocabulary,
    /// `top_k_matched` is zero; the engine rejects this.
    ZeroTopMatched,
    /// More matched keywords requested than keywords extracted.
    TopMatchedExceedsKeywords {
        /// Configured `top_k_matched`.
        top_k: usize,
        /// Configured `top_n_keywords`.
        top_n: usize,
    },
    /// Algorithm name the engine does not recognize.
    UnknownAlgorithm {
        /// The unrecognized name.
        name: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTopKeywords => {
                write!(f, "top_n_keywords is 0; ranking will be rejected")
            }
            Self::ZeroVocabulary => {
                write!(f, "max_vocabulary is 0; ranking will be rejected")
            }
            Self::ZeroTopMatched => {
                write!(f, "top_k_matched is 0; ranking will be rejected")
            }
            Self::TopMatchedExceedsKeywords { top_k, top_n } => {
                write!(
                    f,
                    "top_k_matched ({top_k}) exceeds top_n_keywords ({top_n}); \
                     the matched list can never be that long"
                )
            }
            Self::UnknownAlgorithm { name } => {
                write!(
                    f,
                    "unknown algorithm '{name}', expected one of: frequency, rake, textrank, yake"
                )
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let ranking = &config.ranking;

    if ranking.top_n_keywords == 0 {
        warnings.push(ConfigWarning::ZeroTopKeywords);
    }
    if ranking.max_vocabulary == 0 {
        warnings.push(ConfigWarning::ZeroVocabulary);
    }
    if ranking.top_k_matched == 0 {
        warnings.push(ConfigWarning::ZeroTopMatched);
    }
    if ranking.top_k_matched > ranking.top_n_keywords && ranking.top_n_keywords > 0 {
        warnings.push(ConfigWarning::TopMatchedExceedsKeywords {
            top_k: ranking.top_k_matched,
            top_n: ranking.top_n_keywords,
        });
    }
    if !KNOWN_ALGORITHMS.contains(&ranking.algorithm.as_str()) {
        warnings.push(ConfigWarning::UnknownAlgorithm {
            name: ranking.algorithm.clone(),
        });
    }

    warnings
}
