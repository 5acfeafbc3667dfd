//! Error types for the sift-engine crate.

use thiserror::Error;

/// Errors that abort a ranking call before any scoring work begins.
///
/// Per-candidate problems (empty or unextractable text) are never errors;
/// they degrade to zero-relevance records. Only corpus-wide setup failures
/// reach this type.
#[derive(Debug, Error)]
pub enum RankError {
    /// The reference text is missing or blank, so relevance is undefined.
    #[error("reference text is empty; nothing to rank against")]
    EmptyReference,

    /// A numeric parameter is below its minimum.
    #[error("{name} must be at least {min}, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Minimum allowed value.
        min: usize,
        /// The value that was supplied.
        value: usize,
    },

    /// The configured keyword algorithm name is not recognized.
    #[error("unknown keyword algorithm '{0}', expected one of: frequency, rake, textrank, yake")]
    UnknownAlgorithm(String),
}
