//! Configuration file parsing.
//!
//! Parses individual `.sift.toml` files into intermediate `RawConfig`
//! structures that preserve the optional nature of all fields before
//! merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Ranking settings section.
    pub ranking: Option<RawRankingSettings>,
}

/// Raw ranking settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRankingSettings {
    /// Number of keywords to extract from the job description.
    pub top_n_keywords: Option<usize>,
    /// Maximum vocabulary size for TF-IDF vectorization.
    pub max_vocabulary: Option<usize>,
    /// Number of matched keywords shown per candidate.
    pub top_k_matched: Option<usize>,
    /// Number of missing keywords shown per candidate.
    pub top_missing: Option<usize>,
    /// Keyword extraction algorithm name.
    pub algorithm: Option<String>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
