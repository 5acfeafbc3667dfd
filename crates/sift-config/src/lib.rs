//! Configuration system for sift.
//!
//! sift uses TOML configuration files named `.sift.toml`. Configuration is
//! resolved by walking up the directory tree from the current working
//! directory, collecting any `.sift.toml` files found, then loading
//! `~/.sift.toml` as the global config with lowest precedence. Settings
//! merge field-wise with the file closest to the working directory
//! winning.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawRankingSettings, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for sift.
///
/// This represents the fully resolved configuration after merging all
/// discovered `.sift.toml` files according to precedence rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Ranking settings.
    pub ranking: RankingSettings,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant
    /// `.sift.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence
    /// first. This is primarily useful for testing.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// Outputs the merged settings in the same shape as a `.sift.toml`
    /// file, making it easy to see the effective configuration.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableConfig {
            ranking: self.ranking.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Wrapper giving `settings_to_toml` the `[ranking]` table shape.
#[derive(Serialize)]
struct SerializableConfig {
    /// Ranking settings table.
    ranking: RankingSettings,
}

/// Settings for the ranking engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RankingSettings {
    /// Number of keywords extracted from the job description.
    pub top_n_keywords: usize,
    /// Maximum vocabulary size for TF-IDF vectorization.
    pub max_vocabulary: usize,
    /// Matched keywords shown per candidate.
    pub top_k_matched: usize,
    /// Missing keywords shown per candidate.
    pub top_missing: usize,
    /// Keyword extraction algorithm name.
    pub algorithm: String,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            top_n_keywords: 30,
            max_vocabulary: 5000,
            top_k_matched: 5,
            top_missing: 3,
            algorithm: "frequency".to_string(),
        }
    }
}
