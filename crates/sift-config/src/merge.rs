//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules: the file closest to the working directory
//! wins, field by field.

use std::path::PathBuf;

use crate::{Config, RankingSettings, parse::RawConfig, parse::RawRankingSettings};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence
/// first (closest to the working directory), lowest precedence last (the
/// global config). Scalar settings take the first defined value.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut ranking = RankingSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence
    // overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.ranking {
            apply_raw_ranking(&mut ranking, raw);
        }
    }

    Config { ranking }
}

/// Applies raw ranking settings to result, overwriting any present values.
fn apply_raw_ranking(result: &mut RankingSettings, raw: &RawRankingSettings) {
    if let Some(v) = raw.top_n_keywords {
        result.top_n_keywords = v;
    }
    if let Some(v) = raw.max_vocabulary {
        result.max_vocabulary = v;
    }
    if let Some(v) = raw.top_k_matched {
        result.top_k_matched = v;
    }
    if let Some(v) = raw.top_missing {
        result.top_missing = v;
    }
    if let Some(ref v) = raw.algorithm {
        result.algorithm = v.clone();
    }
}
