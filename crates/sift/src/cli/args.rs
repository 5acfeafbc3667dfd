//! Clap argument definitions for the `sift` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sift_engine::KeywordAlgorithm;

/// Parse a keyword extraction algorithm from a string.
fn parse_algorithm(s: &str) -> Result<KeywordAlgorithm, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Rank resumes against a job description")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `sift` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank resume files against a job description
    Rank(RankCommand),

    /// Show the keywords extracted from a job description
    Keywords(KeywordsCommand),

    /// Validate configuration and show effective settings
    Check,

    /// Write a commented .sift.toml template in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Shared flags overriding the ranking settings from configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct RankingOverrides {
    /// Number of keywords to extract from the job description [default: 30]
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Maximum TF-IDF vocabulary size [default: 5000]
    #[arg(long)]
    pub max_vocabulary: Option<usize>,

    /// Matched keywords shown per candidate [default: 5]
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Missing keywords shown per candidate [default: 3]
    #[arg(long)]
    pub top_missing: Option<usize>,

    /// Keyword extraction algorithm: frequency (term counts), rake
    /// (co-occurrence), textrank (graph-based), yake (statistical)
    /// [default: frequency]
    #[arg(short = 'a', long, value_parser = parse_algorithm)]
    pub algorithm: Option<KeywordAlgorithm>,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sift rank`.
#[derive(Args, Debug, Clone)]
pub struct RankCommand {
    /// Job description file
    #[arg(short = 'j', long)]
    pub job: PathBuf,

    /// Resume files or directories to rank
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    /// Ranking setting overrides.
    pub overrides: RankingOverrides,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `sift keywords`.
#[derive(Args, Debug, Clone)]
pub struct KeywordsCommand {
    /// Job description file
    #[arg(short = 'j', long)]
    pub job: PathBuf,

    #[command(flatten)]
    /// Ranking setting overrides.
    pub overrides: RankingOverrides,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}
