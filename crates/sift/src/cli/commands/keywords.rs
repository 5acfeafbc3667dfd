//! Implements the `sift keywords` command.

use std::process::ExitCode;

use sift_engine::{KeywordAlgorithm, extract_keywords};
use sift_lex::SnowballLexicon;

use super::shared::{load_settings, read_job_description};
use crate::cli::{
    args::KeywordsCommand,
    output::{keywords_json, keywords_table},
};

/// Shows the keyword list the ranker would match candidates against.
pub fn cmd_keywords(cmd: &KeywordsCommand) -> ExitCode {
    let settings = match load_settings(&cmd.overrides) {
        Ok(settings) => settings,
        Err(code) => return code,
    };

    let algorithm = match settings.algorithm.parse::<KeywordAlgorithm>() {
        Ok(algorithm) => algorithm,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let job_text = match read_job_description(&cmd.job) {
        Ok(text) => text,
        Err(code) => return code,
    };
    if job_text.trim().is_empty() {
        eprintln!("error: job description {} is empty", cmd.job.display());
        return ExitCode::FAILURE;
    }

    let lexicon = SnowballLexicon::new();
    let keywords = extract_keywords(&job_text, algorithm, settings.top_n_keywords, &lexicon);

    if cmd.output.json {
        println!("{}", keywords_json(&keywords));
    } else {
        println!("Algorithm: {algorithm} ({})", algorithm.description());
        println!("{}", keywords_table(&keywords));
    }

    ExitCode::SUCCESS
}
