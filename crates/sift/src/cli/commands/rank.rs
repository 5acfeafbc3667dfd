//! Implements the `sift rank` command.

use std::process::ExitCode;

use sift_engine::rank_candidates;
use sift_lex::SnowballLexicon;

use super::shared::{collect_documents, load_settings, read_job_description};
use crate::cli::{
    args::RankCommand,
    output::{report_json, report_table},
};

/// Ranks resume files against the job description and prints the report.
pub fn cmd_rank(cmd: &RankCommand) -> ExitCode {
    let settings = match load_settings(&cmd.overrides) {
        Ok(settings) => settings,
        Err(code) => return code,
    };

    let job_text = match read_job_description(&cmd.job) {
        Ok(text) => text,
        Err(code) => return code,
    };

    let documents = collect_documents(&cmd.paths);
    if documents.is_empty() {
        eprintln!("error: no resume files found in the given paths");
        return ExitCode::FAILURE;
    }

    // One backend for the whole run; construction loads the stemmer and
    // stopword tables
    let lexicon = SnowballLexicon::new();

    match rank_candidates(&job_text, &documents, &settings, &lexicon) {
        Ok(report) => {
            if cmd.output.json {
                println!("{}", report_json(&report));
            } else {
                println!("{}", report_table(&report));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
