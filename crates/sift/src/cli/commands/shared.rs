//! Helpers shared by the `sift` commands.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use sift_config::{Config, RankingSettings};
use sift_engine::Document;
use walkdir::WalkDir;

use crate::cli::{args::RankingOverrides, extract::extract_document};

/// Loads the merged configuration and applies command-line overrides.
///
/// Returns the failure exit code if configuration files exist but cannot
/// be loaded; the error has already been reported to stderr.
pub(super) fn load_settings(overrides: &RankingOverrides) -> Result<RankingSettings, ExitCode> {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("error: could not determine current directory: {e}");
            return Err(ExitCode::FAILURE);
        }
    };

    let config = match Config::load(&cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: failed to load configuration: {e}");
            return Err(ExitCode::FAILURE);
        }
    };

    let mut settings = config.ranking;
    if let Some(v) = overrides.top_n {
        settings.top_n_keywords = v;
    }
    if let Some(v) = overrides.max_vocabulary {
        settings.max_vocabulary = v;
    }
    if let Some(v) = overrides.top_k {
        settings.top_k_matched = v;
    }
    if let Some(v) = overrides.top_missing {
        settings.top_missing = v;
    }
    if let Some(algorithm) = overrides.algorithm {
        settings.algorithm = algorithm.to_string();
    }

    Ok(settings)
}

/// Reads the job description file.
///
/// A missing or unreadable reference is a hard error: relevance is
/// undefined without it, so no scoring work should begin.
pub(super) fn read_job_description(path: &Path) -> Result<String, ExitCode> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) => {
            eprintln!(
                "error: could not read job description {}: {e}",
                path.display()
            );
            Err(ExitCode::FAILURE)
        }
    }
}

/// Collects candidate documents from file and directory arguments.
///
/// Directories are walked recursively in filename order so the input
/// order (and therefore tie-breaking) is deterministic. Unreadable
/// entries become empty documents rather than aborting the run.
pub(super) fn collect_documents(paths: &[PathBuf]) -> Vec<Document> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_dir() {
            let walker = WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
                .filter(|entry| entry.file_type().is_file());
            for entry in walker {
                documents.push(extract_document(entry.path()));
            }
        } else {
            documents.push(extract_document(path));
        }
    }

    documents
}
