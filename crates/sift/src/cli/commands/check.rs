//! Implements the `sift check` command.

use std::{env, process::ExitCode};

use sift_config::{Config, discover_config_files};

/// Validates configuration and shows the effective settings.
///
/// Exits successfully when the configuration is clean; a configuration
/// with warnings exits with failure so scripts can detect it.
pub fn cmd_check() -> ExitCode {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("error: could not determine current directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config_files = discover_config_files(&cwd);

    if config_files.is_empty() {
        println!("No configuration files found; using defaults.");
        println!();
        println!("Run 'sift init' to create a configuration file.");
    } else {
        println!("Config files (highest precedence first):");
        for path in &config_files {
            println!("  {}", path.display());
        }
    }
    println!();

    let config = match Config::load(&cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Effective settings:");
    print!("{}", config.settings_to_toml());
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }

    ExitCode::FAILURE
}
