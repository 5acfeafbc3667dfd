//! Implements the `sift init` command.

use std::{env, fs, process::ExitCode};

use sift_config::CONFIG_FILENAME;

/// Default configuration template with commented examples.
const CONFIG_TEMPLATE: &str = include_str!("../../../templates/config.toml");

/// Writes a commented `.sift.toml` template in the current directory.
pub fn cmd_init(force: bool) -> ExitCode {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("error: could not determine current directory: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config_path = cwd.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    if let Err(e) = fs::write(&config_path, CONFIG_TEMPLATE) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());
    ExitCode::SUCCESS
}
