//! Configuration file discovery.
//!
//! Discovers `.sift.toml` files by walking up the directory tree from a
//! starting point, then appending the global `~/.sift.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".sift.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global
/// (`~/.sift.toml`) last. Files closer to `cwd` have higher precedence
/// during merging.
///
/// Returns an empty vector if no configuration files are found.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    // Walk up from cwd, collecting .sift.toml files
    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            configs.push(config_path);
        }
        current = dir.parent();
    }

    // Append the global config if it exists and isn't already included
    if let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.sift.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
