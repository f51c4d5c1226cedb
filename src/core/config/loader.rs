// src/core/config/loader.rs
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::config::Config;

pub const CONFIG_FILE_NAME: &str = ".ftlcount.toml";

/// Loads the configuration from a `.ftlcount.toml` file starting from the given
/// directory and checking parent directories until one is found.
///
/// Falls back to the default configuration when no file exists.
///
/// # Errors
///
/// This function may return an error if:
/// * A configuration file exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    // a relative start such as `locales` has to reach the directories above
    // the working directory too
    let mut current_dir = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            tracing::debug!(path = %config_file.display(), "using configuration file");
            return load_config_file(&config_file);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(Config::default())
}

/// Loads the configuration from an explicit file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
#[inline]
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    Config::from_toml(&content)
        .with_context(|| format!("Invalid configuration file: {}", path.display()))
}
