// src/core/config.rs
mod loader;

pub use loader::{CONFIG_FILE_NAME, load_config, load_config_file};

use anyhow::{Context as _, Result};
use serde::Deserialize;

use crate::core::counter::words::{DEFAULT_JOINERS, WordRules};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub words: WordsConfig,
}

/// `[words]` table: what counts as a word character.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordsConfig {
    /// Characters counted as word characters in addition to Unicode letters.
    pub extra_chars: String,
    /// Characters that join two word parts into a single word.
    pub joiners: String,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            extra_chars: String::new(),
            joiners: DEFAULT_JOINERS.to_owned(),
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unknown keys.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    #[must_use]
    pub fn word_rules(&self) -> WordRules {
        WordRules::new(self.words.extra_chars.chars(), self.words.joiners.chars())
    }
}
