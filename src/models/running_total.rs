// src/models/running_total.rs
use std::path::{Path, PathBuf};

use super::WordCountResult;

/// Accumulated counts for one directory, or for a whole run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunningTotal {
    pub path: PathBuf,
    pub directories: u64,
    pub all_files: u64,
    pub ftl_files: u64,
    pub strings: u64,
    pub words: u64,
}

impl RunningTotal {
    #[inline]
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            ..Self::default()
        }
    }

    /// Records a file that is not a Fluent resource.
    #[inline]
    pub const fn add_other_file(&mut self) {
        self.all_files = self.all_files.saturating_add(1);
    }

    #[inline]
    pub const fn add_ftl_file(&mut self, count: WordCountResult) {
        self.all_files = self.all_files.saturating_add(1);
        self.ftl_files = self.ftl_files.saturating_add(1);
        self.strings = self.strings.saturating_add(count.strings);
        self.words = self.words.saturating_add(count.words);
    }

    /// Folds a child directory's totals into this one. The path is kept.
    #[inline]
    pub const fn absorb(&mut self, child: &Self) {
        self.directories = self.directories.saturating_add(child.directories);
        self.all_files = self.all_files.saturating_add(child.all_files);
        self.ftl_files = self.ftl_files.saturating_add(child.ftl_files);
        self.strings = self.strings.saturating_add(child.strings);
        self.words = self.words.saturating_add(child.words);
    }

    #[inline]
    #[must_use]
    pub const fn counts(&self) -> WordCountResult {
        WordCountResult::new(self.strings, self.words)
    }
}
