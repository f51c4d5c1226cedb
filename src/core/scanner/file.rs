// src/core/scanner/file.rs
use std::fs;
use std::path::Path;

use crate::core::counter::WordCounter;
use crate::core::parser::FluentResourceParser;
use crate::models::WordCountResult;

pub const FTL_EXTENSION: &str = "ftl";

/// `true` for paths ending in `.ftl`. The check is case-sensitive.
#[inline]
#[must_use]
pub fn is_ftl_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == FTL_EXTENSION)
}

/// Counts every message and attribute of one Fluent resource.
///
/// Parser diagnostics are logged against `origin`; they never change the
/// counts of the units that did parse.
#[must_use]
pub fn count_resource(source: &str, counter: &WordCounter, origin: &Path) -> WordCountResult {
    let resource = FluentResourceParser::new().parse_str(source);

    for diagnostic in &resource.diagnostics {
        tracing::warn!(
            file = %origin.display(),
            line = diagnostic.line.saturating_add(1),
            "{}",
            diagnostic.message
        );
    }

    resource
        .units
        .iter()
        .map(|unit| counter.count(&unit.body))
        .sum()
}

/// Reads and counts one `.ftl` file.
///
/// Invalid UTF-8 is replaced rather than rejected. A file that cannot be read
/// is logged and counted as empty.
#[must_use]
pub fn count_ftl_file(path: &Path, counter: &WordCounter) -> WordCountResult {
    match fs::read(path) {
        Ok(bytes) => count_resource(&String::from_utf8_lossy(&bytes), counter, path),
        Err(err) => {
            tracing::warn!(file = %path.display(), %err, "unable to read file");
            WordCountResult::default()
        }
    }
}
