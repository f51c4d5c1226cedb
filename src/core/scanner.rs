// src/core/scanner.rs
mod file;

pub use file::{FTL_EXTENSION, count_ftl_file, count_resource, is_ftl_file};

use anyhow::{Context as _, Result, bail};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::counter::WordCounter;
use crate::models::RunningTotal;
use crate::utils::{write_directory_line, write_file_line, write_skipped_line};

#[derive(Debug, Default, Clone, Copy)]
pub struct ScanOptions {
    /// Report every file, not only directory totals.
    pub verbose: bool,
}

/// Counts a `.ftl` file, or every `.ftl` file below a directory.
///
/// Directories are visited depth-first. Within a directory the files are
/// counted first, then the directory line is written, then subdirectories
/// are visited in name order. A symlinked directory is followed unless it
/// points back at one of its own ancestors. The directory line covers only
/// the files directly inside it, while the returned total covers the whole
/// tree.
///
/// # Arguments
///
/// * `path` - A directory or a single file
/// * `counter` - Counts the strings and words of each translatable unit
/// * `options` - Reporting options
/// * `out` - Receives the report lines
///
/// # Errors
///
/// This function may return an error if:
/// * `path` does not exist
/// * A directory cannot be listed
/// * Writing a report line fails
pub fn scan<W: Write>(
    path: &Path,
    counter: &WordCounter,
    options: ScanOptions,
    out: &mut W,
) -> Result<RunningTotal> {
    if !path.exists() {
        bail!("{} is not a valid path", path.display());
    }

    if path.is_dir() {
        let mut ancestors = HashSet::new();
        return scan_directory(path, counter, options, out, &mut ancestors);
    }

    let mut total = RunningTotal::new(path);
    visit_file(path, "file", &mut total, counter, options, out)?;
    Ok(total)
}

fn scan_directory<W: Write>(
    dir: &Path,
    counter: &WordCounter,
    options: ScanOptions,
    out: &mut W,
    ancestors: &mut HashSet<PathBuf>,
) -> Result<RunningTotal> {
    let mut total = RunningTotal::new(dir);

    let canonical = fs::canonicalize(dir)
        .with_context(|| format!("{} is not a valid path", dir.display()))?;
    if !ancestors.insert(canonical.clone()) {
        tracing::warn!(path = %dir.display(), "directory links back to its own ancestor, skipping");
        return Ok(total);
    }
    tracing::debug!(path = %dir.display(), "scanning directory");

    total.directories = 1;
    let mut subdirs = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Unable to open directory {}", dir.display()))?;
        let path = entry.path();

        if path.is_dir() {
            subdirs.push(entry.into_path());
        } else {
            let kind = if entry.path_is_symlink() { "link" } else { "file" };
            visit_file(path, kind, &mut total, counter, options, out)?;
        }
    }

    write_directory_line(out, &total, options.verbose)?;

    for subdir in subdirs {
        let child = scan_directory(&subdir, counter, options, out, ancestors)?;
        total.absorb(&child);
    }

    // only the current ancestor chain stays in the set, so aliases of
    // sibling directories are counted again
    ancestors.remove(&canonical);
    Ok(total)
}

fn visit_file<W: Write>(
    path: &Path,
    kind: &str,
    total: &mut RunningTotal,
    counter: &WordCounter,
    options: ScanOptions,
    out: &mut W,
) -> Result<()> {
    if is_ftl_file(path) {
        let count = count_ftl_file(path, counter);
        total.add_ftl_file(count);
        if options.verbose {
            write_file_line(out, path, count)?;
        }
    } else {
        total.add_other_file();
        if options.verbose {
            write_skipped_line(out, path, kind)?;
        }
    }
    Ok(())
}
