// src/utils.rs
use std::io::{self, Write};
use std::path::Path;

use crate::models::{RunningTotal, WordCountResult};

/// `path<TAB>strings<TAB>words`
pub fn write_file_line<W: Write>(out: &mut W, path: &Path, count: WordCountResult) -> io::Result<()> {
    writeln!(out, "{}\t{}\t{}", path.display(), count.strings, count.words)
}

pub fn write_skipped_line<W: Write>(out: &mut W, path: &Path, kind: &str) -> io::Result<()> {
    writeln!(out, "Skipping {}, type: {kind}", path.display())
}

/// `dir<TAB>ftl_files<TAB>strings<TAB>words`, followed by a blank line in
/// verbose mode.
pub fn write_directory_line<W: Write>(out: &mut W, total: &RunningTotal, verbose: bool) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{}",
        total.path.display(),
        total.ftl_files,
        total.strings,
        total.words
    )?;
    if verbose {
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_grand_total<W: Write>(out: &mut W, total: &RunningTotal) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}:", total.path.display())?;
    writeln!(
        out,
        "Directories: {}, Files: {}, FTL files: {}, Strings: {}, Words: {}",
        total.directories, total.all_files, total.ftl_files, total.strings, total.words
    )
}
