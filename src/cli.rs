// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::config::{Config, load_config, load_config_file};
use crate::core::counter::WordCounter;
use crate::core::scanner::{ScanOptions, scan};
use crate::models::RunningTotal;
use crate::utils::write_grand_total;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory or .ftl file to count
    pub path: PathBuf,

    /// Show the string and word counts of every file
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file (defaults to the nearest .ftlcount.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Loads the configuration named on the command line, or the one found
    /// next to the scanned path.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but is invalid.
    pub fn load_config(&self) -> Result<Config> {
        if let Some(file) = &self.config {
            return load_config_file(file);
        }
        let start = if self.path.is_dir() {
            self.path.as_path()
        } else {
            self.path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
        };
        load_config(start)
    }
}

/// Runs a count and prints the report to stdout.
///
/// # Errors
///
/// Fails on an invalid path, an unreadable directory or an invalid
/// configuration file.
pub fn run(args: &Args) -> Result<RunningTotal> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}

/// Runs a count and writes the report to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output<W: Write>(args: &Args, out: &mut W) -> Result<RunningTotal> {
    let config = args.load_config()?;
    let counter = WordCounter::new(config.word_rules());
    let options = ScanOptions {
        verbose: args.verbose,
    };

    let total = scan(&args.path, &counter, options, out)?;
    write_grand_total(out, &total)?;
    out.flush()?;
    Ok(total)
}
