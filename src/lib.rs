// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run, run_with_output};
pub use crate::core::config::{CONFIG_FILE_NAME, Config, load_config, load_config_file};
pub use crate::core::counter::{WordCounter, WordRules, strip_variables};
pub use crate::core::parser::FluentResourceParser;
pub use crate::core::scanner::{ScanOptions, count_ftl_file, count_resource, scan};
pub use models::{
    Diagnostic, ParsedResource, RunningTotal, TranslatableUnit, UnitKind, WordCountResult,
};
