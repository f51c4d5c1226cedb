// src/models.rs
pub mod running_total;
pub mod translatable_unit;
pub mod word_count_result;

pub use running_total::RunningTotal;
pub use translatable_unit::{Diagnostic, ParsedResource, TranslatableUnit, UnitKind};
pub use word_count_result::WordCountResult;
