// src/models/translatable_unit.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Message,
    Attribute,
}

/// A message value or attribute value found in a Fluent resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableUnit {
    /// `message` for messages, `message.attribute` for attributes.
    pub identifier: String,
    /// Value lines, stripped of indentation and joined with `\n`.
    pub body: String,
    pub kind: UnitKind,
    /// 0-based index of the line the unit starts on.
    pub line: usize,
}

/// A recoverable anomaly found while parsing. Never aborts a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedResource {
    pub units: Vec<TranslatableUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedResource {
    #[inline]
    pub fn messages(&self) -> impl Iterator<Item = &TranslatableUnit> {
        self.units.iter().filter(|u| u.kind == UnitKind::Message)
    }

    #[inline]
    pub fn attributes(&self) -> impl Iterator<Item = &TranslatableUnit> {
        self.units.iter().filter(|u| u.kind == UnitKind::Attribute)
    }
}
