// src/core/counter/select.rs
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::core::parser::{braces, push_line};

static SELECT_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}\n]*?->").expect("valid regex"));

static VARIANT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(\*?)\[[ \t]*(?:[a-z][a-z0-9_-]*|[0-9]{1,3})[ \t]*\][ \t]*(.*)$")
        .expect("valid regex")
});

/// A select expression found in a text: where it sits and its variant texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectExpression {
    /// Byte range of the whole `{ ... -> ... }` construct.
    pub span: Range<usize>,
    pub variants: Vec<String>,
    pub default_index: usize,
}

/// Why a select expression could not be expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    Unclosed,
    NoVariants,
    TextBeforeVariants(String),
    DefaultCount(usize),
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unclosed => write!(f, "select expression is never closed"),
            Self::NoVariants => write!(f, "select expression has no variants"),
            Self::TextBeforeVariants(text) => {
                write!(f, "unexpected `{text}` before the first variant")
            }
            Self::DefaultCount(n) => {
                write!(f, "select expression needs exactly one default variant, found {n}")
            }
        }
    }
}

/// Finds the first select expression in `text`.
///
/// Returns `None` when there is none, and an error when one starts but does
/// not have the expected shape: variant lines `[key] text` keyed by a
/// lowercase identifier or a number of up to three digits, exactly one of
/// them marked default with `*`, and a closing brace.
pub fn find_select(text: &str) -> Option<Result<SelectExpression, SelectError>> {
    let header = SELECT_START_REGEX.find(text)?;
    Some(parse_select(text, header.start(), header.end()))
}

fn parse_select(text: &str, start: usize, body_start: usize) -> Result<SelectExpression, SelectError> {
    let close = closing_brace(text, body_start).ok_or(SelectError::Unclosed)?;
    let inner = text.get(body_start..close).ok_or(SelectError::Unclosed)?;

    let mut variants: Vec<String> = Vec::new();
    let mut defaults = Vec::new();
    let mut depth: usize = 0;

    for line in inner.split('\n') {
        let variant = if depth == 0 {
            VARIANT_REGEX.captures(line)
        } else {
            None
        };

        if let Some(caps) = variant {
            if !caps[1].is_empty() {
                defaults.push(variants.len());
            }
            let variant_text = caps.get(2).map_or("", |m| m.as_str());
            variants.push(variant_text.trim().to_owned());
            depth = braces(depth, variant_text);
        } else if line.trim().is_empty() {
            continue;
        } else if let Some(current) = variants.last_mut() {
            push_line(current, line.trim());
            depth = braces(depth, line);
        } else {
            return Err(SelectError::TextBeforeVariants(line.trim().to_owned()));
        }
    }

    if variants.is_empty() {
        return Err(SelectError::NoVariants);
    }
    match defaults.as_slice() {
        [default_index] => Ok(SelectExpression {
            span: start..close.saturating_add(1),
            variants,
            default_index: *default_index,
        }),
        _ => Err(SelectError::DefaultCount(defaults.len())),
    }
}

/// Byte index of the `}` closing a placeable whose body starts at `from`.
fn closing_brace(text: &str, from: usize) -> Option<usize> {
    let mut depth: usize = 1;
    for (index, c) in text.get(from..)?.char_indices() {
        match c {
            '{' => depth = depth.saturating_add(1),
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(from.saturating_add(index));
                }
            }
            _ => {}
        }
    }
    None
}
