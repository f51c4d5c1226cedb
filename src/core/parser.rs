// src/core/parser.rs
mod body;

pub use body::{ATTRIBUTE_INDENT, AttributeValue, SplitBody, split_body};
pub(crate) use body::{braces, push_line};

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{ParsedResource, TranslatableUnit, UnitKind};

static MESSAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_-][A-Za-z0-9_-]*)[ \t]*=[ \t]*(.*?)[ \t]*$").expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentKind {
    /// `#`, attached to the next message.
    Message,
    /// `##`
    Group,
    /// `###`
    Resource,
}

enum State<'a> {
    ScanningTop,
    InMessage {
        identifier: &'a str,
        start: usize,
        body: Vec<&'a str>,
        depth: usize,
    },
    InComment(CommentKind),
}

/// Finds the translatable message and attribute values of a Fluent resource.
///
/// This is a line scanner, not a validating Fluent parser: anything it does
/// not recognize is skipped, and malformed attributes are reported as
/// diagnostics instead of failing the parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct FluentResourceParser;

impl FluentResourceParser {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Splits `source` into lines and parses them. A leading byte-order mark
    /// is ignored.
    #[inline]
    #[must_use]
    pub fn parse_str(&self, source: &str) -> ParsedResource {
        self.parse(source.strip_prefix('\u{feff}').unwrap_or(source).lines())
    }

    /// Parses the lines of one resource in a single forward pass.
    ///
    /// Every message yields a [`UnitKind::Message`] unit, with an empty body
    /// when it only holds attributes, followed by one [`UnitKind::Attribute`]
    /// unit per attribute.
    #[must_use]
    pub fn parse<'a, I>(&self, lines: I) -> ParsedResource
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines: Vec<&'a str> = lines
            .into_iter()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let mut resource = ParsedResource::default();
        let mut state = State::ScanningTop;
        let mut cursor = 0;

        while let Some(&line) = lines.get(cursor) {
            state = match state {
                State::ScanningTop => {
                    cursor = cursor.saturating_add(1);
                    if let Some(caps) = MESSAGE_REGEX.captures(line) {
                        let value = caps.get(2).map_or("", |m| m.as_str());
                        State::InMessage {
                            identifier: caps.get(1).map_or("", |m| m.as_str()),
                            start: cursor.saturating_sub(1),
                            body: vec![value],
                            depth: braces(0, value),
                        }
                    } else if let Some(kind) = comment_kind(line) {
                        State::InComment(kind)
                    } else {
                        State::ScanningTop
                    }
                }
                State::InMessage {
                    identifier,
                    start,
                    mut body,
                    depth,
                } => {
                    if is_continuation(line, depth) {
                        cursor = cursor.saturating_add(1);
                        body.push(line);
                        State::InMessage {
                            identifier,
                            start,
                            body,
                            depth: braces(depth, line),
                        }
                    } else {
                        emit_message(&mut resource, identifier, start, &body);
                        State::ScanningTop
                    }
                }
                State::InComment(kind) => {
                    if comment_kind(line) == Some(kind) {
                        cursor = cursor.saturating_add(1);
                        State::InComment(kind)
                    } else {
                        State::ScanningTop
                    }
                }
            };
        }

        if let State::InMessage {
            identifier,
            start,
            body,
            ..
        } = state
        {
            emit_message(&mut resource, identifier, start, &body);
        }

        resource
    }
}

/// A line continues the current message when it is indented, or when it
/// closes or sits inside a placeable that is still open.
fn is_continuation(line: &str, depth: usize) -> bool {
    line.starts_with(' ') || (depth > 0 && (line.trim().is_empty() || line.starts_with('}')))
}

fn comment_kind(line: &str) -> Option<CommentKind> {
    let hashes = line.len().saturating_sub(line.trim_start_matches('#').len());
    let rest = line.get(hashes..)?;
    if !(rest.is_empty() || rest.starts_with(' ')) {
        return None;
    }
    match hashes {
        1 => Some(CommentKind::Message),
        2 => Some(CommentKind::Group),
        3 => Some(CommentKind::Resource),
        _ => None,
    }
}

fn emit_message(resource: &mut ParsedResource, identifier: &str, start: usize, body: &[&str]) {
    let split = split_body(body.iter().copied(), start);

    resource.units.push(TranslatableUnit {
        identifier: identifier.to_owned(),
        body: split.value,
        kind: UnitKind::Message,
        line: start,
    });
    resource
        .units
        .extend(split.attributes.into_iter().map(|attr| TranslatableUnit {
            identifier: format!("{identifier}.{}", attr.name),
            body: attr.value,
            kind: UnitKind::Attribute,
            line: attr.line,
        }));
    resource.diagnostics.extend(split.diagnostics);
}
