// src/core/parser/body.rs
use regex::Regex;
use std::sync::LazyLock;

use crate::models::Diagnostic;

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.([A-Za-z_][A-Za-z0-9_-]*)[ \t]*=[ \t]*(.*?)[ \t]*$").expect("valid regex")
});

/// Indentation of an attribute line, in spaces.
pub const ATTRIBUTE_INDENT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    pub name: String,
    pub value: String,
    pub line: usize,
}

/// A message body separated into its own value and its attributes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitBody {
    pub value: String,
    pub attributes: Vec<AttributeValue>,
    pub diagnostics: Vec<Diagnostic>,
}

enum Target {
    Value,
    Attribute(AttributeValue),
    Discard,
}

/// Separates the lines of a message body into the message value and its
/// `.attribute = value` entries.
///
/// Lines keep their original indentation: an attribute starts on a line
/// indented by exactly four spaces, and the lines indented deeper than that
/// continue it. Everything before the first attribute is the message value.
/// Each line is stored without its indentation. `first_line` is the index of
/// the first body line in the resource and is only used for diagnostics.
pub fn split_body<'a, I>(lines: I, first_line: usize) -> SplitBody
where
    I: IntoIterator<Item = &'a str>,
{
    let mut split = SplitBody::default();
    let mut target = Target::Value;
    let mut depth: usize = 0;

    for (offset, raw) in lines.into_iter().enumerate() {
        let line_no = first_line.saturating_add(offset);
        let content = raw.trim_start_matches(' ');
        let indent = raw.len().saturating_sub(content.len());
        let content = content.trim_end();

        if content.is_empty() {
            match &mut target {
                Target::Value => push_line(&mut split.value, ""),
                Target::Attribute(attr) => push_line(&mut attr.value, ""),
                Target::Discard => {}
            }
            continue;
        }

        if depth == 0 && indent > 0 && content.starts_with('.') {
            finish(&mut split, target);
            depth = 0;
            target = match ATTRIBUTE_REGEX.captures(content) {
                Some(caps) if indent == ATTRIBUTE_INDENT => Target::Attribute(AttributeValue {
                    name: caps[1].to_owned(),
                    value: caps[2].to_owned(),
                    line: line_no,
                }),
                Some(caps) => {
                    split.diagnostics.push(Diagnostic {
                        line: line_no,
                        message: format!(
                            "attribute `.{}` is indented by {indent} spaces, expected {ATTRIBUTE_INDENT}",
                            &caps[1]
                        ),
                    });
                    Target::Discard
                }
                None => {
                    split.diagnostics.push(Diagnostic {
                        line: line_no,
                        message: format!("malformed attribute `{content}`"),
                    });
                    Target::Discard
                }
            };
            depth = braces(depth, content);
            continue;
        }

        let misplaced = match &mut target {
            Target::Value => {
                push_line(&mut split.value, content);
                None
            }
            Target::Attribute(attr) if depth > 0 || indent > ATTRIBUTE_INDENT => {
                push_line(&mut attr.value, content);
                None
            }
            Target::Attribute(attr) => Some(attr.name.clone()),
            Target::Discard => None,
        };
        if let Some(name) = misplaced {
            split.diagnostics.push(Diagnostic {
                line: line_no,
                message: format!(
                    "text after attribute `.{name}` must be indented deeper than the attribute"
                ),
            });
            let attribute = std::mem::replace(&mut target, Target::Discard);
            finish(&mut split, attribute);
        }
        depth = braces(depth, content);
    }

    finish(&mut split, target);
    split.value.truncate(split.value.trim_end().len());
    split
}

fn finish(split: &mut SplitBody, target: Target) {
    if let Target::Attribute(mut attr) = target {
        attr.value.truncate(attr.value.trim_end().len());
        if attr.value.is_empty() {
            split.diagnostics.push(Diagnostic {
                line: attr.line,
                message: format!("attribute `.{}` has no value", attr.name),
            });
        } else {
            split.attributes.push(attr);
        }
    }
}

/// Appends a line, separating it from earlier text with `\n`.
pub(crate) fn push_line(text: &mut String, line: &str) {
    if !text.is_empty() {
        text.push('\n');
    }
    text.push_str(line);
}

/// Placeable nesting depth after `text`, starting from `depth`.
pub(crate) fn braces(depth: usize, text: &str) -> usize {
    text.chars().fold(depth, |d, c| match c {
        '{' => d.saturating_add(1),
        '}' => d.saturating_sub(1),
        _ => d,
    })
}
