// src/core/counter.rs
pub mod select;
pub mod words;

pub use select::{SelectError, SelectExpression, find_select};
pub use words::WordRules;

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::core::parser::split_body;
use crate::models::WordCountResult;

static VARIABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{[ \t]*(?:\$|-)[A-Za-z][A-Za-z0-9_-]*[ \t]*\}").expect("valid regex")
});

/// Replaces every `{ $variable }` and `{ -term }` reference with a space.
#[inline]
#[must_use]
pub fn strip_variables(text: &str) -> Cow<'_, str> {
    VARIABLE_REGEX.replace_all(text, " ")
}

/// Counts strings and words in translatable bodies.
#[derive(Debug, Default, Clone)]
pub struct WordCounter {
    rules: WordRules,
}

impl WordCounter {
    #[inline]
    #[must_use]
    pub const fn new(rules: WordRules) -> Self {
        Self { rules }
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &WordRules {
        &self.rules
    }

    /// Counts one body, which may still carry indented `.attribute = value`
    /// lines.
    ///
    /// Malformed attributes are logged with their line number inside `body`
    /// and left out of the count.
    ///
    /// Every attribute is a string of its own. Whatever text is left outside
    /// the attributes is one more string when it is not empty, so an empty
    /// body counts as nothing.
    #[must_use]
    pub fn count(&self, body: &str) -> WordCountResult {
        let split = split_body(body.lines(), 0);
        for diagnostic in &split.diagnostics {
            // numbered from the first line of `body`, not of any file
            tracing::warn!(body_line = diagnostic.line, "{}", diagnostic.message);
        }

        let mut result: WordCountResult = split
            .attributes
            .iter()
            .map(|attr| WordCountResult::new(1, self.words_in(&attr.value)))
            .sum();

        if !split.value.trim().is_empty() {
            result += WordCountResult::new(1, self.words_in(&split.value));
        }

        result
    }

    /// Counts the words of one value, ignoring variable references and
    /// counting every variant of a select expression.
    #[must_use]
    pub fn words_in(&self, text: &str) -> u64 {
        self.count_expanded(&strip_variables(text))
    }

    fn count_expanded(&self, text: &str) -> u64 {
        match find_select(text) {
            None => self.rules.count_words(text),
            Some(Ok(select)) => {
                let before = text.get(..select.span.start).unwrap_or_default();
                let after = text.get(select.span.end..).unwrap_or_default();
                select
                    .variants
                    .iter()
                    .map(|variant| self.count_expanded(variant))
                    .fold(self.rules.count_words(before), u64::saturating_add)
                    .saturating_add(self.count_expanded(after))
            }
            Some(Err(err)) => {
                tracing::warn!(%err, "malformed select expression, counting it as plain text");
                self.rules.count_words(text)
            }
        }
    }
}
