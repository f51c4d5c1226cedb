// src/core/counter/words.rs
use std::collections::BTreeSet;
use unicode_segmentation::UnicodeSegmentation as _;

pub const DEFAULT_JOINERS: &str = "'\u{2019}-";

/// Decides which characters make up a word.
///
/// Any Unicode alphabetic character is a word character, so accented Latin
/// letters (é, ñ, ç, Ö, ...) never split a word. `extra` adds characters on
/// top of that, e.g. digits. A joiner continues a word only when it sits
/// between two word characters: `don't` and `well-known` are one word each,
/// while a leading `'` or a trailing `-` is dropped.
///
/// Text is scanned by grapheme cluster and a cluster is classified by its
/// first character, so combining marks (decomposed accents, Indic vowel
/// signs and viramas) stay in the word they follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRules {
    extra: BTreeSet<char>,
    joiners: BTreeSet<char>,
}

impl Default for WordRules {
    fn default() -> Self {
        Self::new("".chars(), DEFAULT_JOINERS.chars())
    }
}

impl WordRules {
    #[must_use]
    pub fn new(extra: impl IntoIterator<Item = char>, joiners: impl IntoIterator<Item = char>) -> Self {
        let extra: BTreeSet<char> = extra.into_iter().collect();
        let joiners = joiners
            .into_iter()
            .filter(|c| !extra.contains(c) && !c.is_alphabetic())
            .collect();
        Self { extra, joiners }
    }

    #[inline]
    #[must_use]
    pub fn is_word_char(&self, c: char) -> bool {
        c.is_alphabetic() || self.extra.contains(&c)
    }

    #[inline]
    #[must_use]
    pub fn is_joiner(&self, c: char) -> bool {
        self.joiners.contains(&c)
    }

    /// Counts the words in plain text (no placeables).
    #[must_use]
    pub fn count_words(&self, text: &str) -> u64 {
        let mut count: u64 = 0;
        let mut in_word = false;
        let mut clusters = text.graphemes(true).peekable();

        while let Some(cluster) = clusters.next() {
            if self.is_word_cluster(cluster) {
                if !in_word {
                    count = count.saturating_add(1);
                    in_word = true;
                }
            } else if in_word
                && self.is_joiner_cluster(cluster)
                && clusters.peek().is_some_and(|next| self.is_word_cluster(next))
            {
                // stays inside the current word
            } else {
                in_word = false;
            }
        }

        count
    }

    fn is_word_cluster(&self, cluster: &str) -> bool {
        cluster.chars().next().is_some_and(|c| self.is_word_char(c))
    }

    fn is_joiner_cluster(&self, cluster: &str) -> bool {
        cluster.chars().next().is_some_and(|c| self.is_joiner(c))
    }
}
