// src/models/word_count_result.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Strings and words counted in one translatable body, file or tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WordCountResult {
    pub strings: u64,
    pub words: u64,
}

impl WordCountResult {
    #[inline]
    #[must_use]
    pub const fn new(strings: u64, words: u64) -> Self {
        Self { strings, words }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.strings == 0 && self.words == 0
    }
}

impl Add for WordCountResult {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            strings: self.strings.saturating_add(rhs.strings),
            words: self.words.saturating_add(rhs.words),
        }
    }
}

impl AddAssign for WordCountResult {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for WordCountResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::add)
    }
}
