// File: src/core/letters.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A set of uppercase ASCII letters packed into the low 26 bits of a `u32`.
///
/// Every "uses only these letters" and "covers all these letters" test in the
/// crate goes through this type, so the generator and the answer checker can
/// never disagree about what a pangram is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterMask(u32);

impl LetterMask {
    pub const EMPTY: Self = Self(0);

    fn bit(letter: char) -> Option<u32> {
        letter
            .is_ascii_uppercase()
            .then(|| 1 << (letter as u32 - 'A' as u32))
    }

    /// Builds the distinct-letter set of a word.
    /// Returns `None` if the word holds anything but `A`..=`Z`.
    pub fn from_word(word: &str) -> Option<Self> {
        word.chars()
            .try_fold(0u32, |acc, c| Self::bit(c).map(|b| acc | b))
            .map(Self)
    }

    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Option<Self> {
        letters
            .into_iter()
            .try_fold(0u32, |acc, c| Self::bit(c).map(|b| acc | b))
            .map(Self)
    }

    /// Adds a letter; non-uppercase input leaves the set unchanged.
    pub fn with(self, letter: char) -> Self {
        Self(self.0 | Self::bit(letter).unwrap_or(0))
    }

    pub fn contains(self, letter: char) -> bool {
        Self::bit(letter).is_some_and(|b| self.0 & b != 0)
    }

    /// True when every letter of `self` is also in `other`.
    pub fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// True when `self` contains every letter of `other`.
    pub fn covers(self, other: Self) -> bool {
        other.is_subset_of(self)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..26u8)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| char::from(b'A' + i))
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let mask = LetterMask::from_word("MORROW").unwrap();
        assert_eq!(mask.len(), 4);
        assert_eq!(mask.to_string(), "MORW");
    }

    #[test]
    fn rejects_non_alphabetic() {
        assert!(LetterMask::from_word("NEW YORK").is_none());
        assert!(LetterMask::from_word("rome").is_none());
    }

    #[test]
    fn subset_and_cover() {
        let set = LetterMask::from_word("ROMEWXZ").unwrap();
        let word = LetterMask::from_word("ROOMER").unwrap();
        assert!(word.is_subset_of(set));
        assert!(!word.covers(set));
        assert!(set.covers(word));
    }
}
