// src/core/types.rs
use crate::core::letters::LetterMask;
use crate::error::{BeeError, Result};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Iso8601;
use time::Date;

/// Number of letters in every puzzle.
pub const PUZZLE_LETTERS: usize = 7;

/// Shortest word a puzzle accepts.
pub const MIN_WORD_LENGTH: usize = 4;

/// Where a proper noun came from. Only the importer cares; generation
/// works on the flat word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    City,
    Surname,
    FirstName,
}

/// One corpus word with its distinct-letter set precomputed.
///
/// Only [`CorpusWord::new`] builds one, so `text` is always `A`..=`Z` and
/// `mask` always matches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusWord {
    text: String,
    mask: LetterMask,
}

impl CorpusWord {
    /// Accepts an already-normalized uppercase word.
    pub fn new(text: String) -> Option<Self> {
        let mask = LetterMask::from_word(&text)?;
        Some(Self { text, mask })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mask(&self) -> LetterMask {
        self.mask
    }
}

/// The deduplicated, uppercase word list for one generation run.
/// Iteration order is load order and is preserved in every answer list.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<CorpusWord>,
}

impl Corpus {
    pub fn new(words: Vec<CorpusWord>) -> Self {
        Self { words }
    }

    /// Test and tooling helper: normalizes and dedups plain strings the same
    /// way the loader does.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = std::collections::HashSet::new();
        let words = words
            .into_iter()
            .filter_map(|w| CorpusWord::new(w.as_ref().trim().to_ascii_uppercase()))
            .filter(|w| seen.insert(w.text().to_string()))
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[CorpusWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Seven distinct letters in the order they were drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: [char; PUZZLE_LETTERS],
    mask: LetterMask,
}

impl LetterSet {
    /// Returns `None` unless `letters` is exactly seven distinct uppercase letters.
    pub fn new(letters: &[char]) -> Option<Self> {
        let letters: [char; PUZZLE_LETTERS] = letters.try_into().ok()?;
        let mask = LetterMask::from_letters(letters)?;
        (mask.len() == PUZZLE_LETTERS).then_some(Self { letters, mask })
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn mask(&self) -> LetterMask {
        self.mask
    }

    /// Canonical form used to recognize a set already tried: the letters sorted.
    pub fn key(&self) -> String {
        self.mask.to_string()
    }

    /// The six letters other than `center`, in drawn order.
    pub fn outer(&self, center: char) -> Vec<char> {
        self.letters.iter().copied().filter(|&l| l != center).collect()
    }
}

/// An accepted puzzle. Built once by the generator and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub date: Date,
    pub center_letter: char,
    pub outer_letters: Vec<char>,
    pub valid_answers: Vec<String>,
    pub max_score: u32,
}

impl Puzzle {
    pub fn to_record(&self) -> Result<PuzzleRecord> {
        Ok(PuzzleRecord {
            date: format_date(self.date)?,
            center_letter: self.center_letter,
            outer_letters: self.outer_letters.clone(),
            valid_answers: self.valid_answers.clone(),
            max_score: self.max_score,
        })
    }
}

/// The stored shape of a puzzle, keyed by `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub date: String,
    pub center_letter: char,
    pub outer_letters: Vec<char>,
    pub valid_answers: Vec<String>,
    pub max_score: u32,
}

impl PuzzleRecord {
    /// All seven letters, center first.
    pub fn letters(&self) -> Vec<char> {
        std::iter::once(self.center_letter)
            .chain(self.outer_letters.iter().copied())
            .collect()
    }

    pub fn letter_mask(&self) -> LetterMask {
        LetterMask::from_letters(self.letters()).unwrap_or_default()
    }

    pub fn view(&self) -> PuzzleView {
        PuzzleView {
            date: self.date.clone(),
            center_letter: self.center_letter,
            outer_letters: self.outer_letters.clone(),
            max_score: self.max_score,
            answer_count: self.valid_answers.len(),
        }
    }
}

/// What a player is allowed to see: everything except the answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleView {
    pub date: String,
    pub center_letter: char,
    pub outer_letters: Vec<char>,
    pub max_score: u32,
    pub answer_count: usize,
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> Result<String> {
    Ok(date.format(&Iso8601::DATE)?)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<Date> {
    Date::parse(input.trim(), &Iso8601::DATE).map_err(|_| BeeError::InvalidDate {
        input: input.to_string(),
    })
}
