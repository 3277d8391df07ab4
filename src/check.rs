// File: src/check.rs
use crate::core::letters::LetterMask;
use crate::core::scorer;
use crate::core::types::{PuzzleRecord, MIN_WORD_LENGTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A player's found words and running score for one puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub found_words: Vec<String>,
    pub score: u32,
}

/// Why a submission was refused. Reported to the player, not logged as a failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    #[error("Too short")]
    TooShort,
    #[error("Missing center letter")]
    MissingCenter,
    #[error("Invalid letters")]
    InvalidLetters,
    #[error("Not a valid word")]
    NotAWord,
    #[error("Already found")]
    AlreadyFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accepted {
    pub word: String,
    pub score: u32,
    pub total_score: u32,
    pub pangram: bool,
}

/// Checks submissions against one stored puzzle.
pub struct AnswerChecker<'p> {
    puzzle: &'p PuzzleRecord,
    letters: LetterMask,
}

impl<'p> AnswerChecker<'p> {
    pub fn new(puzzle: &'p PuzzleRecord) -> Self {
        Self {
            puzzle,
            letters: puzzle.letter_mask(),
        }
    }

    /// Validates `submission` without recording it.
    pub fn validate(&self, progress: &PlayerProgress, submission: &str) -> Result<String, Rejection> {
        let word = submission.trim().to_uppercase();
        if word.chars().count() < MIN_WORD_LENGTH {
            return Err(Rejection::TooShort);
        }
        if !word.contains(self.puzzle.center_letter) {
            return Err(Rejection::MissingCenter);
        }
        let uses_only_puzzle_letters =
            LetterMask::from_word(&word).is_some_and(|mask| mask.is_subset_of(self.letters));
        if !uses_only_puzzle_letters {
            return Err(Rejection::InvalidLetters);
        }
        if !self.puzzle.valid_answers.contains(&word) {
            return Err(Rejection::NotAWord);
        }
        if progress.found_words.contains(&word) {
            return Err(Rejection::AlreadyFound);
        }
        Ok(word)
    }

    /// Validates and, on success, records the word and its points.
    pub fn check(&self, progress: &mut PlayerProgress, submission: &str) -> Result<Accepted, Rejection> {
        let word = self.validate(progress, submission)?;
        let score = scorer::score(&word, self.letters);
        progress.found_words.push(word.clone());
        progress.score = progress.score.saturating_add(score);
        Ok(Accepted {
            pangram: scorer::is_pangram(&word, self.letters),
            word,
            score,
            total_score: progress.score,
        })
    }
}

/// Progress ranks, as a fraction of `max_score` reached.
pub const RANKS: [(&str, f64); 10] = [
    ("Beginner", 0.0),
    ("Good Start", 0.02),
    ("Moving Up", 0.05),
    ("Good", 0.08),
    ("Solid", 0.15),
    ("Nice", 0.25),
    ("Great", 0.4),
    ("Amazing", 0.5),
    ("Genius", 0.7),
    ("Queen Bee", 1.0),
];

/// Highest rank whose threshold the score has reached.
pub fn rank(score: u32, max_score: u32) -> &'static str {
    if max_score == 0 {
        return RANKS[0].0;
    }
    let reached = f64::from(score) / f64::from(max_score);
    RANKS
        .iter()
        .rev()
        .find(|&&(_, threshold)| reached >= threshold)
        .map_or(RANKS[0].0, |&(name, _)| name)
}
