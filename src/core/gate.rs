// File: src/core/gate.rs
use crate::core::letters::LetterMask;
use crate::core::types::CorpusWord;

pub const DEFAULT_MIN_WORDS: usize = 15;
pub const DEFAULT_MAX_WORDS: usize = 100;

/// Outcome of gating one (letter-set, center) candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept { pangrams: usize },
    TooFew { answers: usize },
    TooMany { answers: usize },
    NoPangram,
}

/// Answer-count bounds plus the at-least-one-pangram rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityGate {
    pub min_words: usize,
    pub max_words: usize,
}

impl Default for QualityGate {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl QualityGate {
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
        }
    }

    /// Bounds are inclusive on both ends.
    pub fn evaluate(&self, answers: &[&CorpusWord], letters: LetterMask) -> Verdict {
        let count = answers.len();
        if count < self.min_words {
            return Verdict::TooFew { answers: count };
        }
        if count > self.max_words {
            return Verdict::TooMany { answers: count };
        }
        let pangrams = answers.iter().filter(|w| w.mask().covers(letters)).count();
        if pangrams == 0 {
            Verdict::NoPangram
        } else {
            Verdict::Accept { pangrams }
        }
    }
}
