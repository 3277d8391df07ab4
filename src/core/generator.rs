// File: src/core/generator.rs
//! Randomized rejection sampling over seven-letter sets.
//!
//! Each attempt draws seven letters from the candidate pool, skips sets
//! already tried this run, and then tries every drawn letter as the center
//! until the [`QualityGate`] accepts one. At most one puzzle comes out of a
//! letter-set.

use crate::config::GeneratorConfig;
use crate::core::gate::{QualityGate, Verdict};
use crate::core::letters::LetterMask;
use crate::core::ranker::LetterRanking;
use crate::core::scorer;
use crate::core::types::{Corpus, CorpusWord, LetterSet, Puzzle, PUZZLE_LETTERS};
use crate::error::{BeeError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use time::{Date, Duration};
use tracing::{debug, info, trace, warn};

/// A center letter the gate accepted, with its answers in corpus order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterChoice {
    pub center: char,
    pub answers: Vec<String>,
    pub pangrams: usize,
}

/// Everything a run produced, including the bookkeeping an operator wants
/// to see when the run falls short.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub puzzles: Vec<Puzzle>,
    pub requested: usize,
    pub attempts: usize,
    pub letter_sets_tried: usize,
    pub duplicate_draws: usize,
}

impl GenerationReport {
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.puzzles.len())
    }
}

pub struct PuzzleGenerator<'c> {
    corpus: &'c Corpus,
    candidates: Vec<char>,
    gate: QualityGate,
    puzzle_count: usize,
    max_attempts: usize,
}

impl<'c> PuzzleGenerator<'c> {
    /// Samples from the top `config.candidate_pool` letters of `ranking`.
    pub fn new(corpus: &'c Corpus, ranking: &LetterRanking, config: &GeneratorConfig) -> Result<Self> {
        Self::with_candidates(corpus, ranking.candidates(config.candidate_pool), config)
    }

    /// Samples from an explicit candidate alphabet.
    pub fn with_candidates(
        corpus: &'c Corpus,
        candidates: Vec<char>,
        config: &GeneratorConfig,
    ) -> Result<Self> {
        config.validate()?;
        let distinct = LetterMask::from_letters(candidates.iter().copied()).ok_or_else(|| {
            BeeError::InvalidConfig("candidate letters must be uppercase A-Z".into())
        })?;
        if distinct.len() != candidates.len() {
            return Err(BeeError::InvalidConfig("candidate letters must be distinct".into()));
        }
        if candidates.len() < PUZZLE_LETTERS {
            return Err(BeeError::AlphabetTooSmall {
                available: candidates.len(),
            });
        }
        Ok(Self {
            corpus,
            candidates,
            gate: config.gate(),
            puzzle_count: config.puzzle_count,
            max_attempts: config.max_attempts,
        })
    }

    pub fn candidates(&self) -> &[char] {
        &self.candidates
    }

    /// Runs the sampling loop. Puzzle `i` (0-based, acceptance order) is
    /// dated `start + i` days.
    ///
    /// Fails with [`BeeError::NoPuzzlesGenerated`] if nothing was accepted.
    /// A partial result is still `Ok`; check [`GenerationReport::shortfall`].
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, start: Date) -> Result<GenerationReport> {
        let mut pool = self.candidates.clone();
        let mut used: HashSet<String> = HashSet::new();
        let mut puzzles: Vec<Puzzle> = Vec::new();
        let mut attempts = 0;
        let mut duplicate_draws = 0;
        let combinations = binomial(pool.len(), PUZZLE_LETTERS);

        while attempts < self.max_attempts && puzzles.len() < self.puzzle_count {
            if used.len() >= combinations {
                debug!(combinations, "every letter set has been tried");
                break;
            }
            attempts += 1;

            let (drawn, _) = pool.partial_shuffle(rng, PUZZLE_LETTERS);
            let Some(set) = LetterSet::new(drawn) else {
                continue;
            };
            if !used.insert(set.key()) {
                duplicate_draws += 1;
                continue;
            }

            let Some(choice) = self.choose_center(&set) else {
                continue;
            };

            let offset = i64::try_from(puzzles.len()).map_err(|_| BeeError::DateOutOfRange)?;
            let date = start
                .checked_add(Duration::days(offset))
                .ok_or(BeeError::DateOutOfRange)?;
            let puzzle = Puzzle {
                date,
                center_letter: choice.center,
                outer_letters: set.outer(choice.center),
                max_score: scorer::max_score(&choice.answers, set.mask()),
                valid_answers: choice.answers,
            };
            let outer: String = puzzle.outer_letters.iter().collect();
            info!(
                number = puzzles.len() + 1,
                %date,
                center = %puzzle.center_letter,
                %outer,
                words = puzzle.valid_answers.len(),
                pangrams = choice.pangrams,
                max_score = puzzle.max_score,
                "accepted puzzle"
            );
            puzzles.push(puzzle);
        }

        let report = GenerationReport {
            requested: self.puzzle_count,
            attempts,
            letter_sets_tried: used.len(),
            duplicate_draws,
            puzzles,
        };

        if report.puzzles.is_empty() {
            return Err(BeeError::NoPuzzlesGenerated {
                attempts: report.attempts,
                letter_sets_tried: report.letter_sets_tried,
            });
        }
        if report.shortfall() > 0 {
            warn!(
                generated = report.puzzles.len(),
                requested = report.requested,
                attempts = report.attempts,
                "generation stopped short of the requested puzzle count"
            );
        }
        Ok(report)
    }

    /// Tries each letter of `set` as the center, in drawn order, and returns
    /// the first one the gate accepts.
    pub fn choose_center(&self, set: &LetterSet) -> Option<CenterChoice> {
        let matching: Vec<&CorpusWord> = self
            .corpus
            .words()
            .iter()
            .filter(|w| w.mask().is_subset_of(set.mask()))
            .collect();

        // No center can pass if the whole set is already below the minimum.
        if matching.len() < self.gate.min_words {
            trace!(letters = %set.key(), matching = matching.len(), "too few matching words");
            return None;
        }

        for &center in set.letters() {
            let answers: Vec<&CorpusWord> = matching
                .iter()
                .copied()
                .filter(|w| w.mask().contains(center))
                .collect();
            match self.gate.evaluate(&answers, set.mask()) {
                Verdict::Accept { pangrams } => {
                    return Some(CenterChoice {
                        center,
                        answers: answers.iter().map(|w| w.text().to_string()).collect(),
                        pangrams,
                    });
                }
                verdict => trace!(letters = %set.key(), %center, ?verdict, "center rejected"),
            }
        }
        None
    }
}

/// `n choose k`, saturating at `usize::MAX`.
fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1usize, |acc, i| acc.saturating_mul(n - i) / (i + 1))
}
