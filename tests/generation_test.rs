mod common;

use bee_core::config::GeneratorConfig;
use bee_core::core::letters::LetterMask;
use bee_core::core::ranker::LetterRanking;
use bee_core::core::scorer::is_pangram;
use bee_core::core::types::{parse_date, Corpus, LetterSet};
use bee_core::{BeeError, PuzzleGenerator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use time::Duration;

const TOY: [&str; 5] = ["ROME", "ROMEO", "MOORE", "MORROW", "ROOMER"];

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Scoring rule restated independently of the library.
fn expected_score(word: &str, letters: &[char]) -> u32 {
    if word.len() == 4 {
        return 1;
    }
    let distinct: HashSet<char> = word.chars().collect();
    let bonus = if letters.iter().all(|l| distinct.contains(l)) { 7 } else { 0 };
    word.len() as u32 + bonus
}

#[test]
fn toy_corpus_rejected_at_default_bounds() {
    let corpus = Corpus::from_words(TOY);
    let letters = vec!['R', 'O', 'M', 'E', 'W', 'X', 'Z'];
    let config = GeneratorConfig { max_attempts: 100, ..Default::default() };
    let generator = PuzzleGenerator::with_candidates(&corpus, letters, &config).unwrap();
    let err = generator.generate(&mut rng(1), parse_date("2025-01-01").unwrap()).unwrap_err();
    assert!(matches!(err, BeeError::NoPuzzlesGenerated { .. }));
}

#[test]
fn toy_corpus_has_no_pangram_even_with_relaxed_minimum() {
    let corpus = Corpus::from_words(TOY);
    let letters = vec!['R', 'O', 'M', 'E', 'W', 'X', 'Z'];
    let set = LetterSet::new(&letters).unwrap();
    // ROOMER uses only puzzle letters but covers four of seven.
    assert!(!is_pangram("ROOMER", set.mask()));

    let config = GeneratorConfig { min_words: 1, max_attempts: 100, ..Default::default() };
    let generator = PuzzleGenerator::with_candidates(&corpus, letters, &config).unwrap();
    assert!(generator.choose_center(&set).is_none());
    assert!(matches!(
        generator.generate(&mut rng(1), parse_date("2025-01-01").unwrap()),
        Err(BeeError::NoPuzzlesGenerated { letter_sets_tried: 1, .. })
    ));
}

#[test]
fn covering_word_makes_toy_corpus_playable() {
    let mut words = TOY.to_vec();
    words.push("MORWENNA");
    let corpus = Corpus::from_words(words);
    let letters = vec!['R', 'O', 'M', 'E', 'W', 'N', 'A'];
    let config = GeneratorConfig { min_words: 1, max_attempts: 100, ..Default::default() };
    let generator = PuzzleGenerator::with_candidates(&corpus, letters.clone(), &config).unwrap();
    let report = generator.generate(&mut rng(3), parse_date("2025-01-01").unwrap()).unwrap();

    let puzzle = &report.puzzles[0];
    let mask = LetterMask::from_letters(letters.iter().copied()).unwrap();
    let pangrams: Vec<&String> = puzzle
        .valid_answers
        .iter()
        .filter(|w| is_pangram(w, mask))
        .collect();
    assert_eq!(pangrams, vec!["MORWENNA"]);
}

#[test]
fn generated_puzzles_hold_every_invariant() {
    let words = common::synthetic_words(11, 3_000);
    let corpus = Corpus::from_words(&words);
    let ranking = LetterRanking::from_corpus(&corpus);
    let config = GeneratorConfig {
        puzzle_count: 25,
        min_words: 5,
        max_words: 5_000,
        max_attempts: 2_000,
        candidate_pool: 10,
        ..Default::default()
    };
    let start = parse_date("2025-12-30").unwrap();
    let generator = PuzzleGenerator::new(&corpus, &ranking, &config).unwrap();
    let report = generator.generate(&mut rng(5), start).unwrap();
    assert!(!report.puzzles.is_empty());

    let pool: HashSet<char> = ranking.candidates(10).into_iter().collect();
    let corpus_order: Vec<&str> = corpus.words().iter().map(|w| w.text()).collect();
    let mut keys = HashSet::new();

    for (i, puzzle) in report.puzzles.iter().enumerate() {
        assert_eq!(puzzle.date, start + Duration::days(i as i64));

        let mut letters = vec![puzzle.center_letter];
        letters.extend(&puzzle.outer_letters);
        let distinct: HashSet<char> = letters.iter().copied().collect();
        assert_eq!(distinct.len(), 7);
        assert!(distinct.is_subset(&pool));

        let mut sorted = letters.clone();
        sorted.sort_unstable();
        assert!(keys.insert(sorted), "letter set repeated within a run");

        let count = puzzle.valid_answers.len();
        assert!((config.min_words..=config.max_words).contains(&count));
        assert!(puzzle
            .valid_answers
            .iter()
            .any(|w| letters.iter().all(|l| w.contains(*l))));

        for answer in &puzzle.valid_answers {
            assert!(answer.contains(puzzle.center_letter));
            assert!(answer.chars().all(|c| distinct.contains(&c)));
        }

        let positions: Vec<usize> = puzzle
            .valid_answers
            .iter()
            .map(|w| corpus_order.iter().position(|c| c == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]), "answers must keep corpus order");

        let recomputed: u32 = puzzle
            .valid_answers
            .iter()
            .map(|w| expected_score(w, &letters))
            .sum();
        assert_eq!(puzzle.max_score, recomputed);
    }
}

#[test]
fn same_seed_same_puzzles() {
    let words = common::synthetic_words(21, 1_500);
    let corpus = Corpus::from_words(&words);
    let ranking = LetterRanking::from_corpus(&corpus);
    let config = GeneratorConfig {
        puzzle_count: 10,
        min_words: 5,
        max_words: 5_000,
        max_attempts: 1_000,
        candidate_pool: 10,
        ..Default::default()
    };
    let start = parse_date("2025-01-01").unwrap();
    let generator = PuzzleGenerator::new(&corpus, &ranking, &config).unwrap();
    let a = generator.generate(&mut rng(8), start).unwrap();
    let b = generator.generate(&mut rng(8), start).unwrap();
    assert_eq!(a.puzzles, b.puzzles);
}
