// File: src/core/scorer.rs
//! Word scoring. The generator (`max_score`) and the answer checker
//! (per-word points) both call into this module.

use crate::core::letters::LetterMask;
use crate::core::types::MIN_WORD_LENGTH;

/// Bonus added to a pangram's length.
pub const PANGRAM_BONUS: u32 = 7;

/// True when the word's distinct letters include every puzzle letter.
/// Coverage is by letter set, never by substring.
pub fn is_pangram(word: &str, puzzle_letters: LetterMask) -> bool {
    LetterMask::from_word(word).is_some_and(|mask| mask.covers(puzzle_letters))
}

/// Points for one word.
///
/// Four-letter words are worth 1 even if they were somehow a pangram.
/// Longer words score their length, plus [`PANGRAM_BONUS`] for a pangram.
pub fn score(word: &str, puzzle_letters: LetterMask) -> u32 {
    let length = word.chars().count();
    if length == MIN_WORD_LENGTH {
        return 1;
    }
    let base = u32::try_from(length).unwrap_or(u32::MAX);
    if is_pangram(word, puzzle_letters) {
        base.saturating_add(PANGRAM_BONUS)
    } else {
        base
    }
}

/// Sum of [`score`] over every answer.
pub fn max_score<S: AsRef<str>>(answers: &[S], puzzle_letters: LetterMask) -> u32 {
    answers
        .iter()
        .map(|w| score(w.as_ref(), puzzle_letters))
        .fold(0u32, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mask(letters: &str) -> LetterMask {
        LetterMask::from_word(letters).unwrap()
    }

    #[test]
    fn springfield_pangram_scores_eighteen() {
        assert_eq!(score("SPRINGFIELD", mask("SPRINGF")), 18);
    }

    #[test]
    fn four_letter_words_are_flat() {
        assert_eq!(score("ROME", mask("ROMEWAN")), 1);
        // A four-letter word cannot cover seven letters, but a smaller
        // letter set shows the flat rule wins over the bonus.
        assert_eq!(score("ROME", mask("ROME")), 1);
    }

    #[test]
    fn non_pangram_scores_length() {
        assert_eq!(score("ROOMER", mask("ROMEWAN")), 6);
    }

    #[test]
    fn pangram_is_letter_coverage_not_substring() {
        let letters = mask("AEMNORW");
        assert!(is_pangram("MORWENNA", letters));
        assert!(!is_pangram("ROOMER", letters));
    }

    #[test]
    fn max_score_sums_answers() {
        let letters = mask("AEMNORW");
        let answers = ["ROME", "ROMEO", "MORWENNA"];
        assert_eq!(max_score(&answers, letters), 1 + 5 + 15);
    }

    proptest! {
        #[test]
        fn four_letters_always_one(word in "[A-Z]{4}") {
            prop_assert_eq!(score(&word, mask("ABCDEFG")), 1);
        }

        #[test]
        fn non_pangrams_score_length(word in "[A-F]{5,15}") {
            // G is never present, so no word covers ABCDEFG.
            prop_assert_eq!(score(&word, mask("ABCDEFG")), word.len() as u32);
        }

        #[test]
        fn pangrams_score_length_plus_seven(extra in "[A-G]{0,10}") {
            let word = format!("ABCDEFG{extra}");
            prop_assert_eq!(score(&word, mask("ABCDEFG")), word.len() as u32 + 7);
        }
    }
}
