// File: src/core/ranker.rs
use crate::core::letters::LetterMask;
use crate::core::types::Corpus;

/// Default number of top letters eligible for letter-sets.
pub const DEFAULT_CANDIDATE_POOL: usize = 20;

/// Letters ranked by how many distinct words contain them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRanking {
    ranked: Vec<(char, usize)>,
}

impl LetterRanking {
    /// Counts, for each letter, the words containing it at least once.
    ///
    /// Ties keep discovery order: the letter first seen while walking the
    /// corpus in load order ranks higher. The sort is stable, so a fixed
    /// corpus always produces the same ranking.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut ranked: Vec<(char, usize)> = Vec::new();
        let mut slot: [Option<usize>; 26] = [None; 26];

        for word in corpus.words() {
            // Walk letters in word order so discovery order follows the text.
            let mut counted = LetterMask::EMPTY;
            for letter in word.text().chars() {
                if counted.contains(letter) {
                    continue;
                }
                counted = counted.with(letter);
                let idx = (letter as u8 - b'A') as usize;
                match slot[idx] {
                    Some(pos) => ranked[pos].1 += 1,
                    None => {
                        slot[idx] = Some(ranked.len());
                        ranked.push((letter, 1));
                    }
                }
            }
        }

        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        Self { ranked }
    }

    /// Every letter seen, most frequent first, with its word count.
    pub fn ranked(&self) -> &[(char, usize)] {
        &self.ranked
    }

    /// The top `k` letters (fewer if the corpus has fewer distinct letters).
    pub fn candidates(&self, k: usize) -> Vec<char> {
        self.ranked.iter().take(k).map(|&(l, _)| l).collect()
    }
}
