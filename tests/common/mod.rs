#![allow(dead_code)]

use bee_core::core::types::PuzzleRecord;
use bee_core::store::{CorpusRow, CorpusSource, PuzzleSink};
use bee_core::{BeeError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::Cell;
use std::collections::BTreeMap;

/// In-memory stand-in for the hosted store.
#[derive(Default)]
pub struct MemoryStore {
    pub rows: Vec<CorpusRow>,
    pub puzzles: BTreeMap<String, PuzzleRecord>,
    /// Fail any page request whose cursor is at or past this id.
    pub fail_reads_from: Option<u64>,
    pub fail_writes: bool,
    pub fetches: Cell<usize>,
    pub upserts: usize,
}

impl MemoryStore {
    pub fn with_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            rows: words
                .iter()
                .zip(1u64..)
                .map(|(w, id)| CorpusRow { id, word: w.as_ref().to_string() })
                .collect(),
            ..Default::default()
        }
    }
}

impl CorpusSource for MemoryStore {
    fn fetch_page(&self, after_id: u64, limit: usize) -> Result<Vec<CorpusRow>> {
        self.fetches.set(self.fetches.get() + 1);
        if self.fail_reads_from.is_some_and(|id| after_id >= id) {
            return Err(BeeError::CorpusRead {
                after_id,
                detail: "simulated outage".into(),
            });
        }
        Ok(self
            .rows
            .iter()
            .filter(|r| r.id > after_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

impl PuzzleSink for MemoryStore {
    fn upsert(&mut self, puzzles: &[PuzzleRecord]) -> Result<()> {
        if self.fail_writes {
            return Err(BeeError::PuzzleWrite {
                detail: "simulated write failure".into(),
            });
        }
        self.upserts += 1;
        for p in puzzles {
            self.puzzles.insert(p.date.clone(), p.clone());
        }
        Ok(())
    }
}

/// Random words over the first twelve letters, some long enough to be
/// pangrams of many seven-letter subsets.
pub fn synthetic_words(seed: u64, count: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"AEILNORSTMCD";
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..=14);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}
