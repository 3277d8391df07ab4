// File: src/store.rs
//! The two seams between the puzzle core and whatever store backs it.
//! The core never reaches for a global client; callers hand these in.

use crate::core::types::PuzzleRecord;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One row of the proper-noun table as the corpus reader sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRow {
    pub id: u64,
    pub word: String,
}

pub trait CorpusSource {
    /// Rows with `id > after_id`, ascending by id, at most `limit` of them.
    /// A page shorter than `limit` means the table is exhausted.
    fn fetch_page(&self, after_id: u64, limit: usize) -> Result<Vec<CorpusRow>>;
}

pub trait PuzzleSink {
    /// Inserts or fully replaces each record, keyed by `date`.
    fn upsert(&mut self, puzzles: &[PuzzleRecord]) -> Result<()>;
}
