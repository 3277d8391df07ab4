// File: src/writer.rs
use crate::core::types::{Puzzle, PuzzleRecord};
use crate::error::{BeeError, Result};
use crate::store::PuzzleSink;
use tracing::info;

/// Upserts accepted puzzles keyed by date, in one batch.
///
/// Rewriting a date replaces the earlier puzzle for it entirely. A failed
/// write is fatal; whatever the store already committed stays committed.
pub fn write_puzzles<S: PuzzleSink + ?Sized>(sink: &mut S, puzzles: &[Puzzle]) -> Result<usize> {
    let records = puzzles
        .iter()
        .map(Puzzle::to_record)
        .collect::<Result<Vec<PuzzleRecord>>>()?;

    sink.upsert(&records).map_err(|e| match e {
        e @ BeeError::PuzzleWrite { .. } => e,
        other => BeeError::PuzzleWrite {
            detail: other.to_string(),
        },
    })?;

    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        info!(saved = records.len(), from = %first.date, to = %last.date, "saved puzzles");
    }
    Ok(records.len())
}
