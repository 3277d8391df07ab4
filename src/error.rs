// File: src/error.rs
use thiserror::Error;

/// Errors that abort a generation run or a store operation.
///
/// Rejected letter-sets and rejected centers are never errors; they are
/// skipped inside the generator loop. Answer-check feedback lives in
/// [`crate::check::Rejection`].
#[derive(Error, Debug)]
pub enum BeeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store snapshot is unreadable: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not format date: {0}")]
    DateFormat(#[from] time::error::Format),

    /// The backing store failed while paging through the corpus.
    #[error("corpus read failed after id {after_id}: {detail}")]
    CorpusRead { after_id: u64, detail: String },

    #[error("corpus is empty; import proper nouns first")]
    CorpusEmpty,

    #[error("puzzle write failed: {detail}")]
    PuzzleWrite { detail: String },

    /// Fewer than seven distinct letters are eligible for letter-sets.
    #[error("candidate alphabet has {available} letters; a puzzle needs 7")]
    AlphabetTooSmall { available: usize },

    #[error(
        "no puzzles generated after {attempts} attempts ({letter_sets_tried} letter sets tried); \
         adjust the word bounds or candidate pool"
    )]
    NoPuzzlesGenerated { attempts: usize, letter_sets_tried: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("puzzle dates run past the supported calendar range")]
    DateOutOfRange,

    #[error("no puzzle available")]
    NoPuzzle,

    #[error("{0}")]
    Usage(String),
}

pub type Result<T, E = BeeError> = std::result::Result<T, E>;
