// File: src/persistence.rs
use crate::check::PlayerProgress;
use crate::core::types::{Category, PuzzleRecord};
use crate::error::{BeeError, Result};
use crate::store::{CorpusRow, CorpusSource, PuzzleSink};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// A row of the proper-noun table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProperNoun {
    pub id: u64,
    pub word: String,
    pub category: Category,
}

/// Everything the store holds, written as one bincode snapshot.
#[derive(Clone, Default, Serialize, Deserialize)]
struct StoreState {
    /// Ascending by id.
    proper_nouns: Vec<ProperNoun>,
    puzzles: BTreeMap<String, PuzzleRecord>,
    /// Keyed by (player, puzzle date).
    progress: BTreeMap<(String, String), PlayerProgress>,
}

/// A file-backed store. Every mutation rewrites the snapshot atomically.
pub struct FileStore {
    path: PathBuf,
    state: StoreState,
}

impl FileStore {
    /// Opens the snapshot at `path`. A missing file is an empty store; any
    /// other read failure is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = match load_from_disk(&path) {
            Ok(state) => state,
            Err(BeeError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store snapshot yet, starting empty");
                StoreState::default()
            }
            Err(e) => return Err(e),
        };
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clears the proper-noun table and inserts `words` with fresh ids from 1.
    pub fn replace_proper_nouns(&mut self, words: Vec<(String, Category)>) -> Result<usize> {
        let mut next = self.state.clone();
        next.proper_nouns = words
            .into_iter()
            .zip(1u64..)
            .map(|((word, category), id)| ProperNoun { id, word, category })
            .collect();
        self.commit(next)?;
        Ok(self.state.proper_nouns.len())
    }

    pub fn proper_nouns(&self) -> &[ProperNoun] {
        &self.state.proper_nouns
    }

    pub fn puzzle(&self, date: &str) -> Option<&PuzzleRecord> {
        self.state.puzzles.get(date)
    }

    /// Ascending by date.
    pub fn puzzles(&self) -> impl Iterator<Item = &PuzzleRecord> {
        self.state.puzzles.values()
    }

    /// The puzzle for `date`, or the most recent one if that day has none.
    pub fn puzzle_for_day(&self, date: &str) -> Result<&PuzzleRecord> {
        self.state
            .puzzles
            .get(date)
            .or_else(|| self.state.puzzles.values().next_back())
            .ok_or(BeeError::NoPuzzle)
    }

    pub fn progress(&self, player: &str, date: &str) -> PlayerProgress {
        self.state
            .progress
            .get(&(player.to_string(), date.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    pub fn save_progress(&mut self, player: &str, date: &str, progress: PlayerProgress) -> Result<()> {
        let mut next = self.state.clone();
        next.progress
            .insert((player.to_string(), date.to_string()), progress);
        self.commit(next)
    }

    pub fn progress_count(&self) -> usize {
        self.state.progress.len()
    }

    /// Deletes every player's progress. Puzzles and words are kept.
    pub fn wipe_progress(&mut self) -> Result<usize> {
        let wiped = self.state.progress.len();
        let mut next = self.state.clone();
        next.progress.clear();
        self.commit(next)?;
        Ok(wiped)
    }

    /// Writes all puzzles as a pretty-printed JSON array.
    pub fn export_json<W: Write>(&self, writer: W) -> Result<()> {
        let puzzles: Vec<&PuzzleRecord> = self.puzzles().collect();
        serde_json::to_writer_pretty(writer, &puzzles)?;
        Ok(())
    }

    /// Swaps in `next` only after it is on disk.
    fn commit(&mut self, next: StoreState) -> Result<()> {
        save_to_disk(&next, &self.path)?;
        self.state = next;
        Ok(())
    }
}

impl CorpusSource for FileStore {
    fn fetch_page(&self, after_id: u64, limit: usize) -> Result<Vec<CorpusRow>> {
        let nouns = &self.state.proper_nouns;
        let start = nouns.partition_point(|n| n.id <= after_id);
        Ok(nouns[start..]
            .iter()
            .take(limit)
            .map(|n| CorpusRow {
                id: n.id,
                word: n.word.clone(),
            })
            .collect())
    }
}

impl PuzzleSink for FileStore {
    fn upsert(&mut self, puzzles: &[PuzzleRecord]) -> Result<()> {
        let mut next = self.state.clone();
        for puzzle in puzzles {
            next.puzzles.insert(puzzle.date.clone(), puzzle.clone());
        }
        self.commit(next)
    }
}

fn save_to_disk(state: &StoreState, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, state)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn load_from_disk(path: &Path) -> Result<StoreState> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, answers: &[&str]) -> PuzzleRecord {
        PuzzleRecord {
            date: date.to_string(),
            center_letter: 'R',
            outer_letters: vec!['O', 'M', 'E', 'W', 'N', 'A'],
            valid_answers: answers.iter().map(|s| s.to_string()).collect(),
            max_score: 0,
        }
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.bin")).unwrap();
        assert!(store.proper_nouns().is_empty());
        assert!(matches!(store.puzzle_for_day("2025-01-01"), Err(BeeError::NoPuzzle)));
    }

    #[test]
    fn garbage_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.bin");
        fs::write(&path, [0xff; 3]).unwrap();
        assert!(FileStore::open(&path).is_err());
    }

    #[test]
    fn fetch_page_respects_cursor() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("store.bin")).unwrap();
        store
            .replace_proper_nouns(vec![
                ("ROME".into(), Category::City),
                ("SMITH".into(), Category::Surname),
                ("MARY".into(), Category::FirstName),
            ])
            .unwrap();
        let page = store.fetch_page(1, 10).unwrap();
        let ids: Vec<u64> = page.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(store.fetch_page(0, 1).unwrap()[0].word, "ROME");
        assert!(store.fetch_page(3, 10).unwrap().is_empty());
    }

    #[test]
    fn falls_back_to_latest_puzzle() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("store.bin")).unwrap();
        store
            .upsert(&[record("2025-01-01", &["ROME"]), record("2025-01-02", &["ROMEO"])])
            .unwrap();
        assert_eq!(store.puzzle_for_day("2025-01-01").unwrap().date, "2025-01-01");
        assert_eq!(store.puzzle_for_day("2030-12-31").unwrap().date, "2025-01-02");
    }

    #[test]
    fn wipe_keeps_puzzles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.bin");
        let mut store = FileStore::open(&path).unwrap();
        store.upsert(&[record("2025-01-01", &["ROME"])]).unwrap();
        store
            .save_progress("ana", "2025-01-01", PlayerProgress::default())
            .unwrap();
        assert_eq!(store.wipe_progress().unwrap(), 1);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.progress_count(), 0);
        assert!(reopened.puzzle("2025-01-01").is_some());
    }

    #[test]
    fn failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        let mut store = FileStore::open(blocked.join("store.bin")).unwrap();
        // A plain file where the snapshot directory should be.
        fs::write(&blocked, b"").unwrap();

        assert!(store.upsert(&[record("2025-01-01", &["ROME"])]).is_err());
        assert!(store.puzzle("2025-01-01").is_none());
        assert!(store
            .save_progress("ana", "2025-01-01", PlayerProgress::default())
            .is_err());
        assert_eq!(store.progress_count(), 0);
    }
}
