// File: src/loader.rs
use crate::core::types::{Corpus, CorpusWord, MIN_WORD_LENGTH};
use crate::error::{BeeError, Result};
use crate::store::CorpusSource;
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Pages through the whole proper-noun table and builds the run's corpus.
///
/// Any read error aborts the load; a partial corpus is never returned.
/// Words are uppercased and deduplicated, keeping the first occurrence.
/// Rows that are not purely alphabetic or are shorter than four letters
/// are skipped.
pub fn load_corpus<S: CorpusSource + ?Sized>(source: &S, page_size: usize) -> Result<Corpus> {
    let page_size = page_size.max(1);
    let mut after_id = 0u64;
    let mut seen: HashSet<String> = HashSet::new();
    let mut words: Vec<CorpusWord> = Vec::new();
    let mut skipped = 0usize;
    let mut pages = 0usize;

    loop {
        let page = source
            .fetch_page(after_id, page_size)
            .map_err(|e| match e {
                e @ BeeError::CorpusRead { .. } => e,
                other => BeeError::CorpusRead {
                    after_id,
                    detail: other.to_string(),
                },
            })?;
        pages += 1;

        let Some(last) = page.last() else {
            break;
        };
        after_id = last.id;
        let short = page.len() < page_size;

        for row in page {
            let word = row.word.trim().to_ascii_uppercase();
            if word.len() < MIN_WORD_LENGTH {
                skipped += 1;
                continue;
            }
            let Some(entry) = CorpusWord::new(word) else {
                skipped += 1;
                continue;
            };
            if seen.insert(entry.text().to_string()) {
                words.push(entry);
            }
        }
        debug!(pages, after_id, loaded = words.len(), "corpus page read");

        if short {
            break;
        }
    }

    if skipped > 0 {
        warn!(skipped, "skipped corpus rows that are not valid proper nouns");
    }
    if words.is_empty() {
        return Err(BeeError::CorpusEmpty);
    }
    info!(words = words.len(), pages, "loaded corpus");
    Ok(Corpus::new(words))
}
