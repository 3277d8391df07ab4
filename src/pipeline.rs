// File: src/pipeline.rs
use crate::config::GeneratorConfig;
use crate::core::generator::{GenerationReport, PuzzleGenerator};
use crate::core::ranker::LetterRanking;
use crate::error::Result;
use crate::loader::{load_corpus, DEFAULT_PAGE_SIZE};
use crate::store::{CorpusSource, PuzzleSink};
use crate::writer::write_puzzles;
use rand::Rng;
use time::{Date, OffsetDateTime};
use tracing::info;

/// One batch run: load the corpus, rank letters, generate, persist.
///
/// Nothing is written unless at least one puzzle was accepted.
pub fn run_generation<C, S, R>(
    source: &C,
    sink: &mut S,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GenerationReport>
where
    C: CorpusSource + ?Sized,
    S: PuzzleSink + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;
    let corpus = load_corpus(source, DEFAULT_PAGE_SIZE)?;

    let ranking = LetterRanking::from_corpus(&corpus);
    let top: String = ranking.candidates(15).into_iter().collect();
    info!(top_letters = %top, "ranked letters");

    let generator = PuzzleGenerator::new(&corpus, &ranking, config)?;
    let start = config.start_date.unwrap_or_else(today_utc);
    info!(count = config.puzzle_count, %start, "generating puzzles");

    let report = generator.generate(rng, start)?;
    let (fewest, most) = report
        .puzzles
        .iter()
        .map(|p| p.valid_answers.len())
        .fold((usize::MAX, 0), |(lo, hi), n| (lo.min(n), hi.max(n)));
    info!(
        generated = report.puzzles.len(),
        requested = report.requested,
        letter_sets_tried = report.letter_sets_tried,
        duplicate_draws = report.duplicate_draws,
        fewest_words = fewest,
        most_words = most,
        "generation finished"
    );

    write_puzzles(sink, &report.puzzles)?;
    Ok(report)
}

pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}
