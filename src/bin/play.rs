use bee_core::check::{rank, AnswerChecker, PlayerProgress};
use bee_core::config::resolve_store_path;
use bee_core::core::types::{format_date, PuzzleRecord};
use bee_core::logging::{init_file_logging, player_log_path};
use bee_core::pipeline::today_utc;
use bee_core::{BeeError, FileStore, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use rand::seq::SliceRandom;
use std::io::{stdin, stdout, Write};
use tracing::{info, warn};

const DEFAULT_PLAYER: &str = "local";

fn main() {
    if let Err(e) = init_file_logging(&player_log_path()) {
        eprintln!("[WARN] Could not open log file: {e}");
    }
    if let Err(e) = play() {
        warn!(error = %e, "player exited with an error");
        eprintln!("[ERROR] {e}");
        std::process::exit(1);
    }
}

fn play() -> Result<()> {
    let mut player = DEFAULT_PLAYER.to_string();
    let mut store_flag = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--player" => player = args.next().ok_or_else(|| missing(&arg))?,
            "--store" => store_flag = Some(args.next().ok_or_else(|| missing(&arg))?),
            other => return Err(BeeError::Usage(format!("unknown option `{other}`"))),
        }
    }

    let mut store = FileStore::open(resolve_store_path(store_flag.as_deref()))?;
    let puzzle = store.puzzle_for_day(&format_date(today_utc())?)?.clone();
    let checker = AnswerChecker::new(&puzzle);
    let mut progress = store.progress(&player, &puzzle.date);
    let mut outer = puzzle.outer_letters.clone();
    let mut rng = rand::thread_rng();
    let mut message = String::from("Find proper nouns of 4+ letters. Every word needs the center letter.");
    info!(%player, date = %puzzle.date, "starting puzzle");

    loop {
        print_ui(&puzzle, &outer, &progress, &message)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        match input.trim() {
            "exit" => break,
            ":shuffle" => {
                outer.shuffle(&mut rng);
                message.clear();
            }
            ":found" => {
                message = if progress.found_words.is_empty() {
                    "No words found yet.".to_string()
                } else {
                    progress.found_words.iter().map(|w| to_title_case(w)).collect::<Vec<_>>().join(", ")
                };
            }
            "" => message.clear(),
            word => match checker.check(&mut progress, word) {
                Ok(accepted) => {
                    store.save_progress(&player, &puzzle.date, progress.clone())?;
                    info!(word = %accepted.word, score = accepted.score, "word accepted");
                    message = if accepted.pangram {
                        format!("Pangram! {} +{}", to_title_case(&accepted.word), accepted.score)
                    } else {
                        format!("{} +{}", to_title_case(&accepted.word), accepted.score)
                    };
                }
                Err(reason) => message = reason.to_string(),
            },
        }
    }

    println!("\nProgress saved to '{}'", store.path().display());
    Ok(())
}

fn missing(flag: &str) -> BeeError {
    BeeError::Usage(format!("missing value for `{flag}`"))
}

/// Proper nouns are stored uppercase but read better in title case.
fn to_title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn print_ui(puzzle: &PuzzleRecord, outer: &[char], progress: &PlayerProgress, message: &str) -> Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    writeln!(out, "{}", format!("Bee Proper, {}", puzzle.date).bold())?;
    writeln!(out, "---------------------------------------------------------------")?;
    writeln!(out, "Type a word and press [Enter]. ':shuffle', ':found', 'exit' to quit.\n")?;

    let tiles: String = outer.iter().map(|l| format!(" {l} ")).collect();
    writeln!(
        out,
        "  {}  {}\n",
        format!("[{}]", puzzle.center_letter).bold().yellow(),
        tiles
    )?;
    writeln!(
        out,
        "{}  {} / {} pts, {} of {} words",
        rank(progress.score, puzzle.max_score).cyan(),
        progress.score,
        puzzle.max_score,
        progress.found_words.len(),
        puzzle.valid_answers.len()
    )?;
    if !message.is_empty() {
        writeln!(out, "\n{message}")?;
    }
    write!(out, "\n> ")?;
    out.flush()?;
    Ok(())
}
