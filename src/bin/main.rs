use bee_core::check::{rank, AnswerChecker};
use bee_core::config::{resolve_store_path, GeneratorConfig};
use bee_core::core::types::{format_date, parse_date};
use bee_core::import::{merge_categories, parse_cities, parse_first_names, parse_surnames};
use bee_core::logging::init_stderr_logging;
use bee_core::pipeline::{run_generation, today_utc};
use bee_core::{BeeError, FileStore, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info};

const DEFAULT_PLAYER: &str = "local";

const USAGE: &str = "\
usage: bee <command> [options]

commands:
  import --cities <file> --surnames <file> [--first-names <file>]
  generate [--count N] [--start-date YYYY-MM-DD] [--min-words N] [--max-words N]
           [--attempts N] [--pool K] [--seed S]
  today [--date YYYY-MM-DD] [--player P]
  check --word W [--date YYYY-MM-DD] [--player P]
  export [--out <file>]
  wipe-progress

every command accepts --store <file> (default: $BEE_STORE, then bee_store.bin)";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Import {
        cities: PathBuf,
        surnames: PathBuf,
        first_names: Option<PathBuf>,
    },
    Generate(GeneratorConfig),
    Today {
        date: Option<String>,
        player: String,
    },
    Check {
        word: String,
        date: Option<String>,
        player: String,
    },
    Export {
        out: Option<PathBuf>,
    },
    WipeProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    store: Option<String>,
}

fn main() {
    init_stderr_logging();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let exit_code = run(std::env::args_os(), &mut input, &mut stdout, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run<I, R, W, E>(args: I, input: &mut R, out: &mut W, err: &mut E) -> i32
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let options = match parse_args(args) {
        Ok(options) => options,
        Err(e) => {
            let _ = writeln!(err, "error: {e}\n\n{USAGE}");
            return 2;
        }
    };

    if options.command == Command::Help {
        let _ = writeln!(out, "{USAGE}");
        return 0;
    }

    let store_path = resolve_store_path(options.store.as_deref());
    match execute(options.command, store_path, input, out) {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, "bee failed");
            let _ = writeln!(err, "error: {e}");
            1
        }
    }
}

fn execute<R: BufRead, W: Write>(
    command: Command,
    store_path: PathBuf,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut store = FileStore::open(store_path)?;

    match command {
        Command::Help => Ok(()),
        Command::Import {
            cities,
            surnames,
            first_names,
        } => {
            let cities = parse_cities(&fs::read_to_string(cities)?);
            let surnames = parse_surnames(&fs::read_to_string(surnames)?);
            let first_names = match first_names {
                Some(path) => parse_first_names(&fs::read_to_string(path)?),
                None => Vec::new(),
            };
            let rows = merge_categories(surnames, first_names, cities);
            let inserted = store.replace_proper_nouns(rows)?;
            writeln!(out, "Imported {inserted} proper nouns into {}", store.path().display())?;
            Ok(())
        }
        Command::Generate(config) => {
            let seed = config.seed.unwrap_or_else(rand::random);
            info!(seed, "seeding letter sampler");
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            // The store is both the corpus source and the puzzle sink; read
            // the corpus from a snapshot so the sink can borrow mutably.
            let source = FileStore::open(store.path().to_path_buf())?;
            let report = run_generation(&source, &mut store, &config, &mut rng)?;

            writeln!(out, "Generated: {}/{}", report.puzzles.len(), report.requested)?;
            writeln!(out, "Letter sets tried: {}", report.letter_sets_tried)?;
            if let (Some(first), Some(last)) = (report.puzzles.first(), report.puzzles.last()) {
                writeln!(
                    out,
                    "Date range: {} to {}",
                    format_date(first.date)?,
                    format_date(last.date)?
                )?;
            }
            Ok(())
        }
        Command::Today { date, player } => {
            let date = resolve_day(date)?;
            let puzzle = store.puzzle_for_day(&date)?;
            let progress = store.progress(&player, &puzzle.date);
            let body = json!({
                "puzzle": puzzle.view(),
                "progress": &progress,
                "rank": rank(progress.score, puzzle.max_score),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            Ok(())
        }
        Command::Check { word, date, player } => {
            let date = resolve_day(date)?;
            let puzzle = store.puzzle_for_day(&date)?.clone();
            let mut progress = store.progress(&player, &puzzle.date);
            let checker = AnswerChecker::new(&puzzle);
            let body = match checker.check(&mut progress, &word) {
                Ok(accepted) => {
                    store.save_progress(&player, &puzzle.date, progress.clone())?;
                    json!({
                        "valid": true,
                        "word": accepted.word,
                        "score": accepted.score,
                        "pangram": accepted.pangram,
                        "total_score": accepted.total_score,
                        "found_words": progress.found_words,
                        "rank": rank(accepted.total_score, puzzle.max_score),
                    })
                }
                Err(reason) => json!({ "valid": false, "error": reason.to_string() }),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            Ok(())
        }
        Command::Export { out: Some(path) } => {
            let file = BufWriter::new(File::create(&path)?);
            store.export_json(file)?;
            writeln!(out, "Exported puzzles to {}", path.display())?;
            Ok(())
        }
        Command::Export { out: None } => {
            store.export_json(&mut *out)?;
            writeln!(out)?;
            Ok(())
        }
        Command::WipeProgress => {
            let rows = store.progress_count();
            writeln!(out, "Target: {}", store.path().display())?;
            writeln!(out, "Found {rows} progress rows.")?;
            if rows == 0 {
                writeln!(out, "Nothing to wipe.")?;
                return Ok(());
            }
            write!(out, "Type \"yes\" to confirm wipe: ")?;
            out.flush()?;
            let mut answer = String::new();
            input.read_line(&mut answer)?;
            if !answer.trim().eq_ignore_ascii_case("yes") {
                writeln!(out, "Aborted.")?;
                return Ok(());
            }
            let wiped = store.wipe_progress()?;
            writeln!(out, "Wiped {wiped} progress rows. Puzzles and words are preserved.")?;
            Ok(())
        }
    }
}

fn resolve_day(date: Option<String>) -> Result<String> {
    match date {
        Some(date) => Ok(date),
        None => format_date(today_utc()),
    }
}

fn parse_args<I>(args: I) -> Result<CliOptions>
where
    I: IntoIterator<Item = OsString>,
{
    let mut iter = args
        .into_iter()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned());

    let Some(name) = iter.next() else {
        return Err(BeeError::Usage("missing command".into()));
    };
    if name == "-h" || name == "--help" || name == "help" {
        return Ok(CliOptions {
            command: Command::Help,
            store: None,
        });
    }

    let mut flags: Vec<(String, String)> = Vec::new();
    let mut store = None;
    while let Some(arg) = iter.next() {
        if arg == "-h" || arg == "--help" {
            return Ok(CliOptions {
                command: Command::Help,
                store: None,
            });
        }
        if !arg.starts_with("--") {
            return Err(BeeError::Usage(format!("unexpected argument `{arg}`")));
        }
        let (flag, value) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_string(), value.to_string()),
            None => {
                let value = iter
                    .next()
                    .ok_or_else(|| BeeError::Usage(format!("missing value for `{arg}`")))?;
                (arg, value)
            }
        };
        if flag == "--store" {
            store = Some(value);
        } else {
            flags.push((flag, value));
        }
    }

    let command = match name.as_str() {
        "import" => {
            let mut cities = None;
            let mut surnames = None;
            let mut first_names = None;
            for (flag, value) in flags {
                match flag.as_str() {
                    "--cities" => cities = Some(PathBuf::from(value)),
                    "--surnames" => surnames = Some(PathBuf::from(value)),
                    "--first-names" => first_names = Some(PathBuf::from(value)),
                    _ => return Err(unknown(&flag)),
                }
            }
            Command::Import {
                cities: cities.ok_or_else(|| BeeError::Usage("import needs --cities".into()))?,
                surnames: surnames
                    .ok_or_else(|| BeeError::Usage("import needs --surnames".into()))?,
                first_names,
            }
        }
        "generate" => {
            let mut config = GeneratorConfig::default();
            for (flag, value) in flags {
                if !config.apply_flag(&flag, &value)? {
                    return Err(unknown(&flag));
                }
            }
            config.validate()?;
            Command::Generate(config)
        }
        "today" | "check" => {
            let mut word = None;
            let mut date = None;
            let mut player = DEFAULT_PLAYER.to_string();
            for (flag, value) in flags {
                match flag.as_str() {
                    "--word" if name == "check" => word = Some(value),
                    "--date" => date = Some(format_date(parse_date(&value)?)?),
                    "--player" => player = value,
                    _ => return Err(unknown(&flag)),
                }
            }
            if name == "check" {
                Command::Check {
                    word: word.ok_or_else(|| BeeError::Usage("check needs --word".into()))?,
                    date,
                    player,
                }
            } else {
                Command::Today { date, player }
            }
        }
        "export" => {
            let mut out = None;
            for (flag, value) in flags {
                match flag.as_str() {
                    "--out" => out = Some(PathBuf::from(value)),
                    _ => return Err(unknown(&flag)),
                }
            }
            Command::Export { out }
        }
        "wipe-progress" => {
            if let Some((flag, _)) = flags.first() {
                return Err(unknown(flag));
            }
            Command::WipeProgress
        }
        other => return Err(BeeError::Usage(format!("unknown command `{other}`"))),
    };

    Ok(CliOptions { command, store })
}

fn unknown(flag: &str) -> BeeError {
    BeeError::Usage(format!("unknown option `{flag}`"))
}
