// File: src/logging.rs
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where `bee_play` writes its log while the terminal shows the board.
pub const PLAYER_LOG_FILE: &str = "target/bee_play.log";

pub fn player_log_path() -> PathBuf {
    PathBuf::from(PLAYER_LOG_FILE)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Compact, human-readable logs on stderr. `RUST_LOG` overrides the
/// default `info` level.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Logs to a file instead of the terminal, for binaries whose terminal is
/// the user interface. The file is truncated on start.
pub fn init_file_logging(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
