// File: src/config.rs
use crate::core::gate::{QualityGate, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS};
use crate::core::ranker::DEFAULT_CANDIDATE_POOL;
use crate::core::types::{parse_date, PUZZLE_LETTERS};
use crate::error::{BeeError, Result};
use std::path::PathBuf;
use std::str::FromStr;
use time::Date;

pub const DEFAULT_PUZZLE_COUNT: usize = 90;
pub const DEFAULT_MAX_ATTEMPTS: usize = 50_000;
pub const DEFAULT_STORE_PATH: &str = "bee_store.bin";
pub const STORE_PATH_ENV: &str = "BEE_STORE";

/// Run parameters for one generation job. Every field can be overridden
/// per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub puzzle_count: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub max_attempts: usize,
    pub candidate_pool: usize,
    /// First puzzle date; today (UTC) when unset.
    pub start_date: Option<Date>,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            puzzle_count: DEFAULT_PUZZLE_COUNT,
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            candidate_pool: DEFAULT_CANDIDATE_POOL,
            start_date: None,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.puzzle_count == 0 {
            return Err(BeeError::InvalidConfig("puzzle count must be at least 1".into()));
        }
        if self.max_attempts == 0 {
            return Err(BeeError::InvalidConfig("attempt budget must be at least 1".into()));
        }
        if self.min_words > self.max_words {
            return Err(BeeError::InvalidConfig(format!(
                "min words ({}) exceeds max words ({})",
                self.min_words, self.max_words
            )));
        }
        if self.candidate_pool < PUZZLE_LETTERS {
            return Err(BeeError::InvalidConfig(format!(
                "candidate pool ({}) must hold at least {PUZZLE_LETTERS} letters",
                self.candidate_pool
            )));
        }
        Ok(())
    }

    pub fn gate(&self) -> QualityGate {
        QualityGate::new(self.min_words, self.max_words)
    }

    /// Applies one `--flag value` pair from the command line.
    /// Returns `Ok(false)` when the flag is not a generator parameter.
    pub fn apply_flag(&mut self, flag: &str, value: &str) -> Result<bool> {
        match flag {
            "--count" => self.puzzle_count = parse_number(flag, value)?,
            "--min-words" => self.min_words = parse_number(flag, value)?,
            "--max-words" => self.max_words = parse_number(flag, value)?,
            "--attempts" => self.max_attempts = parse_number(flag, value)?,
            "--pool" => self.candidate_pool = parse_number(flag, value)?,
            "--seed" => self.seed = Some(parse_number(flag, value)?),
            "--start-date" => self.start_date = Some(parse_date(value)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn parse_number<T: FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| BeeError::Usage(format!("{flag} expects a non-negative integer, got '{value}'")))
}

/// `--store` wins, then `$BEE_STORE`, then the default file name.
pub fn resolve_store_path(flag: Option<&str>) -> PathBuf {
    flag.map(PathBuf::from)
        .or_else(|| std::env::var_os(STORE_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
}
