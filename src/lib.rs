// src/lib.rs

pub mod check;
pub mod config;
pub mod core;
pub mod error;
pub mod import;
pub mod loader;
pub mod logging;
pub mod persistence;
pub mod pipeline;
pub mod store;
pub mod writer;

pub use crate::core::generator::{GenerationReport, PuzzleGenerator};
pub use crate::error::{BeeError, Result};
pub use crate::persistence::FileStore;
