// src/core/mod.rs

pub mod gate;
pub mod generator;
pub mod letters;
pub mod ranker;
pub mod scorer;
pub mod types;
