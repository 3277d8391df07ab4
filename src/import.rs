// File: src/import.rs
//! Builds the proper-noun table from raw GeoNames / census / first-name files.

use crate::core::types::{Category, MIN_WORD_LENGTH};
use std::collections::HashMap;
use tracing::info;

fn is_alpha_only(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn keep(name: &str) -> Option<String> {
    (name.len() >= MIN_WORD_LENGTH && is_alpha_only(name)).then(|| name.to_ascii_uppercase())
}

/// GeoNames `cities15000.txt`: tab-separated, the name is column 1.
/// Multi-word names are dropped.
pub fn parse_cities(text: &str) -> Vec<String> {
    let cities: Vec<String> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| line.split('\t').nth(1))
        .map(str::trim)
        .filter(|name| !name.contains(' '))
        .filter_map(keep)
        .collect();
    info!(count = cities.len(), "parsed cities");
    cities
}

/// Census surname CSV. The first line is a header.
pub fn parse_surnames(text: &str) -> Vec<String> {
    let surnames = first_column(text.lines().skip(1));
    info!(count = surnames.len(), "parsed surnames");
    surnames
}

/// First-name CSV (`name,sex,count`), no header.
pub fn parse_first_names(text: &str) -> Vec<String> {
    let names = first_column(text.lines());
    info!(count = names.len(), "parsed first names");
    names
}

fn first_column<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter_map(|line| line.split(',').next())
        .map(str::trim)
        .filter_map(keep)
        .collect()
}

/// Merges the three lists so that on collision city beats first name, and
/// first name beats surname. The result is sorted by word.
pub fn merge_categories(
    surnames: Vec<String>,
    first_names: Vec<String>,
    cities: Vec<String>,
) -> Vec<(String, Category)> {
    let mut merged: HashMap<String, Category> = HashMap::new();
    let layers = [
        (surnames, Category::Surname),
        (first_names, Category::FirstName),
        (cities, Category::City),
    ];
    for (words, category) in layers {
        for word in words {
            merged.insert(word, category);
        }
    }
    let mut rows: Vec<(String, Category)> = merged.into_iter().collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    info!(unique = rows.len(), "merged proper nouns");
    rows
}
