// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Words shorter than this are never indexed.
pub const MIN_WORD_LEN: usize = 4;

/// Frequency given to words loaded from the confirmed log, so that a
/// known-correct spelling always ranks first among candidates.
pub const CONFIRMED_WEIGHT: u64 = 100_000;

/// A word together with its accumulated frequency across all sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub frequency: u64,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self { word: word.into(), frequency }
    }
}

/// True if `word` is made of alphabetic characters only and is long enough
/// to be worth reviewing.
pub fn is_indexable(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LEN && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// The bucket key of a word: its first character, exactly as written.
pub fn fingerprint(word: &str) -> Option<char> {
    word.chars().next()
}
