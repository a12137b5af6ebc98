// File: src/corpus.rs
use crate::core::index::WordIndex;
use crate::core::types::{is_indexable, WordEntry};
use crate::error::SweepResult;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Supplies `(word, count)` pairs for a session.
pub trait CorpusSource {
    fn extract(&self) -> SweepResult<Vec<WordEntry>>;
}

/// Counts words in a set of text files.
///
/// Any character that is not an ASCII letter separates words. Files that
/// cannot be read are skipped with a warning.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    files: Vec<PathBuf>,
}

impl FileCorpus {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }
}

impl CorpusSource for FileCorpus {
    fn extract(&self) -> SweepResult<Vec<WordEntry>> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for path in &self.files {
            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    continue;
                }
            };
            let text = String::from_utf8_lossy(&bytes);
            count_words(&text, &mut counts);
        }
        debug!(distinct = counts.len(), "extracted corpus");
        Ok(counts.into_iter().map(|(word, count)| WordEntry::new(word, count)).collect())
    }
}

impl CorpusSource for Vec<WordEntry> {
    fn extract(&self) -> SweepResult<Vec<WordEntry>> {
        Ok(self.clone())
    }
}

fn count_words(text: &str, counts: &mut HashMap<String, u64>) {
    for word in text.split(|c: char| !c.is_ascii_alphabetic()).filter(|w| !w.is_empty()) {
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
}

/// Adds extracted entries to `index`, dropping words too short to review
/// and entries with no occurrences. Returns how many entries were kept.
pub fn ingest(index: &mut WordIndex, entries: Vec<WordEntry>) -> usize {
    let mut kept = 0;
    for entry in entries {
        if entry.frequency == 0 || !is_indexable(&entry.word) {
            continue;
        }
        index.add(&entry.word, entry.frequency);
        kept += 1;
    }
    kept
}
