// File: src/learning.rs
use crate::core::index::WordIndex;
use crate::core::types::{is_indexable, CONFIRMED_WEIGHT};
use crate::error::{SweepError, SweepResult};
use crate::persistence::{append_word, read_log, rewrite_log};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Words the operator has accepted as correct, kept across runs.
///
/// Every accepted word is appended to the backing log before `add` returns.
/// A failed append is logged and the word stays confirmed for the rest of
/// the run; it is only lost for future runs.
#[derive(Debug, Default)]
pub struct ConfirmationStore {
    path: Option<PathBuf>,
    confirmed: HashSet<String>,
}

impl ConfirmationStore {
    /// A store with no backing file.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the log at `path`. A missing file yields an empty store;
    /// any other read failure is fatal.
    pub fn load(path: impl Into<PathBuf>) -> SweepResult<Self> {
        let path = path.into();
        let confirmed = match read_log(&path) {
            Ok(Some(words)) => words,
            Ok(None) => {
                debug!(path = %path.display(), "no confirmed log yet");
                HashSet::new()
            }
            Err(source) => return Err(SweepError::ConfirmedLog { path, source }),
        };
        info!(count = confirmed.len(), "loaded confirmed words");
        Ok(Self { path: Some(path), confirmed })
    }

    pub fn has(&self, word: &str) -> bool {
        self.confirmed.contains(word)
    }

    /// Marks `word` as confirmed. Returns false if it already was.
    pub fn add(&mut self, word: &str) -> bool {
        if !self.confirmed.insert(word.to_string()) {
            return false;
        }
        if let Some(path) = &self.path {
            if let Err(e) = append_word(path, word) {
                warn!(word, path = %path.display(), error = %e, "could not persist confirmation");
            }
        }
        true
    }

    /// Feeds every reviewable confirmed word into `index` with a dominating
    /// weight. Log lines that could never come out of extraction are skipped.
    pub fn seed(&self, index: &mut WordIndex) {
        for word in self.confirmed.iter().filter(|w| is_indexable(w)) {
            index.add(word, CONFIRMED_WEIGHT);
        }
    }

    /// Rewrites the backing log without duplicates.
    pub fn compact(&self) -> SweepResult<()> {
        if let Some(path) = &self.path {
            rewrite_log(path, &self.confirmed)?;
            debug!(path = %path.display(), count = self.confirmed.len(), "compacted confirmed log");
        }
        Ok(())
    }

    pub fn words(&self) -> &HashSet<String> {
        &self.confirmed
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.confirmed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty()
    }
}
