// --- File: src/core/index.rs
use crate::core::types::{fingerprint, WordEntry};
use std::collections::{HashMap, HashSet};

/// Word frequencies bucketed by first character.
///
/// Candidate search only ever looks inside one bucket, so a word and its
/// suspected misspellings must share their first letter to be compared.
#[derive(Debug, Default, Clone)]
pub struct WordIndex {
    buckets: HashMap<char, HashMap<String, u64>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self { buckets: HashMap::new() }
    }

    /// Merges `count` into the stored frequency of `word`.
    /// Length filtering happens upstream, at the extraction boundary.
    pub fn add(&mut self, word: &str, count: u64) {
        let Some(key) = fingerprint(word) else {
            return;
        };
        *self
            .buckets
            .entry(key)
            .or_default()
            .entry(word.to_string())
            .or_insert(0) += count;
    }

    pub fn frequency(&self, word: &str) -> Option<u64> {
        let key = fingerprint(word)?;
        self.buckets.get(&key)?.get(word).copied()
    }

    /// Every entry sharing `word`'s first character, `word` included if present.
    pub fn candidates_sharing_first_letter(&self, word: &str) -> Vec<WordEntry> {
        fingerprint(word)
            .and_then(|key| self.buckets.get(&key))
            .map(|bucket| {
                bucket
                    .iter()
                    .map(|(w, &freq)| WordEntry::new(w.clone(), freq))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Entries not in `confirmed`, least frequent first.
    /// Ties are ordered by word so that a session is reproducible.
    pub fn queue(&self, confirmed: &HashSet<String>) -> Vec<WordEntry> {
        let mut pending: Vec<WordEntry> = self
            .buckets
            .values()
            .flat_map(|bucket| bucket.iter())
            .filter(|(word, _)| !confirmed.contains(word.as_str()))
            .map(|(word, &freq)| WordEntry::new(word.clone(), freq))
            .collect();
        pending.sort_by(|a, b| a.frequency.cmp(&b.frequency).then_with(|| a.word.cmp(&b.word)));
        pending
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate() {
        let mut index = WordIndex::new();
        index.add("color", 3);
        index.add("color", 4);
        assert_eq!(index.frequency("color"), Some(7));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn buckets_by_exact_first_character() {
        let mut index = WordIndex::new();
        index.add("color", 1);
        index.add("colour", 1);
        index.add("Color", 1);
        index.add("dolor", 1);

        let mut words: Vec<String> = index
            .candidates_sharing_first_letter("cooler")
            .into_iter()
            .map(|e| e.word)
            .collect();
        words.sort();
        assert_eq!(words, vec!["color", "colour"]);
        assert!(index.candidates_sharing_first_letter("zebra").is_empty());
    }

    #[test]
    fn queue_is_ascending_and_skips_confirmed() {
        let mut index = WordIndex::new();
        index.add("wordy", 9);
        index.add("rare", 1);
        index.add("common", 40);
        index.add("known", 2);
        let confirmed: HashSet<String> = ["known".to_string()].into();

        let queue: Vec<(String, u64)> = index
            .queue(&confirmed)
            .into_iter()
            .map(|e| (e.word, e.frequency))
            .collect();
        assert_eq!(
            queue,
            vec![
                ("rare".to_string(), 1),
                ("wordy".to_string(), 9),
                ("common".to_string(), 40)
            ]
        );
    }

    #[test]
    fn empty_word_is_ignored() {
        let mut index = WordIndex::new();
        index.add("", 5);
        assert!(index.is_empty());
    }
}
