// File: src/core/matcher.rs
use crate::core::index::WordIndex;
use crate::core::rules::{first_exclusion, CandidatePair, EligibilityRule, DEFAULT_RULES};
use crate::core::types::WordEntry;
use crate::fuzzy::distance::{weighted_distance, EditWeights};
use std::collections::HashSet;
use tracing::trace;

pub const DEFAULT_VARIANCE: f64 = 1.5;

/// Proposes likely-intended spellings for a word from the words around it.
#[derive(Debug, Clone)]
pub struct CandidateMatcher {
    variance: f64,
    weights: EditWeights,
    rules: Vec<EligibilityRule>,
}

impl Default for CandidateMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_VARIANCE, EditWeights::default())
    }
}

impl CandidateMatcher {
    pub fn new(variance: f64, weights: EditWeights) -> Self {
        Self { variance, weights, rules: DEFAULT_RULES.to_vec() }
    }

    /// Replaces the eligibility rules. They are applied in order.
    pub fn with_rules(mut self, rules: Vec<EligibilityRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Similarity score of a pair; lower is closer.
    pub fn score(&self, word: &str, candidate: &str) -> f64 {
        weighted_distance(word, candidate, &self.weights)
    }

    /// Candidates for `word`, most frequent first.
    ///
    /// Only words sharing the first character are considered. A candidate
    /// survives if no rule excludes it and its score is within the variance.
    pub fn match_candidates(
        &self,
        index: &WordIndex,
        rejected: &HashSet<String>,
        word: &str,
    ) -> Vec<WordEntry> {
        let mut output: Vec<WordEntry> = index
            .candidates_sharing_first_letter(word)
            .into_iter()
            .filter(|entry| {
                let pair = CandidatePair { word, candidate: &entry.word, rejected };
                match first_exclusion(&self.rules, &pair) {
                    Some(rule) => {
                        trace!(word, candidate = %entry.word, rule, "candidate excluded");
                        false
                    }
                    None => true,
                }
            })
            .filter(|entry| self.score(word, &entry.word) <= self.variance)
            .collect();

        output.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.word.cmp(&b.word)));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::IDENTICAL;

    fn index_of(words: &[(&str, u64)]) -> WordIndex {
        let mut index = WordIndex::new();
        for &(w, c) in words {
            index.add(w, c);
        }
        index
    }

    fn words(entries: Vec<WordEntry>) -> Vec<(String, u64)> {
        entries.into_iter().map(|e| (e.word, e.frequency)).collect()
    }

    #[test]
    fn finds_close_spelling() {
        let index = index_of(&[("color", 10), ("colour", 3)]);
        let matcher = CandidateMatcher::new(2.0, EditWeights::default());
        let found = matcher.match_candidates(&index, &HashSet::new(), "colour");
        assert_eq!(words(found), vec![("color".to_string(), 10)]);
    }

    #[test]
    fn plural_neighbour_is_not_a_candidate() {
        let index = index_of(&[("cats", 5), ("catz", 20), ("cat", 20)]);
        let found = CandidateMatcher::default().match_candidates(&index, &HashSet::new(), "cats");
        assert_eq!(words(found), vec![("catz".to_string(), 20)]);
    }

    #[test]
    fn distant_words_are_excluded() {
        let index = index_of(&[("color", 10), ("collar", 10), ("colour", 1)]);
        let found = CandidateMatcher::default().match_candidates(&index, &HashSet::new(), "colour");
        // collar is two edits away from colour
        assert_eq!(words(found), vec![("color".to_string(), 10)]);
    }

    #[test]
    fn sorted_by_descending_frequency() {
        let index = index_of(&[("bolt", 1), ("boat", 5), ("boot", 50), ("boll", 5), ("bold", 9)]);
        let found = CandidateMatcher::default().match_candidates(&index, &HashSet::new(), "bolt");
        assert_eq!(
            words(found),
            vec![
                ("boot".to_string(), 50),
                ("bold".to_string(), 9),
                ("boat".to_string(), 5),
                ("boll".to_string(), 5)
            ]
        );
    }

    #[test]
    fn rejected_words_are_skipped() {
        let index = index_of(&[("color", 10), ("colour", 3), ("colos", 1)]);
        let rejected: HashSet<String> = ["color".to_string()].into();
        let found = CandidateMatcher::default().match_candidates(&index, &rejected, "colour");
        assert!(found.is_empty());
    }

    #[test]
    fn custom_rules_replace_defaults() {
        let index = index_of(&[("cats", 5), ("cat", 20)]);
        let matcher = CandidateMatcher::default().with_rules(vec![IDENTICAL]);
        let found = matcher.match_candidates(&index, &HashSet::new(), "cats");
        assert_eq!(words(found), vec![("cat".to_string(), 20)]);
    }
}
