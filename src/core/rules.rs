// src/core/rules.rs
//! Eligibility rules decide whether a neighbouring word may be offered as a
//! candidate at all, before any scoring happens.

use std::collections::HashSet;

/// The pair under test plus the session state a rule may consult.
pub struct CandidatePair<'a> {
    pub word: &'a str,
    pub candidate: &'a str,
    pub rejected: &'a HashSet<String>,
}

/// A named predicate. When `excludes` returns true the candidate is dropped.
#[derive(Clone, Copy)]
pub struct EligibilityRule {
    pub name: &'static str,
    pub excludes: fn(&CandidatePair) -> bool,
}

impl std::fmt::Debug for EligibilityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EligibilityRule").field(&self.name).finish()
    }
}

pub const REJECTED: EligibilityRule = EligibilityRule { name: "rejected", excludes: is_rejected };

pub const IDENTICAL: EligibilityRule = EligibilityRule { name: "identical", excludes: is_identical };

pub const PLURAL: EligibilityRule = EligibilityRule { name: "plural", excludes: is_plural_variant };

pub const CAPITALIZATION: EligibilityRule = EligibilityRule {
    name: "capitalization",
    excludes: is_leading_case_variant,
};

/// Rules applied by default, cheapest first.
pub const DEFAULT_RULES: [EligibilityRule; 4] = [REJECTED, IDENTICAL, PLURAL, CAPITALIZATION];

fn is_rejected(p: &CandidatePair) -> bool {
    p.rejected.contains(p.candidate)
}

fn is_identical(p: &CandidatePair) -> bool {
    p.word == p.candidate
}

fn is_plural_variant(p: &CandidatePair) -> bool {
    is_plural_of(p.candidate, p.word) || is_plural_of(p.word, p.candidate)
}

fn is_leading_case_variant(p: &CandidatePair) -> bool {
    capitalize(p.candidate) == p.word || p.candidate == capitalize(p.word)
}

/// `plural` is `singular` with a trailing `s`.
fn is_plural_of(plural: &str, singular: &str) -> bool {
    plural.strip_suffix('s') == Some(singular)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the first rule in `rules` that excludes the pair, if any.
pub fn first_exclusion(rules: &[EligibilityRule], pair: &CandidatePair) -> Option<&'static str> {
    rules.iter().find(|rule| (rule.excludes)(pair)).map(|rule| rule.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excluded_by(word: &str, candidate: &str, rejected: &[&str]) -> Option<&'static str> {
        let rejected: HashSet<String> = rejected.iter().map(|s| s.to_string()).collect();
        let pair = CandidatePair { word, candidate, rejected: &rejected };
        first_exclusion(&DEFAULT_RULES, &pair)
    }

    #[test]
    fn unrelated_pair_passes() {
        assert_eq!(excluded_by("colour", "color", &[]), None);
    }

    #[test]
    fn rejected_candidates_are_dropped() {
        assert_eq!(excluded_by("colour", "color", &["color"]), Some("rejected"));
    }

    #[test]
    fn identical_word_is_dropped() {
        assert_eq!(excluded_by("color", "color", &[]), Some("identical"));
    }

    #[test]
    fn plural_works_both_ways() {
        assert_eq!(excluded_by("cats", "cat", &[]), Some("plural"));
        assert_eq!(excluded_by("cat", "cats", &[]), Some("plural"));
        assert_eq!(excluded_by("cats", "catss", &[]), Some("plural"));
        assert_eq!(excluded_by("cats", "cates", &[]), None);
    }

    #[test]
    fn leading_case_variant_works_both_ways() {
        assert_eq!(excluded_by("Color", "color", &[]), Some("capitalization"));
        assert_eq!(excluded_by("color", "Color", &[]), Some("capitalization"));
        // Only the first letter counts.
        assert_eq!(excluded_by("color", "coLor", &[]), None);
    }

    #[test]
    fn rules_can_be_applied_selectively() {
        let rejected = HashSet::new();
        let pair = CandidatePair { word: "cats", candidate: "cat", rejected: &rejected };
        assert_eq!(first_exclusion(&[IDENTICAL], &pair), None);
        assert_eq!(first_exclusion(&[IDENTICAL, PLURAL], &pair), Some("plural"));
    }
}
