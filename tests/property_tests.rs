// Property tests for candidate matching and the confirmed log.

use std::collections::HashSet;
use std::fs;

use proptest::prelude::*;
use sweep_core::core::index::WordIndex;
use sweep_core::core::types::WordEntry;
use sweep_core::corpus::ingest;
use sweep_core::fuzzy::distance::EditWeights;
use sweep_core::{CandidateMatcher, ConfirmationStore};

// A small alphabet so that near neighbours are common.
fn word() -> impl Strategy<Value = String> {
    "[aAb][abc]{0,6}"
}

fn corpus() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec((word(), 1u64..500), 1..40)
}

fn build(entries: &[(String, u64)]) -> WordIndex {
    let mut index = WordIndex::new();
    ingest(&mut index, entries.iter().map(|(w, c)| WordEntry::new(w.clone(), *c)).collect());
    index
}

fn leading_case_flip(a: &str, b: &str) -> bool {
    let (mut x, mut y) = (a.chars(), b.chars());
    match (x.next(), y.next()) {
        (Some(p), Some(q)) => p != q && p.eq_ignore_ascii_case(&q) && x.as_str() == y.as_str(),
        _ => false,
    }
}

proptest! {
    #[test]
    fn short_words_never_indexed_or_offered(entries in corpus(), variance in 0.0f64..3.0) {
        let index = build(&entries);
        let matcher = CandidateMatcher::new(variance, EditWeights::default());
        for (w, _) in &entries {
            if w.chars().count() <= 3 {
                prop_assert_eq!(index.frequency(w), None);
            }
            for candidate in matcher.match_candidates(&index, &HashSet::new(), w) {
                prop_assert!(candidate.word.chars().count() >= 4);
            }
        }
    }

    #[test]
    fn candidates_respect_filters_and_threshold(
        entries in corpus(),
        variance in 0.0f64..3.0,
        rejected_pick in prop::collection::vec(any::<prop::sample::Index>(), 0..4),
    ) {
        let index = build(&entries);
        let rejected: HashSet<String> = rejected_pick
            .iter()
            .map(|i| entries[i.index(entries.len())].0.clone())
            .collect();
        let matcher = CandidateMatcher::new(variance, EditWeights::default());

        for (w, _) in &entries {
            let found = matcher.match_candidates(&index, &rejected, w);
            for c in &found {
                prop_assert_ne!(&c.word, w);
                prop_assert_ne!(format!("{}s", w), c.word.clone());
                prop_assert_ne!(format!("{}s", c.word), w.clone());
                prop_assert!(!leading_case_flip(w, &c.word));
                prop_assert!(!rejected.contains(&c.word));
                prop_assert!(matcher.score(w, &c.word) <= variance);
            }
            for pair in found.windows(2) {
                prop_assert!(pair[0].frequency >= pair[1].frequency);
            }
        }
    }

    #[test]
    fn queue_is_ascending_and_excludes_confirmed(entries in corpus(), confirmed in prop::collection::hash_set(word(), 0..5)) {
        let index = build(&entries);
        let queue = index.queue(&confirmed);
        for pair in queue.windows(2) {
            prop_assert!(pair[0].frequency <= pair[1].frequency);
        }
        for entry in &queue {
            prop_assert!(!confirmed.contains(&entry.word));
        }
    }

    #[test]
    fn duplicate_log_lines_load_idempotently(words in prop::collection::vec("[a-z]{4,8}", 0..20)) {
        let dir = tempfile::tempdir().unwrap();
        let once = dir.path().join("once");
        let twice = dir.path().join("twice");
        let text: String = words.iter().map(|w| format!("{}\n", w)).collect();
        fs::write(&once, &text).unwrap();
        fs::write(&twice, format!("{}{}", text, text)).unwrap();

        let a = ConfirmationStore::load(&once).unwrap();
        let b = ConfirmationStore::load(&twice).unwrap();
        prop_assert_eq!(a.words(), b.words());
    }
}
