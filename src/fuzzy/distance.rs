// File: src/fuzzy/distance.rs
use serde::{Deserialize, Serialize};

/// Cost model for [`weighted_distance`].
///
/// A substitution that only changes letter case is charged
/// `case_substitution` instead of `substitution`, so `ColoR` sits closer to
/// `color` than `colon` does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditWeights {
    pub insertion: f64,
    pub deletion: f64,
    pub substitution: f64,
    pub case_substitution: f64,
}

impl Default for EditWeights {
    fn default() -> Self {
        Self {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.0,
            case_substitution: 0.5,
        }
    }
}

impl EditWeights {
    fn substitution_cost(&self, a: char, b: char) -> f64 {
        if a == b {
            0.0
        } else if a.eq_ignore_ascii_case(&b) {
            self.case_substitution
        } else {
            self.substitution
        }
    }
}

/// Levenshtein distance from `source` to `target` under `weights`.
/// O(n*m) time, O(m) space.
pub fn weighted_distance(source: &str, target: &str, weights: &EditWeights) -> f64 {
    let target: Vec<char> = target.chars().collect();

    let mut prev: Vec<f64> = (0..=target.len()).map(|j| j as f64 * weights.insertion).collect();
    let mut curr = vec![0.0; target.len() + 1];

    for (i, sc) in source.chars().enumerate() {
        curr[0] = (i + 1) as f64 * weights.deletion;
        for (j, &tc) in target.iter().enumerate() {
            let ins = curr[j] + weights.insertion;
            let del = prev[j + 1] + weights.deletion;
            let sub = prev[j] + weights.substitution_cost(sc, tc);
            curr[j + 1] = ins.min(del).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[target.len()]
}
