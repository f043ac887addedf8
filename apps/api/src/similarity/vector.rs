//! Term-frequency vectors.

use std::collections::BTreeMap;

/// Sparse token → occurrence-count vector for one document.
///
/// Backed by a `BTreeMap` so iteration order is sorted and deterministic; the
/// cosine scorer relies on that to produce bit-identical results regardless of
/// argument order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    counts: BTreeMap<String, u32>,
}

impl TermFrequency {
    /// Count of `token`, or 0 when absent.
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Σ count² — the squared Euclidean norm, kept exact in integers.
    pub fn squared_magnitude(&self) -> u64 {
        self.counts
            .values()
            .map(|&c| u64::from(c) * u64::from(c))
            .sum()
    }


    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Builds a term-frequency vector in one pass over `tokens`.
///
/// Every key ends with a count ≥ 1; unseen tokens start at 0 before increment.
pub fn build_term_frequency<S: AsRef<str>>(tokens: &[S]) -> TermFrequency {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_ref().to_string()).or_insert(0u32) += 1;
    }
    TermFrequency { counts }
}
