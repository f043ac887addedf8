//! Cosine similarity over term-frequency vectors.

use super::vector::TermFrequency;

/// Cosine of the angle between two term-frequency vectors, in [0, 1].
///
/// Returns 0.0 when either vector has zero magnitude (a document that produced
/// no tokens). The dot product and both squared norms are summed in integers
/// and the denominator is a single `sqrt(|a|² · |b|²)`, so the result is exactly
/// symmetric and a document scored against itself gives exactly 1.0.
pub fn cosine_similarity(a: &TermFrequency, b: &TermFrequency) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: u64 = small
        .iter()
        .map(|(token, count)| u64::from(count) * u64::from(large.get(token)))
        .sum();

    let denominator = (a.squared_magnitude() as f64 * b.squared_magnitude() as f64).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (dot as f64 / denominator).clamp(0.0, 1.0)
}

/// Scales a [0, 1] ratio to a percentage rounded to 2 decimals.
pub fn to_percent(ratio: f64) -> f64 {
    (ratio * 100.0 * 100.0).round() / 100.0
}
