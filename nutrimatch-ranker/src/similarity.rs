//! Cosine similarity between normalised feature vectors.

use crate::FeatureVector;

/// Cosine of the angle between `a` and `b`, in `-1.0..=1.0`.
///
/// Returns `0.0` when either vector has zero magnitude.
///
/// # Examples
/// ```
/// use nutrimatch_ranker::cosine_similarity;
///
/// let a = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
/// let b = [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
/// assert_eq!(cosine_similarity(&a, &b), 1.0);
/// assert_eq!(cosine_similarity(&a, &[0.0; 8]), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "dot products and magnitudes are floating-point sums"
)]
#[must_use]
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let magnitude = norm_a.sqrt() * norm_b.sqrt();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return 0.0;
    }
    (dot / magnitude).clamp(-1.0, 1.0)
}
