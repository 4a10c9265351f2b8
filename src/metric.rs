//! Numeric helpers shared by the distance-based selectors.
//!
//! Dimensionality is always the caller-supplied key list, never inferred from
//! the score maps, so two comparisons over the same keys are comparable.

use crate::case::Case;

/// Euclidean distance over `domain_keys`, treating absent keys as `0.0`.
///
/// With no keys every distance is `0.0`.
pub fn euclidean_distance(a: &Case, b: &Case, domain_keys: &[String]) -> f64 {
    domain_keys
        .iter()
        .map(|key| {
            let d = a.domain_score(key) - b.domain_score(key);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Distance from a case to a point given as one coordinate per key.
pub(crate) fn distance_to_point(case: &Case, domain_keys: &[String], point: &[f64]) -> f64 {
    debug_assert_eq!(domain_keys.len(), point.len());
    domain_keys
        .iter()
        .zip(point)
        .map(|(key, &p)| {
            let d = case.domain_score(key) - p;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Arithmetic mean; `0.0` for an empty sequence.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Per-domain mean profile of the pool, one entry per key in `domain_keys`.
pub fn domain_centroid(cases: &[Case], domain_keys: &[String]) -> Vec<f64> {
    domain_keys
        .iter()
        .map(|key| mean(cases.iter().map(|c| c.domain_score(key))))
        .collect()
}
