//! Typical-case sampling: the cases nearest the pool's mean domain profile.

use crate::case::{all_available, Case, SampledCase};
use crate::metric::{distance_to_point, domain_centroid};
use tracing::debug;

/// Select the `n` cases closest to the per-domain mean, nearest first.
///
/// Equal distances keep pool order.
pub fn typical_cases(cases: &[Case], n: usize, domain_keys: &[String]) -> Vec<SampledCase> {
    if n == 0 || cases.is_empty() {
        return Vec::new();
    }
    if cases.len() <= n {
        return all_available(cases, n);
    }

    let centroid = domain_centroid(cases, domain_keys);
    let mut ranked: Vec<(&Case, f64)> = cases
        .iter()
        .map(|case| (case, distance_to_point(case, domain_keys, &centroid)))
        .collect();
    ranked.sort_by(|(_, a), (_, b)| a.total_cmp(b));

    debug!(pool = cases.len(), requested = n, "typical case sample");
    ranked
        .into_iter()
        .take(n)
        .map(|(case, dist)| {
            case.sampled(format!(
                "Closest to the average profile (distance {dist:.2} from domain means)"
            ))
        })
        .collect()
}
