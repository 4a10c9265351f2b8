//! Extreme / deviant case sampling.
//!
//! Takes the `ceil(n/2)` lowest and `floor(n/2)` highest overall scores, so an
//! odd `n` leans towards the low end. Output is the low block then the high
//! block, each in ascending score order.

use crate::case::{all_available, Case, SampledCase};
use tracing::debug;

pub fn extreme_deviant(cases: &[Case], n: usize) -> Vec<SampledCase> {
    if n == 0 || cases.is_empty() {
        return Vec::new();
    }
    if cases.len() <= n {
        return all_available(cases, n);
    }

    let mut sorted: Vec<&Case> = cases.iter().collect();
    // Stable: equal scores keep pool order.
    sorted.sort_by(|a, b| a.overall_score.total_cmp(&b.overall_score));

    let low_count = n.div_ceil(2);
    let high_count = n / 2;

    let low = sorted.iter().take(low_count).map(|case| {
        case.sampled(format!(
            "Low-scoring extreme case (overall score {:.2})",
            case.overall_score
        ))
    });
    let high = sorted[sorted.len() - high_count..].iter().map(|case| {
        case.sampled(format!(
            "High-scoring extreme case (overall score {:.2})",
            case.overall_score
        ))
    });

    let mut selected: Vec<SampledCase> = low.chain(high).collect();
    // Only reachable if the two blocks could overlap; no further de-duplication.
    selected.truncate(n);

    debug!(
        pool = cases.len(),
        requested = n,
        low = low_count,
        high = high_count,
        "extreme/deviant sample"
    );
    selected
}
