//! Maximum-variation sampling.
//!
//! Greedy farthest-point selection in domain-score space: anchor on the
//! highest overall score, then repeatedly add the candidate whose distance to
//! its *nearest* already-selected case is largest. This is the classic
//! 2-approximation for k-center (Gonzalez, 1985); it is not globally optimal
//! but it is fully deterministic for a fixed input.
//!
//! Tie-breaks:
//! - anchor: the earliest case in pool order among those sharing the top score;
//! - later picks: the earliest remaining candidate in pool order.
//!
//! Cost is O(n · pool · |keys|): each candidate keeps a running nearest-selected
//! distance that is updated against the newest pick only.

use crate::case::{all_available, Case, SampledCase};
use crate::metric::euclidean_distance;
use tracing::{debug, trace};

/// Select `n` maximally dispersed cases. Output is in selection order, anchor first.
pub fn maximum_variation(cases: &[Case], n: usize, domain_keys: &[String]) -> Vec<SampledCase> {
    if n == 0 || cases.is_empty() {
        return Vec::new();
    }
    if cases.len() <= n {
        return all_available(cases, n);
    }

    let mut anchor = 0usize;
    for (i, case) in cases.iter().enumerate().skip(1) {
        if case.overall_score.total_cmp(&cases[anchor].overall_score).is_gt() {
            anchor = i;
        }
    }

    let mut selected = Vec::with_capacity(n);
    selected.push(cases[anchor].sampled(format!(
        "Highest overall score ({:.2}); initial anchor",
        cases[anchor].overall_score
    )));

    // (pool index, distance to nearest selected case), in pool order.
    let mut remaining: Vec<(usize, f64)> = (0..cases.len())
        .filter(|&i| i != anchor)
        .map(|i| (i, euclidean_distance(&cases[i], &cases[anchor], domain_keys)))
        .collect();

    while selected.len() < n && !remaining.is_empty() {
        let mut best_pos = 0usize;
        for (pos, &(_, dist)) in remaining.iter().enumerate().skip(1) {
            if dist > remaining[best_pos].1 {
                best_pos = pos;
            }
        }

        let (pick, dist) = remaining.remove(best_pos);
        trace!(
            assessment_id = %cases[pick].assessment_id,
            min_distance = dist,
            "maximum variation pick"
        );
        selected.push(cases[pick].sampled(format!(
            "Maximises diversity: minimum distance {dist:.2} to already-selected cases"
        )));

        for (idx, nearest) in remaining.iter_mut() {
            let d = euclidean_distance(&cases[*idx], &cases[pick], domain_keys);
            if d < *nearest {
                *nearest = d;
            }
        }
    }

    debug!(
        pool = cases.len(),
        requested = n,
        selected = selected.len(),
        dimensions = domain_keys.len(),
        "maximum variation sample"
    );
    selected
}
