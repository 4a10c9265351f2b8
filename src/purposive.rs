//! Purposive sampling.
//!
//! Restrict the pool to a criteria-matching frame (joined through the
//! caller's [`ProfileIndex`]), then draw a uniform random subsample of the
//! frame so that selection within it is not left to the analyst.
//!
//! Cases without a profile are excluded. Every selected case in a batch
//! carries the same justification, naming the criteria.

use crate::case::{Case, ProfileIndex, PurposiveCriteria, SampledCase};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Purposive sample using the thread RNG.
///
/// Not reproducible; use [`purposive_sampling_with_rng`] for that.
pub fn purposive_sampling(
    cases: &[Case],
    n: usize,
    criteria: &PurposiveCriteria,
    profiles: &ProfileIndex,
) -> Vec<SampledCase> {
    let mut rng = rand::rng();
    purposive_sampling_with_rng(cases, n, criteria, profiles, &mut rng)
}

/// Purposive sample with a caller-supplied RNG.
pub fn purposive_sampling_with_rng<R: Rng + ?Sized>(
    cases: &[Case],
    n: usize,
    criteria: &PurposiveCriteria,
    profiles: &ProfileIndex,
    rng: &mut R,
) -> Vec<SampledCase> {
    if n == 0 || cases.is_empty() {
        return Vec::new();
    }

    let mut frame: Vec<&Case> = cases
        .iter()
        .filter(|case| {
            profiles
                .get(&case.assessment_id)
                .is_some_and(|profile| criteria.matches(profile))
        })
        .collect();

    frame.shuffle(rng);
    frame.truncate(n);

    debug!(
        pool = cases.len(),
        requested = n,
        selected = frame.len(),
        "purposive sample"
    );

    let note = justification(criteria);
    frame
        .into_iter()
        .map(|case| case.sampled(note.as_str()))
        .collect()
}

fn justification(criteria: &PurposiveCriteria) -> String {
    if criteria.is_empty() {
        "Purposive selection: no criteria supplied, random draw from all profiled cases".to_string()
    } else {
        format!("Matches purposive criteria: {}", criteria.describe())
    }
}
