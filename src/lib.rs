//! `case_sampling`: case-selection strategies for qualitative follow-up.
//!
//! Given a pool of scored organisational assessments, pick a small set of
//! cases to study in depth and say why each was picked. Every selector is a
//! pure function of its inputs; the only randomness (purposive sampling) comes
//! from a caller-supplied RNG or a seeded [`SamplingEngine`].
//!
//! Exposed modules:
//! - `variation`: maximum-variation sampling (greedy farthest-point).
//! - `extreme`: extreme/deviant case sampling (low and high tails).
//! - `typical`: typical-case sampling (nearest to the mean profile).
//! - `purposive`: criteria filter + uniform random subsample.
//! - `methodology`: method names and citation-backed methodology prose.
//! - `kappa`: Cohen's kappa for inter-coder agreement.
//! - `engine`: dispatch facade with seeding and export reports.

#![forbid(unsafe_code)]

pub mod case;
pub mod config;
pub mod engine;
pub mod error;
pub mod extreme;
pub mod kappa;
pub mod methodology;
pub mod metric;
pub mod purposive;
pub mod typical;
pub mod variation;

pub use case::{
    index_profiles, Case, OrganisationProfile, ProfileIndex, PurposiveCriteria, SampledCase,
};
pub use config::EngineConfig;
pub use engine::{SamplingEngine, SamplingPlan, SamplingReport};
pub use error::{Error, Result};
pub use extreme::extreme_deviant;
pub use kappa::{cohens_kappa, AgreementStrength, KappaReport};
pub use methodology::{generate_methodology_text, SamplingMethod};
pub use metric::{domain_centroid, euclidean_distance, mean};
pub use purposive::{purposive_sampling, purposive_sampling_with_rng};
pub use typical::typical_cases;
pub use variation::maximum_variation;
