//! Engine facade: method dispatch, seeding, and export-ready reports.

use crate::case::{Case, ProfileIndex, PurposiveCriteria, SampledCase};
use crate::config::EngineConfig;
use crate::extreme::extreme_deviant;
use crate::methodology::{generate_methodology_text, SamplingMethod};
use crate::purposive::purposive_sampling_with_rng;
use crate::typical::typical_cases;
use crate::variation::maximum_variation;
use rand::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Method plus the parameters only that method needs.
#[derive(Debug, Clone, Copy)]
pub enum SamplingPlan<'a> {
    MaximumVariation {
        domain_keys: &'a [String],
    },
    Extreme,
    Typical {
        domain_keys: &'a [String],
    },
    Purposive {
        criteria: &'a PurposiveCriteria,
        profiles: &'a ProfileIndex,
    },
}

impl SamplingPlan<'_> {
    pub fn method(&self) -> SamplingMethod {
        match self {
            SamplingPlan::MaximumVariation { .. } => SamplingMethod::MaximumVariation,
            SamplingPlan::Extreme => SamplingMethod::Extreme,
            SamplingPlan::Typical { .. } => SamplingMethod::Typical,
            SamplingPlan::Purposive { .. } => SamplingMethod::Purposive,
        }
    }
}

/// Selected cases together with the paragraph describing how they were drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingReport {
    pub method: SamplingMethod,
    pub requested: usize,
    pub pool_size: usize,
    pub cases: Vec<SampledCase>,
    pub methodology: String,
}

/// Stateless sampler; the optional seed only affects purposive sampling.
#[derive(Debug, Clone, Default)]
pub struct SamplingEngine {
    seed: Option<u64>,
}

impl SamplingEngine {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Fix the seed so repeated purposive draws over the same frame return the same cases.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self { seed: config.seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn maximum_variation(
        &self,
        cases: &[Case],
        n: usize,
        domain_keys: &[String],
    ) -> Vec<SampledCase> {
        maximum_variation(cases, n, domain_keys)
    }

    pub fn extreme_deviant(&self, cases: &[Case], n: usize) -> Vec<SampledCase> {
        extreme_deviant(cases, n)
    }

    pub fn typical_cases(
        &self,
        cases: &[Case],
        n: usize,
        domain_keys: &[String],
    ) -> Vec<SampledCase> {
        typical_cases(cases, n, domain_keys)
    }

    /// Purposive sample; reproducible when the engine is seeded.
    pub fn purposive_sampling(
        &self,
        cases: &[Case],
        n: usize,
        criteria: &PurposiveCriteria,
        profiles: &ProfileIndex,
    ) -> Vec<SampledCase> {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        purposive_sampling_with_rng(cases, n, criteria, profiles, &mut rng)
    }

    pub fn sample(&self, cases: &[Case], n: usize, plan: &SamplingPlan<'_>) -> Vec<SampledCase> {
        debug!(method = %plan.method(), pool = cases.len(), requested = n, "sampling");
        match *plan {
            SamplingPlan::MaximumVariation { domain_keys } => {
                self.maximum_variation(cases, n, domain_keys)
            }
            SamplingPlan::Extreme => self.extreme_deviant(cases, n),
            SamplingPlan::Typical { domain_keys } => self.typical_cases(cases, n, domain_keys),
            SamplingPlan::Purposive { criteria, profiles } => {
                self.purposive_sampling(cases, n, criteria, profiles)
            }
        }
    }

    pub fn methodology_text(&self, method: SamplingMethod, n: usize, total_cases: usize) -> String {
        generate_methodology_text(method, n, total_cases)
    }

    /// Sample and describe in one step.
    ///
    /// The paragraph quotes `n` as requested and the full pool size.
    pub fn report(&self, cases: &[Case], n: usize, plan: &SamplingPlan<'_>) -> SamplingReport {
        let method = plan.method();
        SamplingReport {
            method,
            requested: n,
            pool_size: cases.len(),
            cases: self.sample(cases, n, plan),
            methodology: generate_methodology_text(method, n, cases.len()),
        }
    }
}
