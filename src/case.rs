//! Case records consumed and produced by the selectors.
//!
//! Cases are immutable value objects: selectors copy them into
//! [`SampledCase`] and attach a justification, never mutating the pool.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One assessed organisation with its score profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub assessment_id: String,
    pub label: String,
    pub overall_score: f64,
    /// Sub-score per assessment domain. Absent keys count as `0.0`.
    #[serde(default)]
    pub domain_scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub context: String,
}

impl Case {
    pub fn new(
        assessment_id: impl Into<String>,
        label: impl Into<String>,
        overall_score: f64,
    ) -> Self {
        Self {
            assessment_id: assessment_id.into(),
            label: label.into(),
            overall_score,
            domain_scores: BTreeMap::new(),
            context: String::new(),
        }
    }

    /// Builder-style domain score setter.
    pub fn with_domain(mut self, key: impl Into<String>, score: f64) -> Self {
        self.domain_scores.insert(key.into(), score);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Score for `key`, or `0.0` when the case has no entry for it.
    #[inline]
    pub fn domain_score(&self, key: &str) -> f64 {
        self.domain_scores.get(key).copied().unwrap_or(0.0)
    }

    pub(crate) fn sampled(&self, justification: impl Into<String>) -> SampledCase {
        SampledCase {
            case: self.clone(),
            justification: justification.into(),
        }
    }
}

/// Pool-exhausted result: every case in pool order, no strategy applied.
pub(crate) fn all_available(cases: &[Case], requested: usize) -> Vec<SampledCase> {
    let note = format!(
        "All available cases selected (pool of {}, {} requested)",
        cases.len(),
        requested
    );
    cases.iter().map(|case| case.sampled(note.as_str())).collect()
}

/// A selected case plus the reason it was selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledCase {
    #[serde(flatten)]
    pub case: Case,
    pub justification: String,
}

/// Descriptive record joined to a case by assessment id during purposive sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationProfile {
    pub assessment_id: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub size: String,
}

/// Read-only side table of profiles keyed by assessment id.
pub type ProfileIndex = HashMap<String, OrganisationProfile>;

/// Build a [`ProfileIndex`]. Later duplicates of an id replace earlier ones.
pub fn index_profiles<I>(profiles: I) -> ProfileIndex
where
    I: IntoIterator<Item = OrganisationProfile>,
{
    profiles
        .into_iter()
        .map(|profile| (profile.assessment_id.clone(), profile))
        .collect()
}

/// Sub-population filter for purposive sampling.
///
/// A field constrains the frame only when it is `Some` and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurposiveCriteria {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl PurposiveCriteria {
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    fn supplied(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("country", self.country.as_deref()),
            ("sector", self.sector.as_deref()),
            ("size", self.size.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| match value {
            Some(v) if !v.is_empty() => Some((name, v)),
            _ => None,
        })
    }

    /// Exact, case-sensitive match on every supplied field.
    pub fn matches(&self, profile: &OrganisationProfile) -> bool {
        self.supplied().all(|(name, expected)| {
            let actual = match name {
                "country" => profile.country.as_str(),
                "sector" => profile.sector.as_str(),
                _ => profile.size.as_str(),
            };
            actual == expected
        })
    }

    /// `"country=FR, sector=recycling"`; empty when nothing is supplied.
    pub fn describe(&self) -> String {
        self.supplied()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.supplied().next().is_none()
    }
}
