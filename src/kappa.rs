//! Cohen's kappa for agreement between two coders.
//!
//! \[
//! \kappa = \frac{p_o - p_e}{1 - p_e}
//! \]
//!
//! where \(p_o\) is observed agreement and \(p_e\) the agreement expected
//! from each coder's marginal category frequencies.
//!
//! ## References
//!
//! - Cohen (1960): *A Coefficient of Agreement for Nominal Scales*.
//! - Landis & Koch (1977): *The Measurement of Observer Agreement for Categorical Data*.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Landis & Koch agreement bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementStrength {
    Poor,
    Slight,
    Fair,
    Moderate,
    Substantial,
    AlmostPerfect,
}

impl AgreementStrength {
    pub fn from_kappa(kappa: f64) -> Self {
        if kappa < 0.0 {
            Self::Poor
        } else if kappa <= 0.20 {
            Self::Slight
        } else if kappa <= 0.40 {
            Self::Fair
        } else if kappa <= 0.60 {
            Self::Moderate
        } else if kappa <= 0.80 {
            Self::Substantial
        } else {
            Self::AlmostPerfect
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Slight => "slight",
            Self::Fair => "fair",
            Self::Moderate => "moderate",
            Self::Substantial => "substantial",
            Self::AlmostPerfect => "almost perfect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KappaReport {
    pub kappa: f64,
    pub observed_agreement: f64,
    pub expected_agreement: f64,
    /// Number of items both coders rated.
    pub items: usize,
    /// Distinct categories used by either coder.
    pub categories: usize,
    pub strength: AgreementStrength,
}

/// Cohen's kappa over paired ratings; `a[i]` and `b[i]` rate the same item.
///
/// If both coders used a single identical category for every item, chance
/// agreement is 1 and kappa is reported as `1.0`.
pub fn cohens_kappa<T>(a: &[T], b: &[T]) -> Result<KappaReport>
where
    T: Eq + Hash,
{
    if a.len() != b.len() {
        return Err(Error::RaterLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(Error::NoRatings);
    }

    let items = a.len();
    let mut marginals: HashMap<&T, (usize, usize)> = HashMap::new();
    let mut agreed = 0usize;
    for (x, y) in a.iter().zip(b) {
        if x == y {
            agreed += 1;
        }
        marginals.entry(x).or_default().0 += 1;
        marginals.entry(y).or_default().1 += 1;
    }

    let total = items as f64;
    let observed = agreed as f64 / total;
    let expected: f64 = marginals
        .values()
        .map(|&(ca, cb)| (ca as f64 / total) * (cb as f64 / total))
        .sum();

    let kappa = if (1.0 - expected).abs() < f64::EPSILON {
        1.0
    } else {
        (observed - expected) / (1.0 - expected)
    };

    Ok(KappaReport {
        kappa,
        observed_agreement: observed,
        expected_agreement: expected,
        items,
        categories: marginals.len(),
        strength: AgreementStrength::from_kappa(kappa),
    })
}
