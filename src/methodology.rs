//! Sampling methods and the citation-backed methodology paragraph that
//! research exports paste into write-ups.
//!
//! ## References cited in the generated text
//!
//! - Patton (2015): *Qualitative Research & Evaluation Methods*, 4th ed.
//! - Flyvbjerg (2006): *Five Misunderstandings About Case-Study Research*.
//! - Seawright & Gerring (2008): *Case Selection Techniques in Case Study Research*.
//! - Etikan, Musa & Alkassim (2016): *Comparison of Convenience Sampling and Purposive Sampling*.
//! - Palinkas et al. (2015): *Purposeful Sampling for Qualitative Data Collection*.
//! - Gonzalez (1985): *Clustering to Minimize the Maximum Intercluster Distance*.
//! - Yin (2018): *Case Study Research and Applications*, 6th ed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of assessment domains quoted in the maximum-variation paragraph.
pub const ASSESSMENT_DOMAIN_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMethod {
    MaximumVariation,
    #[serde(alias = "extreme_deviant")]
    Extreme,
    Typical,
    Purposive,
}

impl SamplingMethod {
    pub const ALL: [SamplingMethod; 4] = [
        SamplingMethod::MaximumVariation,
        SamplingMethod::Extreme,
        SamplingMethod::Typical,
        SamplingMethod::Purposive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SamplingMethod::MaximumVariation => "maximum_variation",
            SamplingMethod::Extreme => "extreme",
            SamplingMethod::Typical => "typical",
            SamplingMethod::Purposive => "purposive",
        }
    }
}

impl fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplingMethod {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "maximumvariation" | "maxvariation" => Ok(SamplingMethod::MaximumVariation),
            "extreme" | "extremedeviant" | "deviant" => Ok(SamplingMethod::Extreme),
            "typical" | "typicalcase" | "typicalcases" => Ok(SamplingMethod::Typical),
            "purposive" => Ok(SamplingMethod::Purposive),
            _ => Err(Error::UnknownMethod(value.to_string())),
        }
    }
}

fn cases_phrase(n: usize) -> String {
    if n == 1 {
        "1 case".to_string()
    } else {
        format!("{n} cases")
    }
}

/// One paragraph describing how `n` cases were drawn from `total_cases` assessments.
pub fn generate_methodology_text(method: SamplingMethod, n: usize, total_cases: usize) -> String {
    let selected = cases_phrase(n);
    match method {
        SamplingMethod::MaximumVariation => format!(
            "Maximum variation sampling (Patton, 2015) was used to select {selected} from \
             {total_cases} completed assessments. The organisation with the highest overall \
             maturity score was chosen as an initial anchor; further cases were then added \
             iteratively, each time selecting the organisation with the greatest minimum \
             Euclidean distance to those already selected across the {ASSESSMENT_DOMAIN_COUNT} \
             assessment domains (Gonzalez, 1985). This procedure maximises heterogeneity of \
             organisational profiles, so that patterns shared across very different cases can \
             be identified as core experiences (Patton, 2015; Palinkas et al., 2015)."
        ),
        SamplingMethod::Extreme => format!(
            "Extreme (deviant) case sampling (Patton, 2015; Flyvbjerg, 2006) was used to select \
             {selected} from {total_cases} completed assessments: the {low} lowest-scoring and \
             {high} highest-scoring organisations by overall maturity score. Cases at both ends \
             of the distribution are information-rich about the conditions associated with \
             unusually weak and unusually strong maturity (Seawright & Gerring, 2008).",
            low = n.div_ceil(2),
            high = n / 2,
        ),
        SamplingMethod::Typical => format!(
            "Typical case sampling (Patton, 2015) was used to select {selected} from \
             {total_cases} completed assessments. For each organisation the Euclidean distance \
             between its domain score profile and the mean profile of all assessed \
             organisations was computed, and the cases with the smallest distance were \
             selected. Typical cases illustrate what is normal or average in the population \
             and support analytic generalisation of within-case findings (Seawright & Gerring, \
             2008; Yin, 2018)."
        ),
        SamplingMethod::Purposive => format!(
            "Purposive sampling (Etikan, Musa & Alkassim, 2016) was used to select {selected} \
             from {total_cases} completed assessments. The pool was first restricted to \
             organisations meeting predefined inclusion criteria on country, sector and \
             organisation size; cases were then drawn at random from this sampling frame to \
             limit researcher selection bias within it (Palinkas et al., 2015)."
        ),
    }
}
