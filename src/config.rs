//! Engine settings read from `CASE_SAMPLING_*` environment variables.
//!
//! Unset variables fall back to the defaults; only a malformed seed is an error.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub const SEED_VAR: &str = "CASE_SAMPLING_SEED";
pub const DOMAIN_KEYS_VAR: &str = "CASE_SAMPLING_DOMAIN_KEYS";
pub const LOG_VAR: &str = "CASE_SAMPLING_LOG";

/// Settings for a [`SamplingEngine`](crate::engine::SamplingEngine) and its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed seed for the random draw in purposive sampling.
    pub seed: Option<u64>,
    /// Default dimensions for the distance-based methods.
    pub domain_keys: Vec<String>,
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            domain_keys: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        let seed = match env::var(SEED_VAR) {
            Ok(raw) if !raw.trim().is_empty() => {
                Some(raw.trim().parse::<u64>().map_err(|_| Error::InvalidConfig {
                    key: SEED_VAR,
                    value: raw.clone(),
                })?)
            }
            _ => None,
        };

        let domain_keys = env::var(DOMAIN_KEYS_VAR)
            .map(|raw| parse_domain_keys(&raw))
            .unwrap_or_default();

        let log_level = env::var(LOG_VAR).unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            seed,
            domain_keys,
            log_level,
        })
    }
}

fn parse_domain_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}
