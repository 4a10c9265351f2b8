//! Draw a sample from a small synthetic pool with each method and print the
//! export report.
//!
//! Reads `CASE_SAMPLING_*` settings (optionally from `.env`); `RUST_LOG`
//! overrides the configured log level.
//!
//! ```text
//! CASE_SAMPLING_SEED=7 RUST_LOG=case_sampling=trace cargo run --example sample_pool
//! ```

use case_sampling::{
    index_profiles, Case, EngineConfig, OrganisationProfile, PurposiveCriteria, SamplingEngine,
    SamplingPlan,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const COUNTRIES: [&str; 3] = ["FR", "DE", "ES"];
const SECTORS: [&str; 2] = ["recycling", "textiles"];

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    let mut config = EngineConfig::from_env()?;
    init_tracing(&config.log_level)?;

    if config.domain_keys.is_empty() {
        config.domain_keys = ["governance", "environmental", "social"]
            .into_iter()
            .map(String::from)
            .collect();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut pool = Vec::new();
    let mut profiles = Vec::new();
    for i in 0..24 {
        let id = format!("a-{i:02}");
        let country = COUNTRIES[i % COUNTRIES.len()];
        let sector = SECTORS[i % SECTORS.len()];
        let mut case = Case::new(&id, format!("Organisation {i}"), rng.random_range(0.0..5.0))
            .with_context(format!("{country} / {sector}"));
        for key in &config.domain_keys {
            case = case.with_domain(key.as_str(), rng.random_range(0.0..5.0));
        }
        pool.push(case);
        profiles.push(OrganisationProfile {
            assessment_id: id,
            country: country.to_string(),
            sector: sector.to_string(),
            size: if i % 4 == 0 { "large" } else { "sme" }.to_string(),
        });
    }
    let profiles = index_profiles(profiles);
    let criteria = PurposiveCriteria::default().country("FR").sector("recycling");

    let engine = SamplingEngine::from_config(&config);
    let plans = [
        SamplingPlan::MaximumVariation {
            domain_keys: &config.domain_keys,
        },
        SamplingPlan::Extreme,
        SamplingPlan::Typical {
            domain_keys: &config.domain_keys,
        },
        SamplingPlan::Purposive {
            criteria: &criteria,
            profiles: &profiles,
        },
    ];

    for plan in &plans {
        let report = engine.report(&pool, 4, plan);
        println!("== {} ({} of {})", report.method, report.cases.len(), report.pool_size);
        for sampled in &report.cases {
            println!(
                "  {:<16} {:>5.2}  {}",
                sampled.case.label, sampled.case.overall_score, sampled.justification
            );
        }
        println!("  {}", report.methodology);
        println!();
    }

    Ok(())
}
