use case_sampling::{
    cohens_kappa, generate_methodology_text, index_profiles, AgreementStrength, Case, EngineConfig,
    OrganisationProfile, PurposiveCriteria, SamplingEngine, SamplingMethod, SamplingPlan,
};

const POOL_JSON: &str = r#"[
  {"assessmentId": "a-01", "label": "Atelier Nord", "overallScore": 1.4,
   "domainScores": {"governance": 1.0, "environmental": 2.0, "social": 1.5},
   "context": "France / recycling"},
  {"assessmentId": "a-02", "label": "Brightloop", "overallScore": 4.6,
   "domainScores": {"governance": 4.5, "environmental": 4.8, "social": 4.2},
   "context": "Germany / textiles"},
  {"assessmentId": "a-03", "label": "Circula", "overallScore": 3.1,
   "domainScores": {"governance": 3.0, "environmental": 3.2},
   "context": "France / recycling"},
  {"assessmentId": "a-04", "label": "Dunes Co", "overallScore": 2.7,
   "domainScores": {"governance": 2.5, "environmental": 2.9, "social": 2.6},
   "context": "Spain / food"},
  {"assessmentId": "a-05", "label": "Eco Atlas", "overallScore": 3.9,
   "domainScores": {"governance": 4.0, "environmental": 3.5, "social": 4.1},
   "context": "France / textiles"},
  {"assessmentId": "a-06", "label": "Fenwick", "overallScore": 2.2,
   "domainScores": {"governance": 2.0, "environmental": 1.9, "social": 2.8},
   "context": "France / recycling"}
]"#;

fn pool() -> Vec<Case> {
    serde_json::from_str(POOL_JSON).expect("pool json parses")
}

fn profiles() -> Vec<OrganisationProfile> {
    [
        ("a-01", "FR", "recycling", "sme"),
        ("a-02", "DE", "textiles", "large"),
        ("a-03", "FR", "recycling", "large"),
        ("a-05", "FR", "textiles", "sme"),
        ("a-06", "FR", "recycling", "sme"),
    ]
    .into_iter()
    .map(|(id, country, sector, size)| OrganisationProfile {
        assessment_id: id.to_string(),
        country: country.to_string(),
        sector: sector.to_string(),
        size: size.to_string(),
    })
    .collect()
}

fn domain_keys() -> Vec<String> {
    ["governance", "environmental", "social"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn maximum_variation_three_point_line() {
    let pool = vec![
        Case::new("p0", "zero", 1.0).with_domain("x", 0.0),
        Case::new("p5", "five", 2.0).with_domain("x", 5.0),
        Case::new("p10", "ten", 3.0).with_domain("x", 10.0),
    ];
    let keys = vec!["x".to_string()];
    let out = SamplingEngine::new().maximum_variation(&pool, 2, &keys);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].case.overall_score, 3.0);
    assert_eq!(out[1].case.overall_score, 1.0);
    assert!(out[1].justification.contains("10.00"));
}

#[test]
fn maximum_variation_anchors_on_top_score() {
    let out = SamplingEngine::new().maximum_variation(&pool(), 3, &domain_keys());
    assert_eq!(out[0].case.assessment_id, "a-02");
    assert!(out[0].justification.contains("4.60"));
    // Farthest from the anchor in domain space.
    assert_eq!(out[1].case.assessment_id, "a-01");
}

#[test]
fn extreme_deviant_example() {
    let pool: Vec<Case> = [3.0, 1.0, 5.0, 2.0, 4.0]
        .iter()
        .enumerate()
        .map(|(i, &s)| Case::new(format!("e{i}"), format!("E{i}"), s))
        .collect();
    let out = SamplingEngine::new().extreme_deviant(&pool, 4);
    let scores: Vec<f64> = out.iter().map(|s| s.case.overall_score).collect();
    assert_eq!(scores, vec![1.0, 2.0, 4.0, 5.0]);
}

#[test]
fn extreme_deviant_five_of_many_takes_three_low() {
    let pool: Vec<Case> = (0..10)
        .map(|i| Case::new(format!("e{i}"), format!("E{i}"), i as f64))
        .collect();
    let out = SamplingEngine::new().extreme_deviant(&pool, 5);
    let scores: Vec<f64> = out.iter().map(|s| s.case.overall_score).collect();
    assert_eq!(scores, vec![0.0, 1.0, 2.0, 8.0, 9.0]);
}

#[test]
fn typical_cases_from_json_pool() {
    let out = SamplingEngine::new().typical_cases(&pool(), 2, &domain_keys());
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|s| s.justification.contains("from domain means")));
    // Extremes of the pool are never the most typical.
    assert!(out.iter().all(|s| s.case.assessment_id != "a-02"));
    assert!(out.iter().all(|s| s.case.assessment_id != "a-01"));
}

#[test]
fn purposive_joins_profiles_and_filters() {
    let profiles = index_profiles(profiles());
    let criteria = PurposiveCriteria::default().country("FR").sector("recycling");
    let engine = SamplingEngine::new().with_seed(2024);
    let out = engine.purposive_sampling(&pool(), 2, &criteria, &profiles);

    assert_eq!(out.len(), 2);
    for s in &out {
        assert!(["a-01", "a-03", "a-06"].contains(&s.case.assessment_id.as_str()));
        assert_eq!(s.justification, "Matches purposive criteria: country=FR, sector=recycling");
    }
}

#[test]
fn purposive_drops_cases_without_profile() {
    let profiles = index_profiles(profiles());
    let criteria = PurposiveCriteria::default();
    let out = SamplingEngine::new().purposive_sampling(&pool(), 10, &criteria, &profiles);
    assert_eq!(out.len(), 5);
    assert!(out.iter().all(|s| s.case.assessment_id != "a-04"));
}

#[test]
fn zero_and_empty_inputs_yield_nothing() {
    let engine = SamplingEngine::new();
    let keys = domain_keys();
    let profiles = index_profiles(profiles());
    let criteria = PurposiveCriteria::default();
    let plans = [
        SamplingPlan::MaximumVariation { domain_keys: &keys },
        SamplingPlan::Extreme,
        SamplingPlan::Typical { domain_keys: &keys },
        SamplingPlan::Purposive {
            criteria: &criteria,
            profiles: &profiles,
        },
    ];
    for plan in &plans {
        assert!(engine.sample(&pool(), 0, plan).is_empty(), "{:?}", plan.method());
        assert!(engine.sample(&[], 3, plan).is_empty(), "{:?}", plan.method());
    }
}

#[test]
fn methodology_text_for_typical() {
    let text = generate_methodology_text(SamplingMethod::Typical, 5, 40);
    assert!(text.contains("5 cases"));
    assert!(text.contains("40 completed assessments"));
}

#[test]
fn report_serializes_for_export() {
    let keys = domain_keys();
    let plan = SamplingPlan::MaximumVariation { domain_keys: &keys };
    let report = SamplingEngine::new().report(&pool(), 3, &plan);
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["method"], "maximum_variation");
    assert_eq!(json["poolSize"], 6);
    assert_eq!(json["cases"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["cases"][0]["assessmentId"], "a-02");
    assert!(json["cases"][0]["justification"].is_string());
    assert!(json["methodology"]
        .as_str()
        .is_some_and(|t| t.contains("3 cases from 6 completed assessments")));
}

#[test]
fn engine_config_deserializes_with_defaults() {
    let config: EngineConfig = serde_json::from_str(r#"{"seed": 9}"#).expect("config parses");
    assert_eq!(config.seed, Some(9));
    assert!(config.domain_keys.is_empty());
    assert_eq!(config.log_level, "info");
}

#[test]
fn coder_agreement_on_interview_codes() {
    let coder_a = ["cost", "trust", "cost", "skills", "trust", "cost", "skills", "trust"];
    let coder_b = ["cost", "trust", "skills", "skills", "trust", "cost", "skills", "cost"];
    let report = cohens_kappa(&coder_a, &coder_b).expect("paired ratings");
    assert_eq!(report.items, 8);
    assert_eq!(report.categories, 3);
    assert!((report.observed_agreement - 0.75).abs() < 1e-12);
    assert!(report.kappa > 0.6 && report.kappa < 0.65);
    assert_eq!(report.strength, AgreementStrength::Substantial);
}
