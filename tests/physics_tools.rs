//! End-to-end checks through the public API and the tool registry.

use std::fs;
use std::sync::Arc;

use physics_mcp_server::core::Config;
use physics_mcp_server::domains::tools::{ToolContext, ToolError, ToolRegistry};
use physics_mcp_server::knowledge::KnowledgeBase;
use physics_mcp_server::physics::{
    DEFAULT_TRUTH_PARAMS, PhysicsError, QuarkDistributionParams, decay_probability,
    generate_events, get_particle_properties, lorentz_factor, relativistic_energy,
};
use serde_json::{Value, json};
use tempfile::TempDir;

fn truth() -> QuarkDistributionParams {
    QuarkDistributionParams::from_array(DEFAULT_TRUTH_PARAMS)
}

fn call(registry: &ToolRegistry, name: &str, args: Value) -> Value {
    let result = registry.call_tool(name, args).unwrap();
    assert_eq!(result.is_error, Some(false), "{name} failed");
    result.structured_content.unwrap()
}

#[test]
fn relativistic_energy_bounds() {
    for &(m, p) in &[(0.0, 0.0), (0.511, 0.0), (105.66, 50.0), (938.27, 5000.0), (0.0, 12.0)] {
        let e = relativistic_energy(m, p).unwrap();
        assert!(e >= m.max(p));
    }
    assert_eq!(relativistic_energy(938.272, 0.0).unwrap(), 938.272);
}

#[test]
fn lorentz_factor_is_increasing_below_light_speed() {
    assert_eq!(lorentz_factor(0.0).unwrap(), 1.0);
    let gammas: Vec<f64> = (0..100)
        .map(|i| lorentz_factor(i as f64 / 100.0).unwrap())
        .collect();
    assert!(gammas.windows(2).all(|w| w[1] > w[0]));
    assert!(matches!(lorentz_factor(1.0), Err(PhysicsError::Validation(_))));
    assert!(lorentz_factor(1.5).is_err());
}

#[test]
fn decay_probability_properties() {
    let tau = 2.1969811e-6;
    assert!((decay_probability(tau, tau).unwrap() - (1.0 - (-1.0f64).exp())).abs() < 1e-6);
    assert_eq!(decay_probability(tau, 0.0).unwrap(), 0.0);
    let mut last = 0.0;
    for k in 1..20 {
        let p = decay_probability(tau, tau * k as f64 / 4.0).unwrap();
        assert!(p > last);
        last = p;
    }
}

#[test]
fn muon_and_unknown_particle() {
    let muon = get_particle_properties("muon").unwrap();
    assert!((muon.mass_mev - 105.658).abs() < 1e-3);
    assert_eq!(muon.charge, -1);
    assert!((muon.lifetime_s - 2.1970e-6).abs() < 1e-9);
    assert_eq!(muon.spin(), 0.5);

    match get_particle_properties("graviton") {
        Err(PhysicsError::NotFound { known, .. }) => assert!(known.iter().any(|n| n == "muon")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn helium_binding_energy_through_registry() {
    let registry = ToolRegistry::new(ToolContext::default());
    let data = call(
        &registry,
        "calculate_binding_energy",
        json!({"isotope_mass_u": 4.002603, "num_protons": 2, "num_neutrons": 2}),
    );
    let energy = data["binding_energy_MeV"].as_f64().unwrap();
    assert!((energy - 28.3).abs() < 0.1, "got {energy}");
}

#[test]
fn event_generation_is_reproducible_and_validated() {
    let a = generate_events(10_000, truth(), Some(42)).unwrap();
    let b = generate_events(10_000, truth(), Some(42)).unwrap();
    assert_eq!(a.sigma1.mean.to_bits(), b.sigma1.mean.to_bits());
    assert_eq!(a.sigma1.std.to_bits(), b.sigma1.std.to_bits());
    assert_eq!(a.sigma2.mean.to_bits(), b.sigma2.mean.to_bits());
    assert_eq!(a.sigma2.std.to_bits(), b.sigma2.std.to_bits());

    assert!(matches!(
        generate_events(-5, truth(), Some(1)),
        Err(PhysicsError::Validation(_))
    ));
}

/// Mean relative error of the sample std against its analytic value, over
/// several seeds, for σ and x in both channels.
fn std_errors(num_events: i64) -> [f64; 4] {
    const SEEDS: u64 = 8;
    let mut sums = [0.0; 4];
    for seed in 0..SEEDS {
        let summary = generate_events(num_events, truth(), Some(seed)).unwrap();
        let (s1, s2) = (&summary.sigma1, &summary.sigma2);
        let errors = [
            (s1.std - s1.analytic_std).abs() / s1.analytic_std,
            (s2.std - s2.analytic_std).abs() / s2.analytic_std,
            (s1.x_std - s1.analytic_x_std).abs() / s1.analytic_x_std,
            (s2.x_std - s2.analytic_x_std).abs() / s2.analytic_x_std,
        ];
        for (sum, e) in sums.iter_mut().zip(errors) {
            *sum += e;
        }
    }
    sums.map(|sum| sum / SEEDS as f64)
}

#[test]
fn sample_std_converges_to_analytic() {
    let [e3, e4, e5] = [1_000, 10_000, 100_000].map(std_errors);
    for i in 0..4 {
        assert!(e4[i] < e3[i], "no improvement from 1e3 to 1e4: {} vs {}", e3[i], e4[i]);
        assert!(e5[i] < e4[i], "no improvement from 1e4 to 1e5: {} vs {}", e4[i], e5[i]);
        assert!(e5[i] < 0.02, "relative error {} at 1e5 events", e5[i]);
    }
}

#[test]
fn generate_tool_reports_seed_and_respects_limit() {
    let mut config = Config::default();
    config.events.max_events = 1000;
    let registry = ToolRegistry::new(ToolContext::from_config(config));

    let data = call(&registry, "generate_physics_events", json!({"num_events": 500, "seed": 9}));
    assert_eq!(data["summary"]["seed"], 9);
    assert_eq!(data["summary"]["num_events"], 500);

    let result = registry
        .call_tool("generate_physics_events", json!({"num_events": 5000}))
        .unwrap();
    assert_eq!(result.is_error, Some(true));
}

#[test]
fn unknown_tool_lists_available_tools() {
    let registry = ToolRegistry::new(ToolContext::default());
    let err = registry.call_tool("warp_drive", json!({})).unwrap_err();
    assert!(matches!(err, ToolError::NotFound { .. }));
    for name in ToolRegistry::tool_names() {
        assert!(err.to_string().contains(name));
    }
}

#[test]
fn malformed_arguments_are_rejected() {
    let registry = ToolRegistry::new(ToolContext::default());
    let err = registry
        .call_tool("calculate_lorentz_factor", json!({"velocity_fraction": "fast"}))
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments(_)));
}

#[test]
fn load_then_search_documents() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("muons.txt"),
        "Introduction\nThe muon lifetime is 2.197 microseconds.\nMuons decay to electrons.\nEnd",
    )
    .unwrap();
    fs::write(dir.path().join("ignored.csv"), "muon,1").unwrap();

    let knowledge = Arc::new(KnowledgeBase::new());
    let registry = ToolRegistry::new(ToolContext::new(
        Arc::new(Config::default()),
        knowledge.clone(),
    ));

    let data = call(
        &registry,
        "load_documents",
        json!({"directory": dir.path().to_string_lossy()}),
    );
    assert_eq!(data["loaded"], json!(["muons.txt"]));
    assert_eq!(knowledge.len(), 1);

    // Loading again skips what is already there.
    let data = call(
        &registry,
        "load_documents",
        json!({"directory": dir.path().to_string_lossy()}),
    );
    assert_eq!(data["skipped"], json!(["muons.txt"]));

    let data = call(&registry, "search_knowledge_base", json!({"query": "muon lifetime"}));
    assert_eq!(data["status"], "found");
    assert_eq!(data["snippets"][0]["source"], "muons.txt");

    let data = call(&registry, "search_knowledge_base", json!({"query": "gluon"}));
    assert_eq!(data["status"], "no_matches");
}
