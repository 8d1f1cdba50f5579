use meridian_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MeridianConfig::from_toml("").unwrap();

    // Routing defaults
    assert_eq!(config.routing.routing_threshold, 0.7);
    assert_eq!(config.routing.per_backend_timeout_ms, 8_000);
    assert_eq!(config.routing.fallback_domain, "general");
    assert_eq!(config.routing.fallback_model, "general-med");

    // Matrix defaults
    assert_eq!(config.matrix.smoothing, 0.1);

    // Tier defaults
    assert_eq!(config.tiers.core_threshold, 0.95);
    assert_eq!(config.tiers.extended_threshold, 0.80);

    // Feedback defaults
    assert_eq!(config.feedback.explicit_weight, 0.6);
    assert_eq!(config.feedback.implicit_weight, 0.3);
    assert_eq!(config.feedback.expert_weight, 0.1);

    // Key defaults
    assert!(config.key.case_fold);
    assert!(config.key.strip_punctuation);
    assert!(config.key.collapse_whitespace);

    // Store defaults
    assert_eq!(config.store.shards, 64);

    // Server defaults
    assert_eq!(config.server.bind_addr, "127.0.0.1:7180");
    assert_eq!(config.server.cache_serve_threshold, 0.9);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[routing]
routing_threshold = 0.5
fallback_model = "house-model"

[store]
shards = 16
"#;
    let config = MeridianConfig::from_toml(toml).unwrap();
    assert_eq!(config.routing.routing_threshold, 0.5);
    assert_eq!(config.routing.fallback_model, "house-model");
    assert_eq!(config.store.shards, 16);
    // Non-overridden fields keep defaults
    assert_eq!(config.routing.per_backend_timeout_ms, 8_000);
    assert_eq!(config.tiers.core_threshold, 0.95);
}

#[test]
fn config_serde_roundtrip() {
    let config = MeridianConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = MeridianConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.routing.routing_threshold,
        config.routing.routing_threshold
    );
    assert_eq!(roundtripped.store.shards, config.store.shards);
}

#[test]
fn config_rejects_smoothing_outside_open_interval() {
    for bad in ["smoothing = 0.0", "smoothing = 1.0", "smoothing = 1.5"] {
        let toml = format!("[matrix]\n{bad}\n");
        let err = MeridianConfig::from_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("smoothing"), "got: {err}");
    }
}

#[test]
fn config_rejects_unordered_tier_thresholds() {
    let toml = r#"
[tiers]
core_threshold = 0.6
extended_threshold = 0.8
"#;
    let err = MeridianConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("extended_threshold"));
}

#[test]
fn config_rejects_tier_thresholds_outside_unit_interval() {
    let toml = r#"
[tiers]
core_threshold = 1.4
"#;
    assert!(MeridianConfig::from_toml(toml).is_err());
}
