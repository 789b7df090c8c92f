//! Configuration parsing and file round-trips.

use std::fs;

use slip::config::Config;
use slip::pipeline::TableParams;
use slip::sim::NoiseConfig;

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config {
        seed: 99,
        num_tasks: 15,
        max_days: 75,
        noise: NoiseConfig {
            log_drop_prob: 0.25,
            ..NoiseConfig::default()
        },
        ..Config::default()
    };
    fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    let parsed: Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.seed, 99);
    assert_eq!(parsed.num_tasks, 15);
    assert_eq!(parsed.max_days, 75);
    assert_eq!(parsed.noise.log_drop_prob, 0.25);
    assert_eq!(parsed.risk_weights.ml_weight, 0.4);
}

#[test]
fn test_partial_nested_sections_fill_defaults() {
    let parsed: Config = toml::from_str("seed = 3\n\n[noise]\ndisruption_prob = 0.5\n").unwrap();

    assert_eq!(parsed.seed, 3);
    assert_eq!(parsed.noise.disruption_prob, 0.5);
    assert_eq!(parsed.noise.rework_prob, NoiseConfig::default().rework_prob);
    assert_eq!(parsed.num_tasks, 50);
    assert_eq!(parsed.risk_thresholds.high, 70);
}

#[test]
fn test_default_config_matches_pipeline_defaults() {
    assert_eq!(Config::default().table_params(), TableParams::default());
}

#[test]
fn test_loaded_noise_is_validated() {
    let parsed: Config = toml::from_str("[noise]\nrework_prob = 1.5\n").unwrap();
    assert!(parsed.noise.validate().is_err());
}
