use clap::{CommandFactory, FromArgMatches, Parser};
use std::fs;
use typeprobe::config::{ByteOrder, Config, ProbeParams, ScoringWeights};
use typeprobe::ProbeError;

// Helper to create a config for testing without relying on Clap parsing
fn get_default_test_config() -> Config {
    Config {
        probe: ProbeParams {
            chunk_size: 4096,
            byte_order: ByteOrder::Little,
            parallel: false,
            limit: None,
        },
        weights: ScoringWeights {
            weight_deviation: 1.0,
            weight_zero: 1.0,
            weight_nan: 1.0,
        },
    }
}

#[test]
fn test_defaults_are_valid() {
    assert!(Config::default().validate().is_ok());
    assert!(get_default_test_config().validate().is_ok());
    assert_eq!(Config::default().probe.chunk_size, 1 << 20);
}

#[test]
fn test_zero_chunk_size_rejected() {
    let mut config = get_default_test_config();
    config.probe.chunk_size = 0;
    assert!(matches!(config.validate(), Err(ProbeError::Config(_))));
}

#[test]
fn test_negative_weight_rejected() {
    let mut config = get_default_test_config();
    config.weights.weight_zero = -0.5;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("weight_zero"));
}

#[test]
fn test_config_errors_name_the_problem() {
    let mut config = get_default_test_config();
    config.probe.chunk_size = 0;
    let msg = config.validate().unwrap_err().to_string();
    assert!(msg.starts_with("Invalid configuration"));
    assert!(msg.contains("chunk_size"));
}

#[test]
fn test_nan_weight_rejected() {
    let mut config = get_default_test_config();
    config.weights.weight_nan = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn test_weights_json_fills_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{ "weight_zero": 2.5 }"#).unwrap();

    let w = ScoringWeights::load_from_file(&path).unwrap();
    assert_eq!(w.weight_zero, 2.5);
    assert_eq!(w.weight_deviation, 1.0);
    assert_eq!(w.weight_nan, 1.0);
}

#[test]
fn test_weights_json_garbage_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, "not json").unwrap();

    assert!(matches!(
        ScoringWeights::load_from_file(&path),
        Err(ProbeError::Json(_))
    ));
}

#[test]
fn test_weights_json_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        ScoringWeights::load_from_file(dir.path().join("nope.json")),
        Err(ProbeError::Io(_))
    ));
}

#[test]
fn test_config_round_trips_through_json() {
    let mut config = get_default_test_config();
    config.probe.byte_order = ByteOrder::Big;
    config.probe.limit = Some(10);

    let text = serde_json::to_string(&config).unwrap();
    assert!(text.contains("\"big\""));
    let back: Config = serde_json::from_str(&text).unwrap();
    assert_eq!(back.probe.byte_order, ByteOrder::Big);
    assert_eq!(back.probe.limit, Some(10));
}

#[test]
fn test_bytes_to_scan_honours_limit() {
    let mut params = get_default_test_config().probe;
    assert_eq!(params.bytes_to_scan(8_000), 8_000);

    params.limit = Some(800);
    assert_eq!(params.bytes_to_scan(8_000), 800);
    assert_eq!(params.bytes_to_scan(100), 100);

    params.limit = Some(u64::MAX);
    assert_eq!(params.bytes_to_scan(8_000), 8_000);
}

#[derive(Parser, Debug)]
struct WeightsCli {
    #[command(flatten)]
    weights: ScoringWeights,
}

fn parse_weights(args: &[&str]) -> (ScoringWeights, clap::ArgMatches) {
    let matches = WeightsCli::command().get_matches_from(args);
    let cli = WeightsCli::from_arg_matches(&matches).unwrap();
    (cli.weights, matches)
}

#[test]
fn test_typed_flags_override_file_weights() {
    let (cli_weights, matches) = parse_weights(&["typeprobe", "--weight-zero", "3"]);
    let mut file_weights = ScoringWeights {
        weight_deviation: 5.0,
        weight_zero: 0.5,
        weight_nan: 2.0,
    };

    file_weights.merge_from_cli(&cli_weights, &matches);

    assert_eq!(file_weights.weight_zero, 3.0);
    assert_eq!(file_weights.weight_deviation, 5.0);
    assert_eq!(file_weights.weight_nan, 2.0);
}

#[test]
fn test_clap_defaults_do_not_override_file_weights() {
    let (cli_weights, matches) = parse_weights(&["typeprobe"]);
    let file = ScoringWeights {
        weight_deviation: 5.0,
        weight_zero: 0.5,
        weight_nan: 2.0,
    };
    let mut merged = file;

    merged.merge_from_cli(&cli_weights, &matches);

    assert_eq!(merged, file);
}
