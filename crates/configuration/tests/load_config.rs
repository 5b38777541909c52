use configuration::{
    error::ConfigError, load_config, load_options_with_env, CalculatorOptions,
};
use std::collections::HashMap;
use std::io::Write;

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn reads_options_from_toml_file() {
    let file = toml_file("currency_symbol = \"€\"\ndecimal_places = 2\n");
    let options = load_options_with_env(Some(file.path()), Some(HashMap::new())).expect("load");
    assert_eq!(options.currency_symbol.as_deref(), Some("€"));
    assert_eq!(options.decimal_places, Some(2));
}

#[test]
fn environment_overrides_the_file() {
    let file = toml_file("currency_symbol = \"€\"\ndecimal_places = 2\n");
    let env = HashMap::from([("LEDGER_METRICS_DECIMAL_PLACES".to_string(), "4".to_string())]);
    let options = load_options_with_env(Some(file.path()), Some(env)).expect("load");
    assert_eq!(options.currency_symbol.as_deref(), Some("€"));
    assert_eq!(options.decimal_places, Some(4));
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let file = toml_file("currency_symbol = \"£\"\n");
    let config = load_config(Some(file.path()), CalculatorOptions::default()).expect("load");
    assert_eq!(config.currency_symbol, "£");
    assert_eq!(config.decimal_places, 1);
}

#[test]
fn cli_overrides_win_over_the_file() {
    let file = toml_file("currency_symbol = \"£\"\ndecimal_places = 3\n");
    let overrides = CalculatorOptions {
        currency_symbol: None,
        decimal_places: Some(0),
    };
    let config = load_config(Some(file.path()), overrides).expect("load");
    assert_eq!(config.currency_symbol, "£");
    assert_eq!(config.decimal_places, 0);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = load_config(Some(&path), CalculatorOptions::default()).unwrap_err();
    assert!(matches!(err, ConfigError::LoadError(_)));
}

#[test]
fn negative_decimal_places_fail_to_load() {
    let file = toml_file("decimal_places = -1\n");
    let err = load_options_with_env(Some(file.path()), Some(HashMap::new())).unwrap_err();
    assert!(matches!(err, ConfigError::LoadError(_)));
}

#[test]
fn out_of_range_decimal_places_fail_validation() {
    let file = toml_file("decimal_places = 21\n");
    let err = load_config(Some(file.path()), CalculatorOptions::default()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}
