use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    CalculatorConfig, CalculatorOptions, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMAL_PLACES,
    MAX_DECIMAL_PLACES,
};

/// Base name of the config file looked up in the working directory when no
/// explicit path is given (any extension `config` understands, e.g. `.toml`).
pub const DEFAULT_CONFIG_NAME: &str = "ledger-metrics";

/// Prefix of the environment variables that override the config file,
/// e.g. `LEDGER_METRICS_DECIMAL_PLACES=2`.
pub const ENV_PREFIX: &str = "LEDGER_METRICS";

/// Reads the file and environment layers into a partial `CalculatorOptions`.
///
/// An explicit `config_path` must exist; the default `ledger-metrics.*` file is optional.
pub fn load_options(config_path: Option<&Path>) -> Result<CalculatorOptions, ConfigError> {
    load_options_with_env(config_path, None)
}

/// Like [`load_options`], but reads the environment layer from `env` instead
/// of the process environment when it is `Some`.
pub fn load_options_with_env(
    config_path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<CalculatorOptions, ConfigError> {
    let file = match config_path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    let options = builder.try_deserialize::<CalculatorOptions>()?;
    tracing::debug!(?options, "Loaded calculator options from file and environment");
    Ok(options)
}

/// Loads the calculator configuration.
///
/// Layers, lowest precedence first: built-in defaults, the config file, the
/// `LEDGER_METRICS_*` environment, then `overrides` (typically CLI flags).
/// The result is validated before it is returned.
pub fn load_config(
    config_path: Option<&Path>,
    overrides: CalculatorOptions,
) -> Result<CalculatorConfig, ConfigError> {
    let config = load_options(config_path)?.overlay(overrides).resolve();
    config.validate()?;
    Ok(config)
}
