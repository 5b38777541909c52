use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_DECIMAL_PLACES: u32 = 1;
/// Upper bound on percentage precision; well inside what `Decimal` can carry.
pub const MAX_DECIMAL_PLACES: u32 = 20;

/// The fully resolved calculator configuration. Every field is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Prefix for the currency fields (e.g. "$", "€").
    pub currency_symbol: String,
    /// Digits after the decimal point in the percentage fields.
    /// Currency is always rounded to whole units.
    pub decimal_places: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::ValidationError(format!(
                "decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                self.decimal_places
            )));
        }
        Ok(())
    }
}

/// Partial configuration as supplied by a caller, a config file, the
/// environment or the command line. Unset fields fall back to the defaults
/// when resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct CalculatorOptions {
    /// Currency symbol prefixed to Revenue and Expenses [default: $]
    #[cfg_attr(feature = "clap", arg(long))]
    pub currency_symbol: Option<String>,

    /// Digits after the decimal point for percentages [default: 1]
    #[cfg_attr(feature = "clap", arg(long))]
    pub decimal_places: Option<u32>,
}

impl CalculatorOptions {
    /// Layers `overrides` on top of `self`; any field set in `overrides` wins.
    pub fn overlay(self, overrides: CalculatorOptions) -> Self {
        Self {
            currency_symbol: overrides.currency_symbol.or(self.currency_symbol),
            decimal_places: overrides.decimal_places.or(self.decimal_places),
        }
    }

    /// Fills unset fields from the defaults.
    pub fn resolve(self) -> CalculatorConfig {
        let defaults = CalculatorConfig::default();
        CalculatorConfig {
            currency_symbol: self.currency_symbol.unwrap_or(defaults.currency_symbol),
            decimal_places: self.decimal_places.unwrap_or(defaults.decimal_places),
        }
    }
}
