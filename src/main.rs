use analytics::{MetricsCalculator, MetricsResult};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use comfy_table::Table;
use configuration::CalculatorOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the ledger metrics CLI.
fn main() -> ExitCode {
    // Optional .env file with LEDGER_METRICS_* or RUST_LOG settings.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Failed to initialise logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("An error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Computes summary financial metrics from a JSON ledger export.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ledger file of the form { "data": [ ... ] }.
    #[arg(default_value = loader::DEFAULT_INPUT)]
    input: PathBuf,

    /// Config file (TOML). Defaults to ./ledger-metrics.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    options: CalculatorOptions,

    /// How to print the metrics.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so stdout carries only the report.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn run(cli: Cli) -> Result<()> {
    let config = configuration::load_config(cli.config.as_deref(), cli.options)
        .context("Failed to load calculator configuration")?;
    tracing::info!(?config, "Resolved calculator configuration");

    let entries = loader::load_ledger(&cli.input)
        .with_context(|| format!("Failed to load ledger from '{}'", cli.input.display()))?;

    let calculator = MetricsCalculator::with_config(entries, config);
    let metrics = calculator.calculate_metrics();

    print!("{}", render(&metrics, cli.output)?);
    Ok(())
}

fn render(metrics: &MetricsResult, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => format!("Accounting Metrics:\n{metrics}"),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["Metric", "Value"]);
            for (label, value) in metrics.iter() {
                table.add_row(vec![label, value]);
            }
            format!("{table}\n")
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(metrics)
                .context("Failed to serialize metrics to JSON")?;
            format!("{json}\n")
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetricsResult {
        MetricsResult {
            revenue: "$150,000".into(),
            expenses: "$40,000".into(),
            gross_profit_margin: "66.7%".into(),
            net_profit_margin: "73.3%".into(),
            working_capital_ratio: "366.7%".into(),
        }
    }

    #[test]
    fn text_output_lists_metrics_in_order() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Accounting Metrics:",
                "Revenue: $150,000",
                "Expenses: $40,000",
                "Gross Profit Margin: 66.7%",
                "Net Profit Margin: 73.3%",
                "Working Capital Ratio: 366.7%",
            ]
        );
    }

    #[test]
    fn table_output_contains_every_metric() {
        let table = render(&sample(), OutputFormat::Table).unwrap();
        for label in MetricsResult::LABELS {
            assert!(table.contains(label), "missing {label}");
        }
        assert!(table.contains("366.7%"));
    }

    #[test]
    fn json_output_round_trips() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: MetricsResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn cli_flags_populate_options() {
        let cli = Cli::try_parse_from([
            "ledger-metrics",
            "ledger.json",
            "--currency-symbol",
            "€",
            "--decimal-places",
            "2",
            "--output",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("ledger.json"));
        assert_eq!(cli.options.currency_symbol.as_deref(), Some("€"));
        assert_eq!(cli.options.decimal_places, Some(2));
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["ledger-metrics"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("data.json"));
        assert_eq!(cli.options, CalculatorOptions::default());
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(cli.config.is_none());
    }
}
