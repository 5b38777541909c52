use serde::{Deserialize, Serialize};
use std::fmt;

/// The formatted output of `MetricsCalculator::calculate_metrics`.
///
/// Holds display strings only. Serializes with the human-readable labels as
/// keys, in the same fixed order that [`MetricsResult::iter`] yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsResult {
    #[serde(rename = "Revenue")]
    pub revenue: String,
    #[serde(rename = "Expenses")]
    pub expenses: String,
    #[serde(rename = "Gross Profit Margin")]
    pub gross_profit_margin: String,
    #[serde(rename = "Net Profit Margin")]
    pub net_profit_margin: String,
    #[serde(rename = "Working Capital Ratio")]
    pub working_capital_ratio: String,
}

impl MetricsResult {
    pub const LABELS: [&'static str; 5] = [
        "Revenue",
        "Expenses",
        "Gross Profit Margin",
        "Net Profit Margin",
        "Working Capital Ratio",
    ];

    /// `(label, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let values = [
            self.revenue.as_str(),
            self.expenses.as_str(),
            self.gross_profit_margin.as_str(),
            self.net_profit_margin.as_str(),
            self.working_capital_ratio.as_str(),
        ];
        Self::LABELS.into_iter().zip(values)
    }
}

impl fmt::Display for MetricsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.iter() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
