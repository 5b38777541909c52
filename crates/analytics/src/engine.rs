use crate::format::{format_currency, format_percentage};
use crate::report::MetricsResult;
use configuration::{CalculatorConfig, CalculatorOptions};
use core_types::{AccountCategory, AccountType, LedgerEntry, ValueType};
use rust_decimal::Decimal;

/// Asset account types counted as current assets.
const CURRENT_ASSET_TYPES: [AccountType; 3] = [
    AccountType::Current,
    AccountType::Bank,
    AccountType::CurrentAccountsReceivable,
];

/// Liability account types counted as current liabilities.
const CURRENT_LIABILITY_TYPES: [AccountType; 2] =
    [AccountType::Current, AccountType::CurrentAccountsPayable];

/// A calculator for deriving summary financial metrics from a ledger.
///
/// Holds an immutable snapshot of the entries and a resolved configuration.
/// Every method is a pure function of that snapshot; nothing is cached or
/// mutated between calls.
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    entries: Vec<LedgerEntry>,
    config: CalculatorConfig,
}

impl MetricsCalculator {
    /// Creates a calculator with the default configuration (`$`, one decimal place).
    pub fn new(entries: Vec<LedgerEntry>) -> Self {
        Self::with_config(entries, CalculatorConfig::default())
    }

    pub fn with_config(entries: Vec<LedgerEntry>, config: CalculatorConfig) -> Self {
        Self { entries, config }
    }

    /// Resolves `options` against the defaults once, at construction.
    pub fn with_options(entries: Vec<LedgerEntry>, options: CalculatorOptions) -> Self {
        Self::with_config(entries, options.resolve())
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Sum of `total_value` over every entry in the `revenue` category.
    pub fn calculate_revenue(&self) -> Decimal {
        self.sum_where(|e| e.is_category(AccountCategory::Revenue))
    }

    /// Sum of `total_value` over every entry in the `expense` category.
    pub fn calculate_expenses(&self) -> Decimal {
        self.sum_where(|e| e.is_category(AccountCategory::Expense))
    }

    /// Debit `sales` entries as a fraction of `revenue`.
    ///
    /// The numerator matches on account type and value type only, regardless
    /// of category. Zero revenue yields zero rather than an undefined ratio.
    pub fn calculate_gross_profit_margin(&self, revenue: Decimal) -> Decimal {
        if revenue.is_zero() {
            return Decimal::ZERO;
        }

        let sales_debit = self.sum_where(|e| {
            e.is_account_type(AccountType::Sales) && e.is_value_type(ValueType::Debit)
        });

        ratio(sales_debit, revenue)
    }

    /// `(revenue - expenses) / revenue`, unclamped. Zero revenue yields zero.
    pub fn calculate_net_profit_margin(&self, revenue: Decimal, expenses: Decimal) -> Decimal {
        if revenue.is_zero() {
            return Decimal::ZERO;
        }
        ratio(revenue.saturating_sub(expenses), revenue)
    }

    /// Current assets (debit minus credit) over current liabilities (credit minus debit).
    ///
    /// Yields zero whenever liabilities are not strictly positive, so a
    /// negative liabilities balance is reported the same as no liabilities.
    pub fn calculate_working_capital_ratio(&self) -> Decimal {
        let assets = self.net_balance(AccountCategory::Assets, &CURRENT_ASSET_TYPES, ValueType::Debit);
        let liabilities = self.net_balance(
            AccountCategory::Liability,
            &CURRENT_LIABILITY_TYPES,
            ValueType::Credit,
        );

        tracing::debug!(%assets, %liabilities, "Working capital components");

        if liabilities > Decimal::ZERO {
            ratio(assets, liabilities)
        } else {
            Decimal::ZERO
        }
    }

    /// The main entry point: computes all five metrics and formats them.
    pub fn calculate_metrics(&self) -> MetricsResult {
        let revenue = self.calculate_revenue();
        let expenses = self.calculate_expenses();
        let gross_profit_margin = self.calculate_gross_profit_margin(revenue);
        let net_profit_margin = self.calculate_net_profit_margin(revenue, expenses);
        let working_capital_ratio = self.calculate_working_capital_ratio();

        tracing::debug!(
            entries = self.entries.len(),
            %revenue,
            %expenses,
            %gross_profit_margin,
            %net_profit_margin,
            %working_capital_ratio,
            "Calculated ledger metrics"
        );

        let symbol = &self.config.currency_symbol;
        let places = self.config.decimal_places;
        MetricsResult {
            revenue: format_currency(revenue, symbol),
            expenses: format_currency(expenses, symbol),
            gross_profit_margin: format_percentage(gross_profit_margin, places),
            net_profit_margin: format_percentage(net_profit_margin, places),
            working_capital_ratio: format_percentage(working_capital_ratio, places),
        }
    }

    fn sum_where<F>(&self, predicate: F) -> Decimal
    where
        F: Fn(&LedgerEntry) -> bool,
    {
        self.entries
            .iter()
            .filter(|e| predicate(e))
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.total_value))
    }

    /// Entries on the `increasing` side minus entries on the opposite side,
    /// restricted to `category` and the `allowed` account types.
    fn net_balance(
        &self,
        category: AccountCategory,
        allowed: &[AccountType],
        increasing: ValueType,
    ) -> Decimal {
        let side = |value_type: ValueType| {
            self.sum_where(|e| {
                e.is_category(category)
                    && e.is_value_type(value_type)
                    && e.has_account_type_in(allowed)
            })
        };
        side(increasing).saturating_sub(side(increasing.opposite()))
    }
}

/// `numerator / denominator`, saturating instead of overflowing.
/// Callers handle the zero denominator before getting here.
fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}
