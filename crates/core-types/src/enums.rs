use serde::{Deserialize, Serialize};

/// The top-level classification of a ledger entry that the metrics understand.
///
/// Entries carry this as a plain string so unknown categories still load; these
/// are the values the calculator filters compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCategory {
    Revenue,
    Expense,
    Assets,
    Liability,
}

impl AccountCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccountCategory::Revenue => "revenue",
            AccountCategory::Expense => "expense",
            AccountCategory::Assets => "assets",
            AccountCategory::Liability => "liability",
        }
    }
}

/// Sub-classifications that appear in the metric allow-lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Sales,
    Current,
    Bank,
    CurrentAccountsReceivable,
    CurrentAccountsPayable,
}

impl AccountType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccountType::Sales => "sales",
            AccountType::Current => "current",
            AccountType::Bank => "bank",
            AccountType::CurrentAccountsReceivable => "current_accounts_receivable",
            AccountType::CurrentAccountsPayable => "current_accounts_payable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Debit,
    Credit,
}

impl ValueType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::Debit => "debit",
            ValueType::Credit => "credit",
        }
    }

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            ValueType::Debit => ValueType::Credit,
            ValueType::Credit => ValueType::Debit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_serde_form() {
        for (json, text) in [
            (serde_json::to_string(&AccountCategory::Liability).unwrap(), AccountCategory::Liability.as_str()),
            (serde_json::to_string(&AccountType::CurrentAccountsReceivable).unwrap(), AccountType::CurrentAccountsReceivable.as_str()),
            (serde_json::to_string(&ValueType::Credit).unwrap(), ValueType::Credit.as_str()),
        ] {
            assert_eq!(json, format!("\"{text}\""));
        }
    }

    #[test]
    fn opposite_flips_direction() {
        assert_eq!(ValueType::Debit.opposite(), ValueType::Credit);
        assert_eq!(ValueType::Credit.opposite(), ValueType::Debit);
    }
}
