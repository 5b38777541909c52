use crate::enums::{AccountCategory, AccountType, ValueType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of accounting data.
///
/// The classification fields are free-form strings: values outside the known
/// vocabulary are legal and simply match none of the metric filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub account_category: String,
    pub account_type: String,
    pub value_type: String,
    pub total_value: Decimal,

    // Descriptive fields, carried through but never read by any metric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_currency: Option<String>,
}

impl LedgerEntry {
    /// Builds an entry from the known vocabulary with no descriptive fields.
    pub fn new(
        category: AccountCategory,
        account_type: &str,
        value_type: ValueType,
        total_value: Decimal,
    ) -> Self {
        Self {
            account_category: category.as_str().to_string(),
            account_type: account_type.to_string(),
            value_type: value_type.as_str().to_string(),
            total_value,
            account_name: None,
            account_code: None,
            account_currency: None,
        }
    }

    pub fn is_category(&self, category: AccountCategory) -> bool {
        self.account_category == category.as_str()
    }

    pub fn is_value_type(&self, value_type: ValueType) -> bool {
        self.value_type == value_type.as_str()
    }

    pub fn is_account_type(&self, account_type: AccountType) -> bool {
        self.account_type == account_type.as_str()
    }

    /// True if the entry's account type is one of `allowed`.
    pub fn has_account_type_in(&self, allowed: &[AccountType]) -> bool {
        allowed.iter().any(|t| self.is_account_type(*t))
    }
}

/// The on-disk shape of a ledger export: `{ "data": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub data: Vec<LedgerEntry>,
}
