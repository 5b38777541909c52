//! # Ledger Metrics Core Types
//!
//! The shared vocabulary of the workspace: the `LedgerEntry` row, the
//! `LedgerDocument` wrapper it is exported in, and the enums naming the
//! categories, account types and value types the metrics recognise.
//! This crate has no knowledge of calculation, configuration or I/O.

pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{AccountCategory, AccountType, ValueType};
pub use structs::{LedgerDocument, LedgerEntry};
