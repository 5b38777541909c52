//! # Ledger Metrics Analytics
//!
//! Derives five summary financial metrics from a flat list of ledger entries
//! and renders them as display strings.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** This crate has no knowledge of files, JSON or the CLI.
//!   It depends only on `core-types` and on `configuration` for the resolved
//!   `CalculatorConfig`.
//! - **Stateless Calculation:** The `MetricsCalculator` holds an immutable
//!   snapshot of entries; every metric is a pure function of it. Divisions
//!   by zero are defined as zero rather than reported as errors.
//!
//! ## Public API
//!
//! - `MetricsCalculator`: the filtering, aggregation and formatting logic.
//! - `MetricsResult`: the five labelled, formatted metrics.
//! - `format_currency` / `format_percentage`: the formatting contract.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod format;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::MetricsCalculator;
pub use format::{format_currency, format_percentage, group_thousands};
pub use report::MetricsResult;
