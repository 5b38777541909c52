//! Reads ledger exports of the form `{ "data": [ <entry>, ... ] }`.
//!
//! Every failure surfaces as a [`LoaderError`]; nothing is defaulted, so a
//! missing `data` field is reported rather than treated as an empty ledger.

use core_types::{LedgerDocument, LedgerEntry};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub mod error;

pub use error::LoaderError;

/// The file read when no input path is given.
pub const DEFAULT_INPUT: &str = "data.json";

/// Loads and parses the ledger at `path`.
pub fn load_ledger(path: impl AsRef<Path>) -> Result<Vec<LedgerEntry>, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = read_ledger(BufReader::new(file))?;
    tracing::info!(path = %path.display(), entries = entries.len(), "Loaded ledger");
    Ok(entries)
}

/// Parses a ledger document from any reader.
pub fn read_ledger<R: Read>(reader: R) -> Result<Vec<LedgerEntry>, LoaderError> {
    let document: LedgerDocument = serde_json::from_reader(reader)?;
    Ok(document.data)
}

/// Parses a ledger document held in memory.
pub fn parse_ledger(json: &str) -> Result<Vec<LedgerEntry>, LoaderError> {
    let document: LedgerDocument = serde_json::from_str(json)?;
    Ok(document.data)
}
