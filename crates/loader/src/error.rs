use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read ledger file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed while reading ledger input: {0}")]
    Read(#[source] serde_json::Error),

    #[error("Ledger is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Ledger does not match the expected schema: {0}")]
    Schema(#[source] serde_json::Error),
}

impl From<serde_json::Error> for LoaderError {
    /// Splits JSON failures into read errors, malformed input and
    /// well-formed input of the wrong shape.
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Io => LoaderError::Read(err),
            Category::Data => LoaderError::Schema(err),
            Category::Syntax | Category::Eof => LoaderError::InvalidJson(err),
        }
    }
}
