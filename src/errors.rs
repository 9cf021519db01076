use std::io;

use thiserror::Error;

pub type Result<T, E = SyllabusError> = std::result::Result<T, E>;

/// Failures that abort a syllabus refresh.
#[derive(Debug, Error)]
pub enum SyllabusError {
    #[error("could not build the HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("response from {url} is not a search page: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no subjects to write")]
    EmptyResult,
    #[error("cell ({row}, {column}) is outside the sheet; rows and columns start at 1")]
    InvalidCell { row: usize, column: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
