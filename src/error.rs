//! Error types for loading, validating and reporting fleet inputs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a run. Each one is reported once and maps to exit code 1.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("Unable to read input {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse input: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No '{0}' defined in input")]
    MissingField(&'static str),

    #[error("{field} out of bounds [{min}, {max}] : {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i128,
    },

    #[error("Unable to write output: {0}")]
    Output(#[source] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
