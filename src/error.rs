//! Custom error types for the numeric prep utilities.
//!
//! This module provides the crate-wide error type using `thiserror`.
//! Method selection is done through closed enums, so the only failure
//! paths left are string-to-method parsing and Polars operations in the
//! frame imputer.

use thiserror::Error;

/// The main error type for tabular prep operations.
#[derive(Error, Debug)]
pub enum PrepError {
    /// A method was selected by name and the name is not recognized.
    #[error("Unknown {kind} method: '{name}'")]
    UnknownMethod { kind: &'static str, name: String },

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl PrepError {
    /// Get a stable error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMethod { .. } => "UNKNOWN_METHOD",
            Self::Polars(_) => "POLARS_ERROR",
        }
    }
}

/// Result type alias for tabular prep operations.
pub type Result<T> = std::result::Result<T, PrepError>;
