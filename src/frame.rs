//! Table-level imputation backed by Polars.
//!
//! A thin wrapper that applies the slice-level [`impute`] statistic to
//! every numeric column of a `DataFrame`, the tabular counterpart of
//! calling [`impute`] per column by hand.

use crate::error::Result;
use crate::impute::{ImputeMethod, impute};
use polars::prelude::*;
use tracing::{debug, warn};

/// Fills missing values across a whole `DataFrame`.
///
/// Numeric columns have their nulls replaced by the configured statistic
/// of that column's valid values; non-numeric columns pass through
/// untouched. The default statistic is the mean.
///
/// Filled numeric columns come back as `Float64` regardless of their
/// input width.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameImputer {
    method: ImputeMethod,
}

impl FrameImputer {
    /// Create an imputer with the given statistic.
    pub fn new(method: ImputeMethod) -> Self {
        Self { method }
    }

    /// Fill missing values in every numeric column, returning a new frame.
    pub fn fill_missing(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut out = df.clone();
        let col_names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for name in col_names {
            let column = out.column(&name)?;
            let series = column.as_materialized_series();
            if !is_numeric_dtype(series.dtype()) {
                continue;
            }

            let null_count = series.null_count();
            if null_count == 0 {
                continue;
            }

            let float_series = series.cast(&DataType::Float64)?;
            let values: Vec<f64> = float_series
                .f64()?
                .into_iter()
                .map(|v| v.unwrap_or(f64::NAN))
                .collect();

            if values.iter().all(|v| v.is_nan()) {
                warn!("No valid values in '{}', column left untouched", name);
                continue;
            }

            // The statistic is always defined here, so the replacement
            // fallback can never surface
            let filled = impute(&values, f64::NAN, self.method);
            let result = Series::new(series.name().clone(), filled);
            out.replace(&name, result)?;

            debug!(
                "Filled {} missing values in '{}' using {:?}",
                null_count, name, self.method
            );
        }

        Ok(out)
    }
}

/// Check if a DataType is numeric (integer or float).
#[inline]
fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
