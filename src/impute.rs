//! Missing-value imputation over `f64` slices.
//!
//! Missing entries are represented as NaN. The chosen statistic is
//! computed over the non-missing entries and substituted into every
//! missing slot; non-missing entries are never altered.

use crate::error::{PrepError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Strategy for imputing missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ImputeMethod {
    /// Use the mean of non-missing values
    #[default]
    Mean,
    /// Use the median of non-missing values
    Median,
    /// Use the most frequent non-missing value
    Mode,
}

impl FromStr for ImputeMethod {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            "mode" => Ok(Self::Mode),
            _ => Err(PrepError::UnknownMethod {
                kind: "imputation",
                name: s.to_string(),
            }),
        }
    }
}

/// Replace every missing (NaN) entry with the chosen statistic of the
/// non-missing entries.
///
/// Returns a new vector; the input is never mutated. Output aligns
/// index-for-index with the input, with two degenerate cases:
///
/// - empty input produces `vec![replacement]` (a single element),
/// - when every entry is missing the statistic is undefined and
///   `replacement` is used for every slot instead.
pub fn impute(values: &[f64], replacement: f64, method: ImputeMethod) -> Vec<f64> {
    if values.is_empty() {
        return vec![replacement];
    }

    let fill = match statistic(values, method) {
        Some(v) => v,
        None => {
            debug!("All entries missing, falling back to replacement value");
            replacement
        }
    };

    values
        .iter()
        .map(|&v| if v.is_nan() { fill } else { v })
        .collect()
}

/// String-selected variant of [`impute`].
///
/// Accepts `"Mean"`, `"Median"`, or `"Mode"` (case-insensitive); any other
/// name fails with [`PrepError::UnknownMethod`].
pub fn impute_named(values: &[f64], replacement: f64, name: &str) -> Result<Vec<f64>> {
    Ok(impute(values, replacement, name.parse()?))
}

/// Statistic over the non-missing entries; `None` when every entry is NaN.
fn statistic(values: &[f64], method: ImputeMethod) -> Option<f64> {
    let mut valid: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if valid.is_empty() {
        return None;
    }

    let value = match method {
        ImputeMethod::Mean => valid.iter().sum::<f64>() / valid.len() as f64,
        ImputeMethod::Median => {
            valid.sort_by(|a, b| a.total_cmp(b));
            let n = valid.len();
            if n % 2 == 1 {
                valid[n / 2]
            } else {
                (valid[n / 2 - 1] + valid[n / 2]) / 2.0
            }
        }
        ImputeMethod::Mode => {
            // Ties go to the smallest value: runs are scanned in sorted
            // order and only a strictly larger count replaces the pick.
            valid.sort_by(|a, b| a.total_cmp(b));
            let mut best = valid[0];
            let mut best_count = 0usize;
            let mut run = valid[0];
            let mut run_count = 0usize;
            for &v in &valid {
                if v == run {
                    run_count += 1;
                } else {
                    run = v;
                    run_count = 1;
                }
                if run_count > best_count {
                    best = run;
                    best_count = run_count;
                }
            }
            best
        }
    };

    Some(value)
}
