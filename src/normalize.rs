//! Feature normalization over `f64` slices.
//!
//! Statistics (min, max, mean, std) are computed over the non-missing
//! entries only; missing (NaN) entries stay NaN in the output so index
//! alignment with the input is preserved.

use crate::error::{PrepError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strategy for rescaling a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NormalizeMethod {
    /// Linear rescale into [0, 1] from the observed min and max
    #[default]
    MaxMin,
    /// Subtract the mean, divide by the population standard deviation
    ZScore,
    /// Shift so the minimum is non-negative, then apply `ln(1 + x)`
    Log,
}

impl FromStr for NormalizeMethod {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max-min" => Ok(Self::MaxMin),
            "z-score" => Ok(Self::ZScore),
            "log" => Ok(Self::Log),
            _ => Err(PrepError::UnknownMethod {
                kind: "normalization",
                name: s.to_string(),
            }),
        }
    }
}

/// Rescale every entry of `values` with the chosen method.
///
/// Returns a new vector aligned index-for-index with the input. Zero-range
/// and zero-std inputs map to all zeros rather than dividing by zero;
/// empty input produces empty output.
pub fn normalize(values: &[f64], method: NormalizeMethod) -> Vec<f64> {
    match method {
        NormalizeMethod::MaxMin => max_min(values),
        NormalizeMethod::ZScore => z_score(values),
        NormalizeMethod::Log => log_shift(values),
    }
}

/// String-selected variant of [`normalize`].
///
/// Accepts `"max-min"`, `"z-score"`, or `"log"` (case-insensitive); any
/// other name fails with [`PrepError::UnknownMethod`].
pub fn normalize_named(values: &[f64], name: &str) -> Result<Vec<f64>> {
    Ok(normalize(values, name.parse()?))
}

fn valid_entries(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| !v.is_nan())
}

/// Observed min and max over non-missing entries; `None` when there are none.
fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let mut it = valid_entries(values);
    let first = it.next()?;
    let (min, max) = it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some((min, max))
}

fn max_min(values: &[f64]) -> Vec<f64> {
    let Some((min, max)) = bounds(values) else {
        return values.to_vec();
    };
    let range = max - min;

    values
        .iter()
        .map(|&v| {
            if v.is_nan() {
                v
            } else if range == 0.0 {
                0.0
            } else {
                (v - min) / range
            }
        })
        .collect()
}

fn z_score(values: &[f64]) -> Vec<f64> {
    let n = valid_entries(values).count();
    if n == 0 {
        return values.to_vec();
    }

    let mean = valid_entries(values).sum::<f64>() / n as f64;
    let variance = valid_entries(values)
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / n as f64;
    let std = variance.sqrt();

    values
        .iter()
        .map(|&v| {
            if v.is_nan() {
                v
            } else if std == 0.0 {
                0.0
            } else {
                (v - mean) / std
            }
        })
        .collect()
}

fn log_shift(values: &[f64]) -> Vec<f64> {
    let Some((min, _)) = bounds(values) else {
        return values.to_vec();
    };
    // Shift guarantees ln_1p never sees an argument below zero
    let shift = if min <= 0.0 { min.abs() + 1.0 } else { 0.0 };

    values
        .iter()
        .map(|&v| if v.is_nan() { v } else { (v + shift).ln_1p() })
        .collect()
}
