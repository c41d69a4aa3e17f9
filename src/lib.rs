//! Numeric Tabular Prep Library
//!
//! A small set of stateless numeric transforms for tabular data
//! preparation, built on Polars.
//!
//! # Overview
//!
//! Three independent operations over one-dimensional `f64` data, plus a
//! table-level wrapper:
//!
//! - **Rounding**: round-half-away-from-zero with a tagged result type
//!   that keeps non-finite inputs out of caller arithmetic
//! - **Imputation**: replace missing (NaN) entries with the mean, median,
//!   or mode of the non-missing entries
//! - **Normalization**: max-min, z-score, or shifted-log rescaling
//! - **Frame imputation**: apply the imputation statistic to every
//!   numeric column of a Polars `DataFrame`
//!
//! Every operation is pure and synchronous: input slices are never
//! mutated, there is no shared state, and calls are safe from any number
//! of threads.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tabular_prep::{
//!     FrameImputer, ImputeMethod, NormalizeMethod, Rounded,
//!     impute, normalize, round_half_away,
//! };
//!
//! assert_eq!(round_half_away(2.5, 0), Rounded::Int(3));
//!
//! let filled = impute(&[1.0, 2.0, f64::NAN], f64::NAN, ImputeMethod::Mean);
//! assert_eq!(filled, vec![1.0, 2.0, 1.5]);
//!
//! let scaled = normalize(&[1.0, 2.0, 3.0], NormalizeMethod::MaxMin);
//! assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
//!
//! // Table-level: fill every numeric column of a DataFrame
//! let imputer = FrameImputer::new(ImputeMethod::Median);
//! let cleaned = imputer.fill_missing(&df)?;
//! ```
//!
//! # Method selection
//!
//! Methods are closed enums, so the enum-taking entry points cannot fail.
//! The string-selected variants ([`impute_named`], [`normalize_named`])
//! and the `FromStr` impls surface unrecognized names as
//! [`PrepError::UnknownMethod`].

pub mod error;
pub mod frame;
pub mod impute;
pub mod normalize;
pub mod round;

// Re-exports for convenient access
pub use error::{PrepError, Result};
pub use frame::FrameImputer;
pub use impute::{ImputeMethod, impute, impute_named};
pub use normalize::{NormalizeMethod, normalize, normalize_named};
pub use round::{Rounded, Sign, round_half_away};
