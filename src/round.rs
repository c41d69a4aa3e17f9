//! Round-half-away-from-zero rounding.
//!
//! Standard `f64::round` in Rust already rounds halves away from zero, but
//! this module keeps the scaled add-then-truncate formulation so the
//! decimal-place behavior is explicit, and wraps the result in a tagged
//! type so non-finite inputs cannot leak into caller arithmetic.

use std::fmt;

/// Sign of an infinite rounding result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// Result of rounding a scalar.
///
/// `Int` is produced when rounding to zero decimal places, `Float`
/// otherwise. Infinite inputs are carried as `Infinite` rather than a
/// numeric value so callers must handle them explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rounded {
    Int(i64),
    Float(f64),
    Infinite(Sign),
}

impl Rounded {
    /// The finite numeric value, if there is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Infinite(_) => None,
        }
    }

    /// Whether the input was positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite(_))
    }
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::Infinite(Sign::Positive) => write!(f, "∞"),
            Self::Infinite(Sign::Negative) => write!(f, "-∞"),
        }
    }
}

/// Round a value to `decimals` places, halves away from zero.
///
/// The magnitude is scaled by `10^decimals`, 0.5 is added (non-negative)
/// or subtracted (negative) before truncation toward zero, then scaled
/// back. With `decimals == 0` the result is [`Rounded::Int`], otherwise
/// [`Rounded::Float`].
///
/// NaN input is substituted with `Rounded::Int(0)`; callers must not rely
/// on NaN propagating through. Infinite input becomes
/// [`Rounded::Infinite`]. Every input maps to a defined output.
pub fn round_half_away(value: f64, decimals: u32) -> Rounded {
    if value.is_nan() {
        return Rounded::Int(0);
    }
    if value.is_infinite() {
        let sign = if value > 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        };
        return Rounded::Infinite(sign);
    }

    let factor = 10f64.powi(decimals as i32);
    let adjusted = value * factor;
    let rounded = if adjusted >= 0.0 {
        (adjusted + 0.5).floor()
    } else {
        (adjusted - 0.5).ceil()
    };

    if decimals == 0 {
        Rounded::Int(rounded as i64)
    } else {
        Rounded::Float(rounded / factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // round_half_away() integer rounding tests
    // ========================================================================

    #[test]
    fn test_round_half_up_positive() {
        assert_eq!(round_half_away(2.5, 0), Rounded::Int(3));
        assert_eq!(round_half_away(3.5, 0), Rounded::Int(4));
    }

    #[test]
    fn test_round_half_away_negative() {
        // Not banker's rounding: -2.5 goes to -3, not -2
        assert_eq!(round_half_away(-2.5, 0), Rounded::Int(-3));
        assert_eq!(round_half_away(-3.5, 0), Rounded::Int(-4));
    }

    #[test]
    fn test_round_below_half() {
        assert_eq!(round_half_away(2.4, 0), Rounded::Int(2));
        assert_eq!(round_half_away(-2.4, 0), Rounded::Int(-2));
    }

    #[test]
    fn test_round_zero() {
        assert_eq!(round_half_away(0.0, 0), Rounded::Int(0));
        assert_eq!(round_half_away(-0.0, 0), Rounded::Int(0));
    }

    #[test]
    fn test_round_exact_integer() {
        assert_eq!(round_half_away(7.0, 0), Rounded::Int(7));
        assert_eq!(round_half_away(-7.0, 0), Rounded::Int(-7));
    }

    // ========================================================================
    // round_half_away() decimal place tests
    // ========================================================================

    #[test]
    fn test_round_with_decimals_is_float() {
        // 0.125 is exact in binary, so the half case is genuine
        assert_eq!(round_half_away(0.125, 2), Rounded::Float(0.13));
        assert_eq!(round_half_away(-0.125, 2), Rounded::Float(-0.13));
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_half_away(2.44, 1), Rounded::Float(2.4));
        assert_eq!(round_half_away(2.46, 1), Rounded::Float(2.5));
    }

    // ========================================================================
    // Non-finite input tests
    // ========================================================================

    #[test]
    fn test_round_nan_substitutes_zero() {
        assert_eq!(round_half_away(f64::NAN, 0), Rounded::Int(0));
        assert_eq!(round_half_away(f64::NAN, 3), Rounded::Int(0));
    }

    #[test]
    fn test_round_infinity() {
        assert_eq!(
            round_half_away(f64::INFINITY, 0),
            Rounded::Infinite(Sign::Positive)
        );
        assert_eq!(
            round_half_away(f64::NEG_INFINITY, 0),
            Rounded::Infinite(Sign::Negative)
        );
    }

    #[test]
    fn test_infinite_display_sentinel() {
        assert_eq!(round_half_away(f64::INFINITY, 0).to_string(), "∞");
        assert_eq!(round_half_away(f64::NEG_INFINITY, 0).to_string(), "-∞");
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(round_half_away(2.5, 0).as_f64(), Some(3.0));
        assert_eq!(round_half_away(f64::INFINITY, 0).as_f64(), None);
    }
}
