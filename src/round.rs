//! Decimal quantization with round-half-to-even semantics.
//!
//! Every coordinate stored in a [`Vector2D`](crate::Vector2D) passes
//! through [`hundredths`], so constructed vectors always carry values
//! quantized to two decimal places. Ties at the rounding boundary go to
//! the even neighbor (banker's rounding), which
//! [`Float::round`](num_traits::Float::round) does not provide on its
//! own.

use num_traits::Float;

/// Rounds to the nearest integer, with ties going to the even neighbor.
///
/// Non-finite inputs propagate unchanged.
///
/// # Example
///
/// ```
/// use centivec::round::ties_even;
///
/// assert_eq!(ties_even(2.5_f64), 2.0);
/// assert_eq!(ties_even(3.5_f64), 4.0);
/// assert_eq!(ties_even(2.6_f64), 3.0);
/// ```
#[inline]
pub fn ties_even<F: Float>(value: F) -> F {
    let floor = value.floor();
    let frac = value - floor;
    let half = F::from(0.5).unwrap();
    if frac == half {
        let two = F::from(2.0).unwrap();
        if floor % two == F::zero() {
            floor
        } else {
            floor + F::one()
        }
    } else {
        // No tie, so round-half-away and round-to-nearest agree.
        value.round()
    }
}

/// Quantizes a value to two decimal places.
///
/// The result is the nearest representable float to the quantized
/// decimal, so exact ties only occur where the scaled value is exactly
/// representable (0.125 scales to 12.5 and rounds down to 0.12).
#[inline]
pub fn hundredths<F: Float>(value: F) -> F {
    let scale = F::from(100.0).unwrap();
    ties_even(value * scale) / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_go_to_even() {
        assert_eq!(ties_even(0.5_f64), 0.0);
        assert_eq!(ties_even(1.5_f64), 2.0);
        assert_eq!(ties_even(2.5_f64), 2.0);
        assert_eq!(ties_even(3.5_f64), 4.0);
        assert_eq!(ties_even(-2.5_f64), -2.0);
        assert_eq!(ties_even(-3.5_f64), -4.0);
    }

    #[test]
    fn test_non_ties_round_to_nearest() {
        assert_eq!(ties_even(2.4_f64), 2.0);
        assert_eq!(ties_even(2.6_f64), 3.0);
        assert_eq!(ties_even(-2.4_f64), -2.0);
        assert_eq!(ties_even(-2.6_f64), -3.0);
    }

    #[test]
    fn test_hundredths_quantizes() {
        assert_eq!(hundredths(1.234_f64), 1.23);
        assert_eq!(hundredths(5.678_f64), 5.68);
        assert_eq!(hundredths(-1.234_f64), -1.23);
        assert_eq!(hundredths(3.0_f64), 3.0);
    }

    #[test]
    fn test_hundredths_ties() {
        // These inputs scale to exact binary halves.
        assert_eq!(hundredths(0.125_f64), 0.12);
        assert_eq!(hundredths(0.375_f64), 0.38);
        assert_eq!(hundredths(0.625_f64), 0.62);
        assert_eq!(hundredths(-0.125_f64), -0.12);
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(hundredths(f64::NAN).is_nan());
        assert_eq!(hundredths(f64::INFINITY), f64::INFINITY);
        assert_eq!(hundredths(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_f32_support() {
        assert_eq!(hundredths(1.234_f32), 1.23);
        assert_eq!(ties_even(2.5_f32), 2.0);
    }
}
