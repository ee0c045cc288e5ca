//! Element kinds for vectors.

use approx::RelativeEq;
use num_traits as nt;
use std::{fmt, hash::Hasher, str::FromStr};

/// An element kind that vectors can be built from.
///
/// Floating-point kinds follow IEEE-754 semantics. Integer kinds use
/// two's-complement wrapping arithmetic, so no operation on them can
/// overflow-panic.
pub trait Scalar: Copy + PartialOrd + fmt::Debug + FromStr + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;
    /// The default value of the fourth component of a 4-dimensional vector.
    /// One for floating-point kinds (homogeneous coordinates) and zero
    /// otherwise.
    const HOMOGENEOUS_W: Self;
    /// The suffix identifying the element kind in vector type names.
    const KIND_SUFFIX: &'static str;

    fn plus(self, other: Self) -> Self;

    fn minus(self, other: Self) -> Self;

    fn times(self, other: Self) -> Self;

    fn negated(self) -> Self;

    fn absolute(self) -> Self;

    /// Converts a scale factor to this element kind. Integer kinds truncate
    /// toward zero and saturate at their bounds, with NaN mapping to zero.
    fn from_factor(factor: f64) -> Self;

    /// Computes the Euclidean norm of the given components.
    ///
    /// Floating-point kinds scale the components by the largest magnitude
    /// among them before squaring, so the result only overflows or
    /// underflows when the norm itself does. For integer kinds the squares
    /// are accumulated exactly in 128-bit unsigned arithmetic, and the
    /// result is the truncated square root, saturated to the largest
    /// representable value.
    fn norm_of(components: &[Self]) -> Self;

    /// Writes `a - b` into `difference` and returns the Euclidean norm of
    /// the exact difference. For integer kinds the written difference
    /// wraps, but the returned norm is computed from the unwrapped
    /// difference like [`Self::norm_of`].
    fn distance_between(a: &[Self], b: &[Self], difference: &mut [Self]) -> Self;

    /// Feeds the component into the given hasher such that components
    /// comparing equal hash equal.
    fn hash_component<H: Hasher>(self, state: &mut H);
}

/// An element kind supporting the operations that only make sense for
/// real numbers, like normalization.
pub trait Float:
    Scalar + nt::Float + approx::AbsDiffEq<Epsilon = Self> + RelativeEq
{
}

macro_rules! impl_float_scalar {
    ($f:ty, $suffix:literal, $write:ident) => {
        impl Scalar for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const HOMOGENEOUS_W: Self = 1.0;
            const KIND_SUFFIX: &'static str = $suffix;

            #[inline]
            fn plus(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn minus(self, other: Self) -> Self {
                self - other
            }

            #[inline]
            fn times(self, other: Self) -> Self {
                self * other
            }

            #[inline]
            fn negated(self) -> Self {
                -self
            }

            #[inline]
            fn absolute(self) -> Self {
                self.abs()
            }

            #[inline]
            fn from_factor(factor: f64) -> Self {
                factor as $f
            }

            fn norm_of(components: &[Self]) -> Self {
                let largest = components
                    .iter()
                    .fold(0.0, |largest: $f, &component| largest.max(component.abs()));

                // Zero, infinite and NaN components need no rescaling
                if largest == 0.0 || !largest.is_finite() {
                    return components
                        .iter()
                        .fold(0.0, |sum: $f, &component| sum + component * component)
                        .sqrt();
                }

                let scaled_sum = components.iter().fold(0.0, |sum: $f, &component| {
                    let scaled = component / largest;
                    sum + scaled * scaled
                });
                largest * scaled_sum.sqrt()
            }

            #[inline]
            fn distance_between(a: &[Self], b: &[Self], difference: &mut [Self]) -> Self {
                for ((difference, &a), &b) in difference.iter_mut().zip(a).zip(b) {
                    *difference = a - b;
                }
                Self::norm_of(difference)
            }

            #[inline]
            fn hash_component<H: Hasher>(self, state: &mut H) {
                // Positive and negative zero compare equal
                let bits = if self == 0.0 { 0 } else { self.to_bits() };
                state.$write(bits);
            }
        }

        impl Float for $f {}
    };
}

macro_rules! impl_integer_scalar {
    ($i:ty, $suffix:literal, $write:ident) => {
        impl Scalar for $i {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const HOMOGENEOUS_W: Self = 0;
            const KIND_SUFFIX: &'static str = $suffix;

            #[inline]
            fn plus(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            #[inline]
            fn minus(self, other: Self) -> Self {
                self.wrapping_sub(other)
            }

            #[inline]
            fn times(self, other: Self) -> Self {
                self.wrapping_mul(other)
            }

            #[inline]
            fn negated(self) -> Self {
                self.wrapping_neg()
            }

            #[inline]
            fn absolute(self) -> Self {
                self.wrapping_abs()
            }

            #[inline]
            fn from_factor(factor: f64) -> Self {
                factor as $i
            }

            fn norm_of(components: &[Self]) -> Self {
                let sum_of_squares = components.iter().fold(0_u128, |sum, &component| {
                    let magnitude = u128::from(component.unsigned_abs());
                    sum.saturating_add(magnitude * magnitude)
                });
                <$i>::try_from(sum_of_squares.isqrt()).unwrap_or(<$i>::MAX)
            }

            fn distance_between(a: &[Self], b: &[Self], difference: &mut [Self]) -> Self {
                let mut sum_of_squares = 0_u128;
                for ((difference, &a), &b) in difference.iter_mut().zip(a).zip(b) {
                    *difference = a.wrapping_sub(b);
                    let magnitude = u128::from(a.abs_diff(b));
                    sum_of_squares = sum_of_squares.saturating_add(magnitude * magnitude);
                }
                <$i>::try_from(sum_of_squares.isqrt()).unwrap_or(<$i>::MAX)
            }

            #[inline]
            fn hash_component<H: Hasher>(self, state: &mut H) {
                state.$write(self);
            }
        }
    };
}

impl_float_scalar!(f32, "F", write_u32);
impl_float_scalar!(f64, "D", write_u64);

impl_integer_scalar!(i32, "I", write_i32);
impl_integer_scalar!(i64, "L", write_i64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::hash::DefaultHasher;

    fn hash_of<T: Scalar>(value: T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_component(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn integer_arithmetic_wraps_around() {
        assert_eq!(i32::MAX.plus(1), i32::MIN);
        assert_eq!(i64::MIN.minus(1), i64::MAX);
        assert_eq!(i32::MAX.times(2), -2);
        assert_eq!(i32::MIN.negated(), i32::MIN);
        assert_eq!(i32::MIN.absolute(), i32::MIN);
    }

    #[test]
    fn integer_scale_factors_truncate_toward_zero() {
        assert_eq!(i32::from_factor(2.7), 2);
        assert_eq!(i32::from_factor(-2.7), -2);
        assert_eq!(i64::from_factor(0.999), 0);
        assert_eq!(i32::from_factor(f64::NAN), 0);
        assert_eq!(i32::from_factor(1e20), i32::MAX);
    }

    #[test]
    fn integer_norm_is_truncated_square_root() {
        assert_eq!(i32::norm_of(&[3, 4]), 5);
        assert_eq!(i32::norm_of(&[1, 1]), 1);
        assert_eq!(i64::norm_of(&[2, 2, 2, 2]), 4);
        assert_eq!(i32::norm_of(&[-3, -4]), 5);
    }

    #[test]
    fn integer_norm_does_not_overflow() {
        assert_eq!(i64::norm_of(&[i64::from(i32::MIN); 2]), 3037000499);
        assert_eq!(i32::norm_of(&[i32::MIN, i32::MIN]), i32::MAX);
        assert_eq!(i64::norm_of(&[i64::MIN; 4]), i64::MAX);
    }

    #[test]
    fn float_norm_works() {
        assert_eq!(f64::norm_of(&[3.0, 4.0]), 5.0);
        assert_eq!(f32::norm_of(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn float_norm_of_huge_and_tiny_components_is_finite_and_nonzero() {
        assert_eq!(f64::norm_of(&[1e200, 0.0]), 1e200);
        assert_eq!(f64::norm_of(&[1e-200, 0.0]), 1e-200);
        assert_eq!(f32::norm_of(&[1e20, 0.0, 0.0]), 1e20);
        assert_abs_diff_eq!(
            f64::norm_of(&[3e200, 4e200]),
            5e200,
            epsilon = 1e188
        );
        assert_abs_diff_eq!(f32::norm_of(&[3e-30, 4e-30]), 5e-30, epsilon = 1e-35);
    }

    #[test]
    fn float_norm_propagates_infinity_and_nan() {
        assert_eq!(f64::norm_of(&[f64::INFINITY, 1.0]), f64::INFINITY);
        assert!(f64::norm_of(&[f64::NAN, 1.0]).is_nan());
        assert!(f32::norm_of(&[1.0, f32::NAN]).is_nan());
    }

    #[test]
    fn integer_distance_does_not_wrap() {
        let mut difference = [0; 2];
        assert_eq!(
            i32::distance_between(&[1_000_000_000, 0], &[-1_000_000_000, 0], &mut difference),
            2_000_000_000
        );
        assert_eq!(difference, [1_000_000_000_i32.wrapping_mul(2), 0]);
        assert_eq!(
            i32::distance_between(&[i32::MAX, 0], &[i32::MIN, 0], &mut difference),
            i32::MAX
        );

        let mut difference = [0; 3];
        assert_eq!(
            i64::distance_between(&[i64::MAX, 0, 3], &[i64::MAX, 4, 0], &mut difference),
            5
        );
    }

    #[test]
    fn positive_and_negative_zero_hash_equal() {
        assert_eq!(hash_of(0.0_f64), hash_of(-0.0_f64));
        assert_eq!(hash_of(0.0_f32), hash_of(-0.0_f32));
        assert_ne!(hash_of(1.0_f64), hash_of(2.0_f64));
    }

    #[test]
    fn homogeneous_w_is_one_only_for_floats() {
        assert_eq!(f32::HOMOGENEOUS_W, 1.0);
        assert_eq!(f64::HOMOGENEOUS_W, 1.0);
        assert_eq!(i32::HOMOGENEOUS_W, 0);
        assert_eq!(i64::HOMOGENEOUS_W, 0);
    }
}
