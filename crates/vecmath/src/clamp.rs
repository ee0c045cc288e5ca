//! Clamping of vector components.
//!
//! The scalar variants apply the same bound to every component, while the
//! `_by_vector` variants take each bound from the corresponding component of
//! a bound vector. NaN components compare false against any bound and are
//! left as they are.

use crate::{num::Scalar, vector::Vector};

#[inline]
fn at_least<T: Scalar>(value: T, minimum: T) -> T {
    if value < minimum { minimum } else { value }
}

#[inline]
fn at_most<T: Scalar>(value: T, maximum: T) -> T {
    if value > maximum { maximum } else { value }
}

/// Clamps every component of `v` to `[minimum, maximum]`.
#[inline]
pub fn clamp<T: Scalar, const N: usize>(v: &Vector<T, N>, minimum: T, maximum: T) -> Vector<T, N> {
    v.mapped(|component| at_most(at_least(component, minimum), maximum))
}

/// Clamps every component of `v` to `[minimum, maximum]` into `out`.
#[inline]
pub fn clamp_into<'a, T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    minimum: T,
    maximum: T,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = clamp(v, minimum, maximum);
    out
}

/// Clamps every component of `v` to `[minimum, maximum]` in place.
#[inline]
pub fn clamp_in_place<T: Scalar, const N: usize>(
    v: &mut Vector<T, N>,
    minimum: T,
    maximum: T,
) -> &mut Vector<T, N> {
    v.map_in_place(|component| at_most(at_least(component, minimum), maximum))
}

/// Raises every component of `v` below `minimum` to `minimum`.
#[inline]
pub fn clamp_minimum<T: Scalar, const N: usize>(v: &Vector<T, N>, minimum: T) -> Vector<T, N> {
    v.mapped(|component| at_least(component, minimum))
}

/// Raises every component of `v` below `minimum` to `minimum`, writing the
/// result into `out`.
#[inline]
pub fn clamp_minimum_into<'a, T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    minimum: T,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = clamp_minimum(v, minimum);
    out
}

/// Raises every component of `v` below `minimum` to `minimum` in place.
#[inline]
pub fn clamp_minimum_in_place<T: Scalar, const N: usize>(
    v: &mut Vector<T, N>,
    minimum: T,
) -> &mut Vector<T, N> {
    v.map_in_place(|component| at_least(component, minimum))
}

/// Lowers every component of `v` above `maximum` to `maximum`.
#[inline]
pub fn clamp_maximum<T: Scalar, const N: usize>(v: &Vector<T, N>, maximum: T) -> Vector<T, N> {
    v.mapped(|component| at_most(component, maximum))
}

/// Lowers every component of `v` above `maximum` to `maximum`, writing the
/// result into `out`.
#[inline]
pub fn clamp_maximum_into<'a, T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    maximum: T,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = clamp_maximum(v, maximum);
    out
}

/// Lowers every component of `v` above `maximum` to `maximum` in place.
#[inline]
pub fn clamp_maximum_in_place<T: Scalar, const N: usize>(
    v: &mut Vector<T, N>,
    maximum: T,
) -> &mut Vector<T, N> {
    v.map_in_place(|component| at_most(component, maximum))
}

/// Clamps each component of `v` to the range given by the corresponding
/// components of `minimum` and `maximum`.
#[inline]
pub fn clamp_by_vector<T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    minimum: &Vector<T, N>,
    maximum: &Vector<T, N>,
) -> Vector<T, N> {
    clamp_maximum_by_vector(&clamp_minimum_by_vector(v, minimum), maximum)
}

/// Clamps each component of `v` to the range given by the corresponding
/// components of `minimum` and `maximum`, writing the result into `out`.
#[inline]
pub fn clamp_by_vector_into<'a, T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    minimum: &Vector<T, N>,
    maximum: &Vector<T, N>,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = clamp_by_vector(v, minimum, maximum);
    out
}

/// Clamps each component of `v` to the range given by the corresponding
/// components of `minimum` and `maximum` in place.
#[inline]
pub fn clamp_by_vector_in_place<'a, T: Scalar, const N: usize>(
    v: &'a mut Vector<T, N>,
    minimum: &Vector<T, N>,
    maximum: &Vector<T, N>,
) -> &'a mut Vector<T, N> {
    clamp_maximum_by_vector_in_place(clamp_minimum_by_vector_in_place(v, minimum), maximum)
}

/// Raises each component of `v` to at least the corresponding component of
/// `minimum`.
#[inline]
pub fn clamp_minimum_by_vector<T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    minimum: &Vector<T, N>,
) -> Vector<T, N> {
    v.zip_mapped(minimum, at_least)
}

/// Raises each component of `v` to at least the corresponding component of
/// `minimum`, writing the result into `out`.
#[inline]
pub fn clamp_minimum_by_vector_into<'a, T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    minimum: &Vector<T, N>,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = clamp_minimum_by_vector(v, minimum);
    out
}

/// Raises each component of `v` to at least the corresponding component of
/// `minimum` in place.
#[inline]
pub fn clamp_minimum_by_vector_in_place<'a, T: Scalar, const N: usize>(
    v: &'a mut Vector<T, N>,
    minimum: &Vector<T, N>,
) -> &'a mut Vector<T, N> {
    v.zip_map_in_place(minimum, at_least)
}

/// Lowers each component of `v` to at most the corresponding component of
/// `maximum`.
#[inline]
pub fn clamp_maximum_by_vector<T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    maximum: &Vector<T, N>,
) -> Vector<T, N> {
    v.zip_mapped(maximum, at_most)
}

/// Lowers each component of `v` to at most the corresponding component of
/// `maximum`, writing the result into `out`.
#[inline]
pub fn clamp_maximum_by_vector_into<'a, T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    maximum: &Vector<T, N>,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = clamp_maximum_by_vector(v, maximum);
    out
}

/// Lowers each component of `v` to at most the corresponding component of
/// `maximum` in place.
#[inline]
pub fn clamp_maximum_by_vector_in_place<'a, T: Scalar, const N: usize>(
    v: &'a mut Vector<T, N>,
    maximum: &Vector<T, N>,
) -> &'a mut Vector<T, N> {
    v.zip_map_in_place(maximum, at_most)
}

#[cfg(feature = "fuzzing")]
pub mod fuzzing {
    use super::*;
    use crate::vector::Vector4L;

    pub fn fuzz_test_clamping_vectors((v, bound_a, bound_b): (Vector4L, Vector4L, Vector4L)) {
        let minimum = bound_a.zip_mapped(&bound_b, i64::min);
        let maximum = bound_a.zip_mapped(&bound_b, i64::max);

        let clamped = clamp_by_vector(&v, &minimum, &maximum);
        for idx in 0..4 {
            assert!(
                minimum[idx] <= clamped[idx] && clamped[idx] <= maximum[idx],
                "Component {idx} of {clamped} lies outside [{minimum}, {maximum}]"
            );
            if minimum[idx] <= v[idx] && v[idx] <= maximum[idx] {
                assert_eq!(clamped[idx], v[idx]);
            }
        }

        let mut in_place = v;
        clamp_by_vector_in_place(&mut in_place, &minimum, &maximum);
        assert_eq!(in_place, clamped);
    }
}
