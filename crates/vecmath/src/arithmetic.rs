//! Elementwise vector arithmetic.
//!
//! Every operation comes in three forms: a pure form returning a new
//! vector, an `_into` form writing the result into a caller-supplied vector
//! and returning a reference to it, and an `_in_place` form overwriting the
//! first operand and returning a reference to it.
//!
//! Scale factors are always given as `f64` and converted to the element
//! kind with [`Scalar::from_factor`], so integer vectors are scaled by the
//! factor truncated toward zero.

use crate::{num::Scalar, vector::Vector};

/// Computes `a + b`.
#[inline]
pub fn add<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
    a.zip_mapped(b, T::plus)
}

/// Computes `a + b` into `out`.
#[inline]
pub fn add_into<'a, T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = add(a, b);
    out
}

/// Computes `a + b`, storing the result in `a`.
#[inline]
pub fn add_in_place<'a, T: Scalar, const N: usize>(
    a: &'a mut Vector<T, N>,
    b: &Vector<T, N>,
) -> &'a mut Vector<T, N> {
    a.zip_map_in_place(b, T::plus)
}

/// Computes `a - b`.
#[inline]
pub fn subtract<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
    a.zip_mapped(b, T::minus)
}

/// Computes `a - b` into `out`.
#[inline]
pub fn subtract_into<'a, T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = subtract(a, b);
    out
}

/// Computes `a - b`, storing the result in `a`.
#[inline]
pub fn subtract_in_place<'a, T: Scalar, const N: usize>(
    a: &'a mut Vector<T, N>,
    b: &Vector<T, N>,
) -> &'a mut Vector<T, N> {
    a.zip_map_in_place(b, T::minus)
}

/// Computes `a + b * factor`.
#[inline]
pub fn add_scaled<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    factor: f64,
) -> Vector<T, N> {
    let factor = T::from_factor(factor);
    a.zip_mapped(b, |a, b| a.plus(b.times(factor)))
}

/// Computes `a + b * factor` into `out`.
#[inline]
pub fn add_scaled_into<'a, T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    factor: f64,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = add_scaled(a, b, factor);
    out
}

/// Computes `a + b * factor`, storing the result in `a`.
#[inline]
pub fn add_scaled_in_place<'a, T: Scalar, const N: usize>(
    a: &'a mut Vector<T, N>,
    b: &Vector<T, N>,
    factor: f64,
) -> &'a mut Vector<T, N> {
    let factor = T::from_factor(factor);
    a.zip_map_in_place(b, |a, b| a.plus(b.times(factor)))
}

/// Computes `v * factor`.
#[inline]
pub fn scale<T: Scalar, const N: usize>(v: &Vector<T, N>, factor: f64) -> Vector<T, N> {
    let factor = T::from_factor(factor);
    v.mapped(|component| component.times(factor))
}

/// Computes `v * factor` into `out`.
#[inline]
pub fn scale_into<'a, T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    factor: f64,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = scale(v, factor);
    out
}

/// Computes `v * factor`, storing the result in `v`.
#[inline]
pub fn scale_in_place<T: Scalar, const N: usize>(
    v: &mut Vector<T, N>,
    factor: f64,
) -> &mut Vector<T, N> {
    let factor = T::from_factor(factor);
    v.map_in_place(|component| component.times(factor))
}

/// Computes the absolute value of each component of `v`.
///
/// For integer vectors the most negative value maps to itself.
#[inline]
pub fn absolute<T: Scalar, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    v.mapped(T::absolute)
}

/// Computes the absolute value of each component of `v` into `out`.
#[inline]
pub fn absolute_into<'a, T: Scalar, const N: usize>(
    v: &Vector<T, N>,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = absolute(v);
    out
}

/// Replaces each component of `v` with its absolute value.
#[inline]
pub fn absolute_in_place<T: Scalar, const N: usize>(v: &mut Vector<T, N>) -> &mut Vector<T, N> {
    v.map_in_place(T::absolute)
}
