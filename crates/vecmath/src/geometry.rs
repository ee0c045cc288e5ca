//! Geometric vector operations.

use crate::{
    arithmetic::{add_into, scale_in_place, subtract_in_place, subtract_into},
    context::Context,
    num::{Float, Scalar},
    vector::Vector,
};

/// Computes the dot product of `a` and `b`, accumulated in the element
/// kind of the vectors.
#[inline]
pub fn dot_product<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    a.components()
        .iter()
        .zip(b.components())
        .fold(T::ZERO, |sum, (&a, &b)| sum.plus(a.times(b)))
}

/// Computes the squared magnitude (length) of `v`.
#[inline]
pub fn magnitude_squared<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    dot_product(v, v)
}

/// Computes the magnitude (length) of `v`.
///
/// For integer vectors this is the square root of the squared magnitude
/// truncated toward zero. It is computed without intermediate overflow and
/// saturates at the largest value of the element kind.
#[inline]
pub fn magnitude<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    T::norm_of(v.components())
}

/// Computes the distance between `a` and `b`, which is the magnitude of
/// `a - b`. The difference is stored in the given context.
///
/// For integer vectors the distance is computed from the exact difference,
/// even when `a - b` itself wraps around.
pub fn distance<T: Scalar, const N: usize>(
    context: &mut Context<T, N>,
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> T {
    T::distance_between(
        a.components(),
        b.components(),
        context.first.components_mut(),
    )
}

/// Linearly interpolates between `a` and `b`, computing
/// `a + (b - a) * alpha`.
///
/// An `alpha` of zero gives `a` and an `alpha` of one gives `b`. As with
/// [`scale`](crate::arithmetic::scale), integer vectors use `alpha`
/// truncated toward zero.
pub fn interpolate_linear<T: Scalar, const N: usize>(
    context: &mut Context<T, N>,
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    alpha: f64,
) -> Vector<T, N> {
    let mut out = Vector::zeros();
    interpolate_linear_into(context, a, b, alpha, &mut out);
    out
}

/// Linearly interpolates between `a` and `b` into `out`. See
/// [`interpolate_linear`].
pub fn interpolate_linear_into<'a, T: Scalar, const N: usize>(
    context: &mut Context<T, N>,
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    alpha: f64,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    subtract_into(b, a, &mut context.first);
    scale_in_place(&mut context.first, alpha);
    add_into(a, &context.first, out)
}

/// Computes the unit vector pointing in the direction of `v`. The zero
/// vector normalizes to itself.
#[inline]
pub fn normalize<T: Float, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    let norm = magnitude(v);
    if norm == T::ZERO {
        Vector::zeros()
    } else if norm.is_infinite() && v.components().iter().all(|component| component.is_finite()) {
        // The norm overflowed even though every component is finite
        let largest = v
            .components()
            .iter()
            .fold(T::ZERO, |largest, &component| largest.max(component.abs()));
        normalize(&v.mapped(|component| component / largest))
    } else {
        v.mapped(|component| component / norm)
    }
}

/// Normalizes `v` into `out`. See [`normalize`].
#[inline]
pub fn normalize_into<'a, T: Float, const N: usize>(
    v: &Vector<T, N>,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = normalize(v);
    out
}

/// Normalizes `v` in place. See [`normalize`].
#[inline]
pub fn normalize_in_place<T: Float, const N: usize>(v: &mut Vector<T, N>) -> &mut Vector<T, N> {
    *v = normalize(v);
    v
}

/// Computes the cross product `a × b`.
#[inline]
pub fn cross_product<T: Float>(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Vector<T, 3> {
    Vector::from_components([
        a.y() * b.z() - a.z() * b.y(),
        a.z() * b.x() - a.x() * b.z(),
        a.x() * b.y() - a.y() * b.x(),
    ])
}

/// Computes the cross product `a × b` into `out`.
#[inline]
pub fn cross_product_into<'a, T: Float>(
    a: &Vector<T, 3>,
    b: &Vector<T, 3>,
    out: &'a mut Vector<T, 3>,
) -> &'a mut Vector<T, 3> {
    *out = cross_product(a, b);
    out
}

/// Computes the cross product `a × b`, storing the result in `a`.
#[inline]
pub fn cross_product_in_place<'a, T: Float>(
    a: &'a mut Vector<T, 3>,
    b: &Vector<T, 3>,
) -> &'a mut Vector<T, 3> {
    *a = cross_product(a, b);
    a
}

/// Computes the projection of `a` onto `b`. Projecting onto the zero
/// vector gives the zero vector.
pub fn projection<T: Float, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
    let b_squared = magnitude_squared(b);
    if b_squared == T::ZERO {
        return Vector::zeros();
    }
    let factor = dot_product(a, b) / b_squared;
    b.mapped(|component| component * factor)
}

/// Computes the projection of `a` onto `b` into `out`. See [`projection`].
pub fn projection_into<'a, T: Float, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    out: &'a mut Vector<T, N>,
) -> &'a mut Vector<T, N> {
    *out = projection(a, b);
    out
}

/// Computes the angle in radians between `a` and `b`.
///
/// The inputs do not need to be normalized. If either of them is the zero
/// vector the angle is a right angle.
pub fn angle<T: Float, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    let cosine = dot_product(&normalize(a), &normalize(b));
    // Rounding can push the cosine of (anti)parallel vectors out of range
    cosine.max(-T::ONE).min(T::ONE).acos()
}

/// Orthonormalizes `v0` and `v1` with the Gram-Schmidt process, returning
/// the orthonormalized pair.
///
/// `v0` keeps its direction and is only normalized. `v1` has its component
/// along `v0` removed before being normalized.
pub fn ortho_normalize<T: Float, const N: usize>(
    context: &mut Context<T, N>,
    v0: &Vector<T, N>,
    v1: &Vector<T, N>,
) -> (Vector<T, N>, Vector<T, N>) {
    let mut v0_out = Vector::zeros();
    let mut v1_out = Vector::zeros();
    ortho_normalize_into(context, v0, &mut v0_out, v1, &mut v1_out);
    (v0_out, v1_out)
}

/// Orthonormalizes `v0` and `v1` into `v0_out` and `v1_out`. See
/// [`ortho_normalize`].
pub fn ortho_normalize_into<T: Float, const N: usize>(
    context: &mut Context<T, N>,
    v0: &Vector<T, N>,
    v0_out: &mut Vector<T, N>,
    v1: &Vector<T, N>,
    v1_out: &mut Vector<T, N>,
) {
    normalize_into(v0, v0_out);
    let along_v0 = dot_product(v1, v0_out);
    context.first = v0_out.mapped(|component| component * along_v0);
    subtract_into(v1, &context.first, &mut context.second);
    normalize_into(&context.second, v1_out);
}

/// Orthonormalizes `v0` and `v1` in place. See [`ortho_normalize`].
pub fn ortho_normalize_in_place<T: Float, const N: usize>(
    context: &mut Context<T, N>,
    v0: &mut Vector<T, N>,
    v1: &mut Vector<T, N>,
) {
    normalize_in_place(v0);
    let along_v0 = dot_product(v1, v0);
    context.first = v0.mapped(|component| component * along_v0);
    normalize_in_place(subtract_in_place(v1, &context.first));
}

#[cfg(feature = "fuzzing")]
pub mod fuzzing {
    use super::*;
    use crate::{context::Context3D, vector::Vector3D};
    use approx::abs_diff_eq;
    use arbitrary::{Arbitrary, Result, Unstructured};

    /// A 3D vector with finite components in `[-1e3, 1e3]`.
    #[derive(Clone, Debug)]
    pub struct ArbitraryVector3D(Vector3D);

    impl Arbitrary<'_> for ArbitraryVector3D {
        fn arbitrary(u: &mut Unstructured<'_>) -> Result<Self> {
            let x = 1e3 * (2.0 * arbitrary_norm_f64(u)? - 1.0);
            let y = 1e3 * (2.0 * arbitrary_norm_f64(u)? - 1.0);
            let z = 1e3 * (2.0 * arbitrary_norm_f64(u)? - 1.0);
            Ok(Self(Vector3D::new(x, y, z)))
        }

        fn size_hint(_depth: usize) -> (usize, Option<usize>) {
            let size = 3 * std::mem::size_of::<u32>();
            (size, Some(size))
        }
    }

    pub fn fuzz_test_normalizing_vector(v: ArbitraryVector3D) {
        let normalized = normalize(&v.0);
        if magnitude(&v.0) == 0.0 {
            assert_eq!(normalized, Vector3D::zeros());
        } else {
            assert!(
                abs_diff_eq!(magnitude(&normalized), 1.0, epsilon = 1e-9),
                "Normalized vector {normalized} does not have unit length"
            );
        }
    }

    pub fn fuzz_test_ortho_normalizing_vectors((v0, v1): (ArbitraryVector3D, ArbitraryVector3D)) {
        let (v0, v1) = (v0.0, v1.0);
        let mut context = Context3D::new();
        let (u0, u1) = ortho_normalize(&mut context, &v0, &v1);

        let v0_magnitude = magnitude(&v0);
        if v0_magnitude == 0.0 {
            assert_eq!(u0, Vector3D::zeros());
            return;
        }
        assert!(abs_diff_eq!(magnitude(&u0), 1.0, epsilon = 1e-9));

        // Nearly parallel inputs leave too little of `v1` to orthogonalize
        let v1_magnitude = magnitude(&v1);
        if magnitude(&cross_product(&v0, &v1)) <= 1e-6 * v0_magnitude * v1_magnitude {
            return;
        }
        assert!(
            abs_diff_eq!(magnitude(&u1), 1.0, epsilon = 1e-6),
            "Orthonormalized vector {u1} does not have unit length"
        );
        assert!(
            abs_diff_eq!(dot_product(&u0, &u1), 0.0, epsilon = 1e-6),
            "Orthonormalized vectors {u0} and {u1} are not orthogonal"
        );
    }

    fn arbitrary_norm_f64(u: &mut Unstructured<'_>) -> Result<f64> {
        Ok(f64::from(u.arbitrary::<u32>()?) / f64::from(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        context::{Context2D, Context2I, Context2L, Context3D, Context3I, Context4F},
        vector::{
            Vector2D, Vector2I, Vector2L, Vector3D, Vector3F, Vector3I, Vector4D, Vector4F, Vector4L,
        },
    };
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;
    use std::f64::consts;

    const EPSILON: f64 = 1e-9;

    prop_compose! {
        fn vector3d_strategy(max_coord: f64)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
        ) -> Vector3D {
            Vector3D::new(x, y, z)
        }
    }

    #[test]
    fn dot_product_and_magnitude_squared_of_vector2d_work() {
        let v0 = Vector2D::new(10.0, 10.0);
        let v1 = Vector2D::new(10.0, 10.0);
        assert_eq!(dot_product(&v0, &v1), 200.0);
        assert_eq!(magnitude_squared(&v0), 200.0);
    }

    #[test]
    fn integer_dot_product_wraps_around() {
        let v = Vector2I::new(i32::MAX, 1);
        assert_eq!(dot_product(&v, &Vector2I::new(2, 0)), -2);
    }

    #[test]
    fn computing_magnitude_works() {
        assert_eq!(magnitude(&Vector3D::new(1.0, 2.0, 2.0)), 3.0);
        assert_eq!(magnitude(&Vector4L::new(1, 2, 2, 0)), 3);
        assert_eq!(magnitude(&Vector2I::new(2, 2)), 2);
    }

    #[test]
    fn normalizing_vector_gives_unit_vector() {
        let v = Vector3F::new(3.0, 4.0, 0.0);
        let normalized = normalize(&v);
        assert_abs_diff_eq!(magnitude(&normalized), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(normalized, Vector3F::new(0.6, 0.8, 0.0), epsilon = 1e-6);

        let mut out = Vector3F::zeros();
        normalize_into(&v, &mut out);
        assert_eq!(out, normalized);

        let mut w = v;
        normalize_in_place(&mut w);
        assert_eq!(w, normalized);
    }

    #[test]
    fn normalizing_huge_and_tiny_vectors_gives_unit_vector() {
        assert_eq!(normalize(&Vector2D::new(1e200, 0.0)), Vector2D::new(1.0, 0.0));
        assert_eq!(normalize(&Vector2D::new(0.0, -1e-200)), Vector2D::new(0.0, -1.0));
        assert_eq!(
            normalize(&Vector3F::new(1e20, 0.0, 0.0)),
            Vector3F::new(1.0, 0.0, 0.0)
        );

        let normalized = normalize(&Vector3D::new(1e-300, 2e-300, -2e-300));
        assert_abs_diff_eq!(magnitude(&normalized), 1.0, epsilon = 1e-12);

        let normalized = normalize(&Vector2D::new(f64::MAX, f64::MAX));
        assert_abs_diff_eq!(
            normalized,
            Vector2D::new(consts::FRAC_1_SQRT_2, consts::FRAC_1_SQRT_2),
            epsilon = 1e-12
        );
        let normalized = normalize(&Vector4F::new(f32::MAX, -f32::MAX, f32::MAX, 0.0));
        assert_abs_diff_eq!(magnitude(&normalized), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn angle_between_huge_vectors_works() {
        let a = Vector2D::new(1e200, 0.0);
        assert_abs_diff_eq!(angle(&a, &Vector2D::new(0.0, 1e200)), consts::FRAC_PI_2);
        assert_abs_diff_eq!(angle(&a, &Vector2D::new(3e200, 0.0)), 0.0);
        assert_abs_diff_eq!(
            angle(&Vector3F::new(1e20, 1e20, 0.0), &Vector3F::new(2e20, 2e20, 0.0)),
            0.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn normalizing_zero_vector_gives_zero_vector() {
        assert_eq!(normalize(&Vector4D::zeros()), Vector4D::zeros());

        let mut v = Vector3F::zeros();
        normalize_in_place(&mut v);
        assert_eq!(v, Vector3F::zeros());
    }

    #[test]
    fn computing_distance_works() {
        let mut context = Context3I::new();
        let a = Vector3I::new(1, 2, 3);
        let b = Vector3I::new(4, 6, 3);
        assert_eq!(distance(&mut context, &a, &b), 5);
        assert_eq!(distance(&mut context, &b, &a), 5);
        assert_eq!(distance(&mut context, &a, &a), 0);
    }

    #[test]
    fn integer_distance_uses_exact_difference() {
        let mut context = Context2I::new();
        let a = Vector2I::new(1_000_000_000, 0);
        let b = Vector2I::new(-1_000_000_000, 0);
        assert_eq!(distance(&mut context, &a, &b), 2_000_000_000);
        assert_eq!(
            distance(
                &mut context,
                &Vector2I::new(i32::MAX, 0),
                &Vector2I::new(i32::MIN, 0)
            ),
            i32::MAX
        );

        let mut context = Context2L::new();
        assert_eq!(
            distance(
                &mut context,
                &Vector2L::new(i64::MIN, 3),
                &Vector2L::new(i64::MIN + 4, 0)
            ),
            5
        );
    }

    #[test]
    fn float_distance_between_huge_vectors_is_finite() {
        let mut context = Context2D::new();
        let a = Vector2D::new(3e200, 0.0);
        let b = Vector2D::new(0.0, -4e200);
        assert_abs_diff_eq!(distance(&mut context, &a, &b), 5e200, epsilon = 1e188);
    }

    #[test]
    fn interpolating_linearly_works() {
        let mut context = Context4F::new();
        let a = Vector4F::new(0.0, 2.0, 4.0, 1.0);
        let b = Vector4F::new(10.0, 4.0, 0.0, 1.0);

        assert_eq!(interpolate_linear(&mut context, &a, &b, 0.0), a);
        assert_eq!(interpolate_linear(&mut context, &a, &b, 1.0), b);
        assert_eq!(
            interpolate_linear(&mut context, &a, &b, 0.5),
            Vector4F::new(5.0, 3.0, 2.0, 1.0)
        );

        let mut out = Vector4F::zeros();
        interpolate_linear_into(&mut context, &a, &b, 0.25, &mut out);
        assert_eq!(out, Vector4F::new(2.5, 2.5, 3.0, 1.0));
    }

    #[test]
    fn interpolating_integer_vectors_truncates_alpha() {
        let mut context = Context3I::new();
        let a = Vector3I::new(0, 0, 0);
        let b = Vector3I::new(10, 20, 30);
        assert_eq!(interpolate_linear(&mut context, &a, &b, 0.9), a);
        assert_eq!(interpolate_linear(&mut context, &a, &b, 1.0), b);
    }

    #[test]
    fn cross_product_works() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        let y = Vector3D::new(0.0, 1.0, 0.0);
        assert_eq!(cross_product(&x, &y), Vector3D::new(0.0, 0.0, 1.0));
        assert_eq!(cross_product(&y, &x), Vector3D::new(0.0, 0.0, -1.0));

        let mut out = Vector3D::zeros();
        cross_product_into(&x, &y, &mut out);
        assert_eq!(out, Vector3D::new(0.0, 0.0, 1.0));

        let mut w = x;
        cross_product_in_place(&mut w, &y);
        assert_eq!(w, Vector3D::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn cross_product_of_parallel_vectors_is_zero() {
        let a = Vector3F::new(1.0, 2.0, 3.0);
        let b = Vector3F::new(2.0, 4.0, 6.0);
        assert_abs_diff_eq!(cross_product(&a, &b), Vector3F::zeros(), epsilon = 1e-6);
    }

    #[test]
    fn projecting_onto_perpendicular_vector_gives_zero() {
        let a = Vector2D::new(0.0, 3.0);
        let b = Vector2D::new(5.0, 0.0);
        assert_eq!(magnitude(&projection(&a, &b)), 0.0);
    }

    #[test]
    fn projecting_vector_works() {
        let a = Vector3D::new(2.0, 3.0, 4.0);
        let b = Vector3D::new(0.0, 2.0, 0.0);
        assert_eq!(projection(&a, &b), Vector3D::new(0.0, 3.0, 0.0));

        let mut out = Vector3D::zeros();
        projection_into(&a, &Vector3D::zeros(), &mut out);
        assert_eq!(out, Vector3D::zeros());
    }

    #[test]
    fn computing_angle_works() {
        let x = Vector2D::new(2.0, 0.0);
        let y = Vector2D::new(0.0, 3.0);
        assert_abs_diff_eq!(angle(&x, &y), consts::FRAC_PI_2, epsilon = EPSILON);
        assert_abs_diff_eq!(angle(&x, &x), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(angle(&x, &(-x)), consts::PI, epsilon = EPSILON);
        assert_abs_diff_eq!(
            angle(&x, &Vector2D::new(1.0, 1.0)),
            consts::FRAC_PI_4,
            epsilon = EPSILON
        );
    }

    #[test]
    fn angle_with_zero_vector_is_right_angle() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(
            angle(&x, &Vector3D::zeros()),
            consts::FRAC_PI_2,
            epsilon = EPSILON
        );
    }

    #[test]
    fn ortho_normalizing_vector2d_works() {
        let mut context = Context2D::new();
        let v0 = Vector2D::new(0.0, 1.0);
        let v1 = Vector2D::new(0.5, 0.5);

        let (v0_out, v1_out) = ortho_normalize(&mut context, &v0, &v1);
        assert_abs_diff_eq!(v0_out, Vector2D::new(0.0, 1.0), epsilon = EPSILON);
        assert_abs_diff_eq!(v1_out, Vector2D::new(1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn ortho_normalizing_in_place_matches_pure_form() {
        let mut context = Context3D::new();
        let v0 = Vector3D::new(1.0, 2.0, 3.0);
        let v1 = Vector3D::new(-2.0, 0.5, 4.0);
        let (v0_out, v1_out) = ortho_normalize(&mut context, &v0, &v1);

        let mut w0 = v0;
        let mut w1 = v1;
        ortho_normalize_in_place(&mut context, &mut w0, &mut w1);
        assert_abs_diff_eq!(w0, v0_out, epsilon = EPSILON);
        assert_abs_diff_eq!(w1, v1_out, epsilon = EPSILON);

        assert_abs_diff_eq!(dot_product(&v0_out, &v1_out), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(magnitude(&v0_out), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(magnitude(&v1_out), 1.0, epsilon = EPSILON);
    }

    proptest! {
        #[test]
        fn normalized_vectors_have_unit_magnitude(v in vector3d_strategy(1e3)) {
            prop_assume!(magnitude(&v) > 1e-6);
            prop_assert!(abs_diff_eq!(magnitude(&normalize(&v)), 1.0, epsilon = EPSILON));
        }
    }

    proptest! {
        #[test]
        fn cross_product_of_unit_vectors_is_perpendicular_to_both(
            a in vector3d_strategy(1e3),
            b in vector3d_strategy(1e3),
        ) {
            let a = normalize(&a);
            let b = normalize(&b);
            let cross = cross_product(&a, &b);
            prop_assert!(abs_diff_eq!(dot_product(&cross, &a), 0.0, epsilon = EPSILON));
            prop_assert!(abs_diff_eq!(dot_product(&cross, &b), 0.0, epsilon = EPSILON));
        }
    }

    proptest! {
        #[test]
        fn distance_is_symmetric_and_non_negative(
            a in vector3d_strategy(1e3),
            b in vector3d_strategy(1e3),
        ) {
            let mut context = Context3D::new();
            let ab = distance(&mut context, &a, &b);
            let ba = distance(&mut context, &b, &a);
            prop_assert_eq!(ab, ba);
            prop_assert!(ab >= 0.0);
            prop_assert_eq!(distance(&mut context, &a, &a), 0.0);
        }
    }
}
