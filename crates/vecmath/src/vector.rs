//! Vectors.

use crate::num::{Float, Scalar};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::{
    array,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    str::FromStr,
};
use thiserror::Error;

/// A vector with `N` components of element kind `T`.
///
/// Vectors are plain values. Operations either return a new vector, write
/// into a caller-supplied output vector, or modify one of their operands in
/// place, see the [`arithmetic`](crate::arithmetic),
/// [`clamp`](crate::clamp) and [`geometry`](crate::geometry) modules.
///
/// Equality is exact and component-wise. For tolerance-based comparison of
/// floating-point vectors, see [`almost_eq`](crate::almost_eq).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

pub type Vector2D = Vector<f64, 2>;
pub type Vector3D = Vector<f64, 3>;
pub type Vector4D = Vector<f64, 4>;

pub type Vector2F = Vector<f32, 2>;
pub type Vector3F = Vector<f32, 3>;
pub type Vector4F = Vector<f32, 4>;

pub type Vector2I = Vector<i32, 2>;
pub type Vector3I = Vector<i32, 3>;
pub type Vector4I = Vector<i32, 4>;

pub type Vector2L = Vector<i64, 2>;
pub type Vector3L = Vector<i64, 3>;
pub type Vector4L = Vector<i64, 4>;

/// Error returned when parsing a vector from its textual representation
/// fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseVectorError {
    #[error("vector text must be enclosed in square brackets")]
    MissingBrackets,
    #[error("expected vector type `{expected}`, found `{found}`")]
    TypeMismatch { expected: String, found: String },
    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },
    #[error("invalid value `{text}` for component {index}: {reason}")]
    InvalidComponent {
        index: usize,
        text: String,
        reason: String,
    },
}

const AXIS_NAMES: [&str; 4] = ["x", "y", "z", "w"];

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn from_components(components: [T; N]) -> Self {
        Self { components }
    }

    /// Creates a new vector with all zeros.
    ///
    /// Unlike [`Default`], this gives a zero `w`-component for 4-dimensional
    /// floating-point vectors.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_components([T::ZERO; N])
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::from_components([value; N])
    }

    /// The name of the vector type, like `Vector3D` for a 3-dimensional
    /// vector of `f64`.
    pub fn type_name() -> String {
        format!("Vector{N}{}", T::KIND_SUFFIX)
    }

    /// The components of the vector.
    #[inline]
    pub const fn components(&self) -> &[T; N] {
        &self.components
    }

    /// The components of the vector, mutably.
    #[inline]
    pub fn components_mut(&mut self) -> &mut [T; N] {
        &mut self.components
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(T) -> T) -> Self {
        Self::from_components(self.components.map(f))
    }

    /// Returns a vector whose components are the given closure applied to
    /// each pair of corresponding components in this and another vector.
    #[inline]
    pub fn zip_mapped(&self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_components(array::from_fn(|idx| {
            f(self.components[idx], other.components[idx])
        }))
    }

    /// Applies the given closure to each component in place.
    #[inline]
    pub fn map_in_place(&mut self, mut f: impl FnMut(T) -> T) -> &mut Self {
        for component in &mut self.components {
            *component = f(*component);
        }
        self
    }

    /// Replaces each component with the given closure applied to it and the
    /// corresponding component in another vector.
    #[inline]
    pub fn zip_map_in_place(&mut self, other: &Self, mut f: impl FnMut(T, T) -> T) -> &mut Self {
        for (component, &other) in self.components.iter_mut().zip(&other.components) {
            *component = f(*component, other);
        }
        self
    }

    /// Copies the components of a vector of any dimension into this vector.
    ///
    /// The leading components shared by both dimensions are copied. Any
    /// remaining components of this vector are reset to their default
    /// value, which is zero except for the `w`-component of a 4-dimensional
    /// floating-point vector, which becomes one.
    pub fn copy_from<const M: usize>(&mut self, source: &Vector<T, M>) -> &mut Self {
        for (idx, component) in self.components.iter_mut().enumerate() {
            *component = if idx < M {
                source.components[idx]
            } else {
                Self::default_component(idx)
            };
        }
        self
    }

    /// Copies the components of a 2-dimensional vector into this vector.
    /// See [`Self::copy_from`].
    #[inline]
    pub fn copy_from_2d(&mut self, source: &Vector<T, 2>) -> &mut Self {
        self.copy_from(source)
    }

    /// Copies the components of a 3-dimensional vector into this vector.
    /// See [`Self::copy_from`].
    #[inline]
    pub fn copy_from_3d(&mut self, source: &Vector<T, 3>) -> &mut Self {
        self.copy_from(source)
    }

    /// Copies the components of a 4-dimensional vector into this vector.
    /// See [`Self::copy_from`].
    #[inline]
    pub fn copy_from_4d(&mut self, source: &Vector<T, 4>) -> &mut Self {
        self.copy_from(source)
    }

    /// Converts the vector to `M` dimensions, following the same rules as
    /// [`Self::copy_from`].
    pub fn resized<const M: usize>(&self) -> Vector<T, M> {
        let mut resized = Vector::default();
        resized.copy_from(self);
        resized
    }

    /// Reinterprets a slice of vectors as a flat slice of their components.
    pub fn vectors_as_components(vectors: &[Self]) -> &[T]
    where
        T: Pod,
    {
        bytemuck::cast_slice(vectors)
    }

    fn default_component(idx: usize) -> T {
        if N == 4 && idx == 3 {
            T::HOMOGENEOUS_W
        } else {
            T::ZERO
        }
    }
}

impl_named_components!(2, x, x_mut, set_x => 0, y, y_mut, set_y => 1);
impl_named_components!(3, x, x_mut, set_x => 0, y, y_mut, set_y => 1, z, z_mut, set_z => 2);
impl_named_components!(
    4,
    x, x_mut, set_x => 0,
    y, y_mut, set_y => 1,
    z, z_mut, set_z => 2,
    w, w_mut, set_w => 3,
);

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_components(array::from_fn(Self::default_component))
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::from_components(components)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.components
    }
}

impl<T: Scalar, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for &component in &self.components {
            component.hash_component(state);
        }
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Vector{N}{}", T::KIND_SUFFIX)?;
        for component in &self.components {
            write!(f, " {component:?}")?;
        }
        write!(f, "]")
    }
}

impl<T: Scalar, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = Self::type_name();
        let mut s = f.debug_struct(&type_name);
        for (name, component) in AXIS_NAMES.iter().zip(&self.components) {
            s.field(name, component);
        }
        s.finish()
    }
}

impl<T: Scalar, const N: usize> FromStr for Vector<T, N>
where
    <T as FromStr>::Err: fmt::Display,
{
    type Err = ParseVectorError;

    /// Parses a vector from the format produced by its [`Display`](fmt::Display)
    /// implementation, like `[Vector2I 1 2]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or(ParseVectorError::MissingBrackets)?;

        let mut tokens = inner.split_whitespace();

        let expected = Self::type_name();
        let found = tokens.next().unwrap_or_default();
        if found != expected {
            return Err(ParseVectorError::TypeMismatch {
                expected,
                found: found.to_string(),
            });
        }

        let mut components = [T::ZERO; N];
        let mut count = 0;
        for text in tokens {
            if let Some(component) = components.get_mut(count) {
                *component = text
                    .parse::<T>()
                    .map_err(|err| ParseVectorError::InvalidComponent {
                        index: count,
                        text: text.to_string(),
                        reason: err.to_string(),
                    })?;
            }
            count += 1;
        }

        if count != N {
            return Err(ParseVectorError::ComponentCount {
                expected: N,
                found: count,
            });
        }

        Ok(Self::from_components(components))
    }
}

impl_binop!(Add, add, [T: Scalar, const N: usize], Vector<T, N>, Vector<T, N>, Vector<T, N>, |a, b| {
    a.zip_mapped(b, T::plus)
});

impl_binop!(Sub, sub, [T: Scalar, const N: usize], Vector<T, N>, Vector<T, N>, Vector<T, N>, |a, b| {
    a.zip_mapped(b, T::minus)
});

impl_binop!(Mul, mul, [T: Scalar, const N: usize], Vector<T, N>, T, Vector<T, N>, |a, b| {
    a.mapped(|component| component.times(*b))
});

impl_scalar_left_mul!(f32, f64, i32, i64);

impl_binop_assign!(AddAssign, add_assign, [T: Scalar, const N: usize], Vector<T, N>, Vector<T, N>, |a, b| {
    a.zip_map_in_place(b, T::plus);
});

impl_binop_assign!(SubAssign, sub_assign, [T: Scalar, const N: usize], Vector<T, N>, Vector<T, N>, |a, b| {
    a.zip_map_in_place(b, T::minus);
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, const N: usize], Vector<T, N>, T, |a, b| {
    a.map_in_place(|component| component.times(*b));
});

impl_unary_op!(Neg, neg, [T: Scalar, const N: usize], Vector<T, N>, Vector<T, N>, |val| {
    val.mapped(T::negated)
});

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl<T: Float, const N: usize> AbsDiffEq for Vector<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Float, const N: usize> RelativeEq for Vector<T, N> {
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

// SAFETY: `Vector` is a transparent wrapper around `[T; N]`, which is
// zeroable and plain old data whenever `T` is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

#[cfg(feature = "arbitrary")]
impl<'a, T: Scalar + arbitrary::Arbitrary<'a>, const N: usize> arbitrary::Arbitrary<'a>
    for Vector<T, N>
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::from_components(u.arbitrary()?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[T; N] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Vector;
    use crate::num::Scalar;
    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{self, SeqAccess, Visitor},
        ser::SerializeTuple,
    };
    use std::{fmt, marker::PhantomData};

    impl<T: Scalar + Serialize, const N: usize> Serialize for Vector<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(N)?;
            for component in self.components() {
                tuple.serialize_element(component)?;
            }
            tuple.end()
        }
    }

    impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, ComponentVisitor(PhantomData))
        }
    }

    struct ComponentVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Visitor<'de> for ComponentVisitor<T, N> {
        type Value = Vector<T, N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of {N} vector components")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut components = [T::ZERO; N];
            for (idx, component) in components.iter_mut().enumerate() {
                *component = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(idx, &self))?;
            }
            Ok(Vector::from_components(components))
        }
    }

}
