//! Tolerance-based comparison of floating-point vectors.
//!
//! Integer vectors are only compared exactly, through [`PartialEq`].

use crate::{num::Float, vector::Vector};

/// The tolerances used when comparing floating-point values.
///
/// Two values are considered almost equal if they differ by at most
/// `max_abs_diff`, or if their difference relative to the larger of their
/// magnitudes is at most `max_rel_diff`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelativeContext<T> {
    max_abs_diff: T,
    max_rel_diff: T,
}

pub type RelativeContextF = RelativeContext<f32>;
pub type RelativeContextD = RelativeContext<f64>;

impl<T: Float> RelativeContext<T> {
    /// Creates a new context with the given absolute and relative
    /// tolerances.
    pub const fn new(max_abs_diff: T, max_rel_diff: T) -> Self {
        Self {
            max_abs_diff,
            max_rel_diff,
        }
    }

    /// The largest absolute difference for which values are almost equal.
    pub const fn max_abs_diff(&self) -> T {
        self.max_abs_diff
    }

    /// The largest relative difference for which values are almost equal.
    pub const fn max_rel_diff(&self) -> T {
        self.max_rel_diff
    }
}

impl<T: Float> Default for RelativeContext<T> {
    /// Uses the default tolerances of the `approx` crate, which are the
    /// machine epsilon for both the absolute and relative difference.
    fn default() -> Self {
        Self::new(T::default_epsilon(), T::default_max_relative())
    }
}

/// Whether `x` and `y` are equal within the tolerances of the given
/// context.
#[inline]
pub fn almost_equal_scalar<T: Float>(context: &RelativeContext<T>, x: T, y: T) -> bool {
    x.relative_eq(&y, context.max_abs_diff, context.max_rel_diff)
}

/// Whether every component of `a` is almost equal to the corresponding
/// component of `b`.
#[inline]
pub fn almost_equal<T: Float, const N: usize>(
    context: &RelativeContext<T>,
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> bool {
    a.components()
        .iter()
        .zip(b.components())
        .all(|(&x, &y)| almost_equal_scalar(context, x, y))
}
