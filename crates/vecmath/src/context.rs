//! Scratch space for operations needing temporary vectors.

use crate::{num::Scalar, vector::Vector};

/// Reusable temporary storage for operations like
/// [`distance`](crate::geometry::distance),
/// [`interpolate_linear`](crate::geometry::interpolate_linear) and
/// [`ortho_normalize`](crate::geometry::ortho_normalize).
///
/// The content is overwritten by every operation using it and carries no
/// meaning between calls. A context is borrowed mutably by each operation,
/// so one context cannot be used by several operations at the same time.
#[derive(Clone, Debug)]
pub struct Context<T: Scalar, const N: usize> {
    pub(crate) first: Vector<T, N>,
    pub(crate) second: Vector<T, N>,
}

pub type Context2D = Context<f64, 2>;
pub type Context3D = Context<f64, 3>;
pub type Context4D = Context<f64, 4>;

pub type Context2F = Context<f32, 2>;
pub type Context3F = Context<f32, 3>;
pub type Context4F = Context<f32, 4>;

pub type Context2I = Context<i32, 2>;
pub type Context3I = Context<i32, 3>;
pub type Context4I = Context<i32, 4>;

pub type Context2L = Context<i64, 2>;
pub type Context3L = Context<i64, 3>;
pub type Context4L = Context<i64, 4>;

impl<T: Scalar, const N: usize> Context<T, N> {
    /// Creates a new context.
    pub const fn new() -> Self {
        Self {
            first: Vector::zeros(),
            second: Vector::zeros(),
        }
    }
}

impl<T: Scalar, const N: usize> Default for Context<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
