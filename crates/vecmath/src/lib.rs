//! Fixed-size vectors over floating-point and integer element kinds.

#[macro_use]
mod macros;

pub mod almost_eq;
pub mod arithmetic;
pub mod clamp;
pub mod context;
pub mod geometry;
pub mod num;
pub mod vector;

#[cfg(feature = "benchmark")]
pub mod benchmark;

pub use context::Context;
pub use num::{Float, Scalar};
pub use vector::Vector;
