//! Benchmarking support for the vector library.

#[macro_use]
mod macros;

pub mod benchmark;

#[doc(hidden)]
pub use log;
#[doc(hidden)]
pub use pastey;
