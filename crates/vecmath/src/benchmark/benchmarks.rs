pub mod arithmetic;
pub mod geometry;
