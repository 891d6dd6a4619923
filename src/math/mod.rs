//! Dense matrix container used for matrix products.
//!
//! `Array2` is a small row-major container with just enough convenience
//! methods for building, indexing and printing results. It stays
//! dependency-light so the crate is easy to test.
pub mod matrix;

pub use matrix::{Array2, ShapeError};
