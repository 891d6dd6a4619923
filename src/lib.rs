//! array-ops: stateless array and matrix manipulation routines.
//!
//! This crate provides a catalogue of pure operations on integer arrays
//! (membership tests, slicing, rearranging, filtering, merging sorted arrays,
//! deduplication) and on integer matrices (validated multiplication). The
//! catalogue is the `ArrayProcessor` trait; two interchangeable
//! implementations live behind it and are built through a small factory.
//!
//! Failures are returned as `ArrayError` values. Every error belongs to one of
//! two kinds: a required input was absent, or an argument was invalid.
pub mod config;
pub mod error;
pub mod math;
pub mod processor;

pub use config::ProcessorKind;
pub use error::{ArrayError, ErrorKind, Result, Side};
pub use math::Array2;
pub use processor::{build_processor, ArrayProcessor, IterProcessor, LoopProcessor, RawMatrix};
