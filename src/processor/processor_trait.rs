use crate::error::Result;
use crate::math::Array2;
use crate::processor::validation::{self, RawMatrix};

/// The catalogue of array and matrix operations.
///
/// Every operation is pure: inputs are borrowed and never modified, and
/// producing operations return freshly allocated values. Implementations
/// differ only in how they compute the result, so any two of them must agree
/// on every input (up to the ordering of `distinct`).
pub trait ArrayProcessor {
    /// True if no element is divisible by 10.
    fn none_match(&self, input: &[i32]) -> bool;

    /// True if at least one element satisfies `predicate`.
    fn some_match(&self, input: &[i32], predicate: &dyn Fn(i32) -> bool) -> bool;

    /// Transform every string with `function` and check each result against `predicate`.
    fn all_match(
        &self,
        input: &[&str],
        function: &dyn Fn(&str) -> i32,
        predicate: &dyn Fn(i32) -> bool,
    ) -> bool;

    /// Copy `input[start_inclusive..end_exclusive]` into a new vector.
    ///
    /// Fails when `start_inclusive < 0`, `end_exclusive >= input.len()` or
    /// `start_inclusive >= end_exclusive`.
    fn copy_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        end_exclusive: isize,
    ) -> Result<Vec<i32>>;

    /// Double even-indexed elements and negate odd-indexed ones. Arithmetic wraps.
    fn replace(&self, input: &[i32]) -> Vec<i32>;

    /// Second largest distinct value; fails if there are fewer than two.
    fn find_second_max(&self, input: &[i32]) -> Result<i32>;

    /// Negative values in reverse order, followed by the non-negative values
    /// in reverse order.
    fn rearrange(&self, input: &[i32]) -> Vec<i32>;

    /// Drop every value smaller than `input.len() - 10`.
    fn filter(&self, input: &[i32]) -> Vec<i32>;

    /// Insert `values` in front of `input[start_inclusive]`.
    fn insert_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        values: &[i32],
    ) -> Result<Vec<i32>>;

    /// Merge two ascending arrays into one ascending array.
    ///
    /// Sortedness is verified while merging, element by element, so an
    /// unsorted input is reported at the first descent the merge reaches.
    fn merge_sorted_arrays(&self, input: &[i32], input2: &[i32]) -> Result<Vec<i32>>;

    /// Check that both matrices are present, rectangular and compatible.
    fn validate_for_matrix_multiplication(
        &self,
        left: Option<&RawMatrix>,
        right: Option<&RawMatrix>,
    ) -> Result<()> {
        validation::validate_matrices(left, right).map(|_| ())
    }

    /// Row-by-column product of `left` and `right`, after validation.
    fn matrix_multiplication(
        &self,
        left: Option<&RawMatrix>,
        right: Option<&RawMatrix>,
    ) -> Result<Array2<i32>>;

    /// Unique values of `input`, in no particular order.
    fn distinct(&self, input: &[i32]) -> Vec<i32>;

    /// Optional human readable name for the implementation
    fn name(&self) -> &str {
        "array_processor"
    }
}
