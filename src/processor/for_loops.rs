use std::collections::HashSet;

use crate::error::{ArrayError, Result, Side};
use crate::math::Array2;
use crate::processor::processor_trait::ArrayProcessor;
use crate::processor::validation::{self, RawMatrix};

/// `ArrayProcessor` written with explicit index loops.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopProcessor;

impl LoopProcessor {
    pub fn new() -> Self {
        LoopProcessor
    }
}

fn previous(values: &[i32], index: usize) -> Option<i32> {
    index.checked_sub(1).map(|p| values[p])
}

impl ArrayProcessor for LoopProcessor {
    fn none_match(&self, input: &[i32]) -> bool {
        for &num in input {
            if num % 10 == 0 {
                return false;
            }
        }
        true
    }

    fn some_match(&self, input: &[i32], predicate: &dyn Fn(i32) -> bool) -> bool {
        for &num in input {
            if predicate(num) {
                return true;
            }
        }
        false
    }

    fn all_match(
        &self,
        input: &[&str],
        function: &dyn Fn(&str) -> i32,
        predicate: &dyn Fn(i32) -> bool,
    ) -> bool {
        for &s in input {
            if !predicate(function(s)) {
                return false;
            }
        }
        true
    }

    fn copy_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        end_exclusive: isize,
    ) -> Result<Vec<i32>> {
        let (start, end) = validation::check_range(start_inclusive, end_exclusive, input.len())?;

        let mut values = Vec::with_capacity(end - start);
        for i in start..end {
            values.push(input[i]);
        }
        Ok(values)
    }

    fn replace(&self, input: &[i32]) -> Vec<i32> {
        let mut values = Vec::with_capacity(input.len());
        for i in 0..input.len() {
            if i % 2 == 0 {
                values.push(input[i].wrapping_mul(2));
            } else {
                values.push(input[i].wrapping_neg());
            }
        }
        values
    }

    fn find_second_max(&self, input: &[i32]) -> Result<i32> {
        let mut max: Option<i32> = None;
        let mut second: Option<i32> = None;

        for &num in input {
            match max {
                None => max = Some(num),
                Some(m) if num > m => {
                    second = max;
                    max = Some(num);
                }
                Some(m) if num < m && second.map_or(true, |s| num > s) => second = Some(num),
                _ => {}
            }
        }

        match second {
            Some(value) => Ok(value),
            None => validation::rejected(ArrayError::TooFewDistinctValues {
                found: usize::from(max.is_some()),
            }),
        }
    }

    fn rearrange(&self, input: &[i32]) -> Vec<i32> {
        let mut values = vec![0; input.len()];

        let mut negative = 0;
        let mut non_negative = 0;
        for &num in input {
            if num < 0 {
                non_negative += 1;
            }
        }

        for k in (0..input.len()).rev() {
            if input[k] < 0 {
                values[negative] = input[k];
                negative += 1;
            } else {
                values[non_negative] = input[k];
                non_negative += 1;
            }
        }

        values
    }

    fn filter(&self, input: &[i32]) -> Vec<i32> {
        let threshold = input.len() as i64 - 10;

        let mut values = Vec::with_capacity(input.len());
        for &num in input {
            if i64::from(num) >= threshold {
                values.push(num);
            }
        }
        values
    }

    fn insert_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        values: &[i32],
    ) -> Result<Vec<i32>> {
        let start = validation::check_insertion(start_inclusive, input.len())?;

        let mut combined = Vec::with_capacity(input.len() + values.len());
        for i in 0..input.len() {
            if i == start {
                for &value in values {
                    combined.push(value);
                }
            }
            combined.push(input[i]);
        }
        Ok(combined)
    }

    fn merge_sorted_arrays(&self, input: &[i32], input2: &[i32]) -> Result<Vec<i32>> {
        let (n, m) = (input.len(), input2.len());
        let mut merged = Vec::with_capacity(n + m);
        let (mut i, mut j) = (0, 0);

        while i < n && j < m {
            if input[i] < input2[j] {
                validation::check_ascending(Side::Left, i, previous(input, i), input[i])?;
                merged.push(input[i]);
                i += 1;
            } else {
                validation::check_ascending(Side::Right, j, previous(input2, j), input2[j])?;
                merged.push(input2[j]);
                j += 1;
            }
        }

        while i < n {
            validation::check_ascending(Side::Left, i, previous(input, i), input[i])?;
            merged.push(input[i]);
            i += 1;
        }

        while j < m {
            validation::check_ascending(Side::Right, j, previous(input2, j), input2[j])?;
            merged.push(input2[j]);
            j += 1;
        }

        log::trace!("merged {} + {} values", n, m);
        Ok(merged)
    }

    fn matrix_multiplication(
        &self,
        left: Option<&RawMatrix>,
        right: Option<&RawMatrix>,
    ) -> Result<Array2<i32>> {
        let operands = validation::validate_matrices(left, right)?;
        let (lhs, rhs) = (&operands.left, &operands.right);

        let mut product = Array2::zeros(lhs.nrows(), rhs.cols);
        for k in 0..lhs.nrows() {
            for j in 0..rhs.cols {
                let mut sum = 0i32;
                for i in 0..rhs.nrows() {
                    sum = sum.wrapping_add(lhs.rows[k][i].wrapping_mul(rhs.rows[i][j]));
                }
                product[(k, j)] = sum;
            }
        }

        log::trace!(
            "multiplied {}x{} by {}x{}",
            lhs.nrows(),
            lhs.cols,
            rhs.nrows(),
            rhs.cols
        );
        Ok(product)
    }

    fn distinct(&self, input: &[i32]) -> Vec<i32> {
        let mut seen = HashSet::with_capacity(input.len());
        let mut values = Vec::new();
        for &num in input {
            if seen.insert(num) {
                values.push(num);
            }
        }
        values
    }

    fn name(&self) -> &str {
        "for_loops"
    }
}
