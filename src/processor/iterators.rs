use std::collections::HashSet;
use std::iter::{Copied, Enumerate, Peekable};
use std::slice::Iter;

use crate::error::{ArrayError, Result, Side};
use crate::math::Array2;
use crate::processor::processor_trait::ArrayProcessor;
use crate::processor::validation::{self, RawMatrix};

/// `ArrayProcessor` built from iterator adaptor pipelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterProcessor;

impl IterProcessor {
    pub fn new() -> Self {
        IterProcessor
    }
}

/// Merge cursor over one input that verifies ordering as values are taken.
struct AscendingCursor<'a> {
    side: Side,
    values: Peekable<Enumerate<Copied<Iter<'a, i32>>>>,
    previous: Option<i32>,
}

impl<'a> AscendingCursor<'a> {
    fn new(side: Side, values: &'a [i32]) -> Self {
        Self {
            side,
            values: values.iter().copied().enumerate().peekable(),
            previous: None,
        }
    }

    fn peek(&mut self) -> Option<i32> {
        self.values.peek().map(|&(_, value)| value)
    }

    fn take(&mut self) -> Result<Option<i32>> {
        match self.values.next() {
            Some((index, value)) => {
                validation::check_ascending(self.side, index, self.previous, value)?;
                self.previous = Some(value);
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

impl ArrayProcessor for IterProcessor {
    fn none_match(&self, input: &[i32]) -> bool {
        input.iter().all(|&num| num % 10 != 0)
    }

    fn some_match(&self, input: &[i32], predicate: &dyn Fn(i32) -> bool) -> bool {
        input.iter().any(|&num| predicate(num))
    }

    fn all_match(
        &self,
        input: &[&str],
        function: &dyn Fn(&str) -> i32,
        predicate: &dyn Fn(i32) -> bool,
    ) -> bool {
        input.iter().map(|&s| function(s)).all(|num| predicate(num))
    }

    fn copy_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        end_exclusive: isize,
    ) -> Result<Vec<i32>> {
        let (start, end) = validation::check_range(start_inclusive, end_exclusive, input.len())?;
        Ok(input[start..end].to_vec())
    }

    fn replace(&self, input: &[i32]) -> Vec<i32> {
        input
            .iter()
            .enumerate()
            .map(|(i, &num)| {
                if i % 2 == 0 {
                    num.wrapping_mul(2)
                } else {
                    num.wrapping_neg()
                }
            })
            .collect()
    }

    fn find_second_max(&self, input: &[i32]) -> Result<i32> {
        let mut values = input.to_vec();
        values.sort_unstable();
        values.dedup();

        match values.iter().rev().nth(1) {
            Some(&value) => Ok(value),
            None => validation::rejected(ArrayError::TooFewDistinctValues {
                found: values.len(),
            }),
        }
    }

    fn rearrange(&self, input: &[i32]) -> Vec<i32> {
        let negatives = input.iter().rev().filter(|&&num| num < 0);
        let non_negatives = input.iter().rev().filter(|&&num| num >= 0);
        negatives.chain(non_negatives).copied().collect()
    }

    fn filter(&self, input: &[i32]) -> Vec<i32> {
        let threshold = input.len() as i64 - 10;
        input
            .iter()
            .copied()
            .filter(|&num| i64::from(num) >= threshold)
            .collect()
    }

    fn insert_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        values: &[i32],
    ) -> Result<Vec<i32>> {
        let start = validation::check_insertion(start_inclusive, input.len())?;
        let (head, tail) = input.split_at(start);
        Ok(head.iter().chain(values).chain(tail).copied().collect())
    }

    fn merge_sorted_arrays(&self, input: &[i32], input2: &[i32]) -> Result<Vec<i32>> {
        let mut first = AscendingCursor::new(Side::Left, input);
        let mut second = AscendingCursor::new(Side::Right, input2);
        let mut merged = Vec::with_capacity(input.len() + input2.len());

        loop {
            let from_first = match (first.peek(), second.peek()) {
                (Some(a), Some(b)) => a < b,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let next = if from_first { first.take()? } else { second.take()? };
            merged.extend(next);
        }

        log::trace!("merged {} + {} values", input.len(), input2.len());
        Ok(merged)
    }

    fn matrix_multiplication(
        &self,
        left: Option<&RawMatrix>,
        right: Option<&RawMatrix>,
    ) -> Result<Array2<i32>> {
        let operands = validation::validate_matrices(left, right)?;
        let (lhs, rhs) = (&operands.left, &operands.right);

        let product = Array2::from_shape_fn((lhs.nrows(), rhs.cols), |(row, col)| {
            lhs.rows[row]
                .iter()
                .zip(&rhs.rows)
                .fold(0i32, |sum, (&a, rhs_row)| {
                    sum.wrapping_add(a.wrapping_mul(rhs_row[col]))
                })
        });

        log::trace!("product shape {:?}", product.shape());
        Ok(product)
    }

    fn distinct(&self, input: &[i32]) -> Vec<i32> {
        input
            .iter()
            .copied()
            .collect::<HashSet<i32>>()
            .into_iter()
            .collect()
    }

    fn name(&self) -> &str {
        "iterators"
    }
}
