//! Precondition checks shared by every `ArrayProcessor` implementation.
//!
//! All checks fail fast on the first violation and log the rejected input at
//! debug level before returning the error.

use crate::error::{ArrayError, Result, Side};

/// A matrix as handed over by callers: the matrix itself and each of its rows
/// may be absent.
pub type RawMatrix = [Option<Vec<i32>>];

/// Borrowed view of a matrix that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedMatrix<'a> {
    pub rows: Vec<&'a [i32]>,
    pub cols: usize,
}

impl<'a> CheckedMatrix<'a> {
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}

/// Both operands of a matrix product, already known to be compatible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedOperands<'a> {
    pub left: CheckedMatrix<'a>,
    pub right: CheckedMatrix<'a>,
}

pub(crate) fn rejected<T>(err: ArrayError) -> Result<T> {
    log::debug!("rejecting input: {}", err);
    Err(err)
}

/// Convert `[start, end)` into slice bounds for an array of length `len`.
///
/// `end == len` is rejected as well; the last element can never be copied.
pub fn check_range(start: isize, end: isize, len: usize) -> Result<(usize, usize)> {
    if start < 0 || end >= len as isize || start >= end {
        return rejected(ArrayError::RangeOutOfBounds { start, end, len });
    }
    Ok((start as usize, end as usize))
}

/// Check that `index` addresses an existing element of an array of length `len`.
pub fn check_insertion(index: isize, len: usize) -> Result<usize> {
    if index < 0 || index >= len as isize {
        return rejected(ArrayError::InsertionOutOfBounds { index, len });
    }
    Ok(index as usize)
}

/// Check one merge step: `current` (at `index` of the `side` array) must not
/// be smaller than the element consumed before it.
pub fn check_ascending(side: Side, index: usize, previous: Option<i32>, current: i32) -> Result<()> {
    match previous {
        Some(previous) if current < previous => {
            rejected(ArrayError::NotAscending { side, index })
        }
        _ => Ok(()),
    }
}

fn present_rows(side: Side, matrix: &RawMatrix) -> Result<Vec<&[i32]>> {
    let mut rows = Vec::with_capacity(matrix.len());
    for (row, values) in matrix.iter().enumerate() {
        match values {
            Some(values) => rows.push(values.as_slice()),
            None => return rejected(ArrayError::NullRow { side, row }),
        }
    }
    Ok(rows)
}

fn column_count(side: Side, rows: &[&[i32]]) -> Result<usize> {
    let expected = rows.first().map_or(0, |row| row.len());
    for (row, values) in rows.iter().enumerate().skip(1) {
        if values.len() != expected {
            return rejected(ArrayError::RaggedMatrix {
                side,
                row,
                expected,
                found: values.len(),
            });
        }
    }
    Ok(expected)
}

/// Validate two matrices for multiplication.
///
/// Checks run in order: absent matrices, absent rows, empty matrices,
/// ragged rows (left first), then the inner dimension.
pub fn validate_matrices<'a>(
    left: Option<&'a RawMatrix>,
    right: Option<&'a RawMatrix>,
) -> Result<CheckedOperands<'a>> {
    let left = match left {
        Some(m) => m,
        None => return rejected(ArrayError::NullMatrix { side: Side::Left }),
    };
    let right = match right {
        Some(m) => m,
        None => return rejected(ArrayError::NullMatrix { side: Side::Right }),
    };

    let left_rows = present_rows(Side::Left, left)?;
    let right_rows = present_rows(Side::Right, right)?;

    match (left_rows.is_empty(), right_rows.is_empty()) {
        (true, true) => return rejected(ArrayError::EmptyMatrices),
        (true, false) => return rejected(ArrayError::EmptyMatrix { side: Side::Left }),
        (false, true) => return rejected(ArrayError::EmptyMatrix { side: Side::Right }),
        (false, false) => {}
    }

    let left_cols = column_count(Side::Left, &left_rows)?;
    let right_cols = column_count(Side::Right, &right_rows)?;

    if left_cols != right_rows.len() {
        return rejected(ArrayError::IncompatibleShapes {
            left_cols,
            right_rows: right_rows.len(),
        });
    }

    Ok(CheckedOperands {
        left: CheckedMatrix {
            rows: left_rows,
            cols: left_cols,
        },
        right: CheckedMatrix {
            rows: right_rows,
            cols: right_cols,
        },
    })
}
