use std::error::Error;
use std::fmt;

/// Which operand of a two-input operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Broad category of an [`ArrayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required matrix or row was absent.
    NullInput,
    /// Indices out of range, unsorted input or incompatible shapes.
    InvalidArgument,
}

/// Errors returned by the array processors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    NullMatrix { side: Side },
    NullRow { side: Side, row: usize },
    RangeOutOfBounds { start: isize, end: isize, len: usize },
    InsertionOutOfBounds { index: isize, len: usize },
    TooFewDistinctValues { found: usize },
    /// `index` is the position of the element that is smaller than its predecessor.
    NotAscending { side: Side, index: usize },
    EmptyMatrices,
    EmptyMatrix { side: Side },
    RaggedMatrix {
        side: Side,
        row: usize,
        expected: usize,
        found: usize,
    },
    IncompatibleShapes { left_cols: usize, right_rows: usize },
}

impl ArrayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::NullMatrix { .. } | ArrayError::NullRow { .. } => ErrorKind::NullInput,
            _ => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_null_input(&self) -> bool {
        self.kind() == ErrorKind::NullInput
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::NullMatrix { side } => write!(f, "{} matrix is missing", side),
            ArrayError::NullRow { side, row } => {
                write!(f, "row {} of the {} matrix is missing", row, side)
            }
            ArrayError::RangeOutOfBounds { start, end, len } => write!(
                f,
                "range [{}, {}) is not a valid sub-range of an array of length {}",
                start, end, len
            ),
            ArrayError::InsertionOutOfBounds { index, len } => write!(
                f,
                "insertion index {} is out of bounds for an array of length {}",
                index, len
            ),
            ArrayError::TooFewDistinctValues { found } => write!(
                f,
                "at least 2 distinct values are required, found {}",
                found
            ),
            ArrayError::NotAscending { side, index } => write!(
                f,
                "{} array is not sorted ascending at index {}",
                side, index
            ),
            ArrayError::EmptyMatrices => write!(f, "both matrices are empty"),
            ArrayError::EmptyMatrix { side } => write!(f, "{} matrix has no rows", side),
            ArrayError::RaggedMatrix {
                side,
                row,
                expected,
                found,
            } => write!(
                f,
                "{} matrix is not rectangular: row {} has {} columns, expected {}",
                side, row, found, expected
            ),
            ArrayError::IncompatibleShapes {
                left_cols,
                right_rows,
            } => write!(
                f,
                "left matrix has {} columns but right matrix has {} rows",
                left_cols, right_rows
            ),
        }
    }
}

impl Error for ArrayError {}

/// Result type for array operations
pub type Result<T> = std::result::Result<T, ArrayError>;
