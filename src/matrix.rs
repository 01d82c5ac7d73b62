//! The fixed 3x3 grid.
//!
//! A [`Matrix3`] is built by reshaping exactly nine values in row-major
//! order: flat index `i` lands at row `i / 3`, column `i % 3`.

use crate::error::InvalidInputError;

/// Number of rows, and of columns.
pub const DIM: usize = 3;

/// Number of cells, and the only accepted input length.
pub const LEN: usize = DIM * DIM;

/// An immutable 3x3 matrix of `f64` values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Matrix3 {
    cells: [[f64; DIM]; DIM],
}

impl Matrix3 {
    /// Reshapes a flat row-major sequence of exactly nine values.
    ///
    /// Any `Copy` numeric type losslessly convertible to `f64` is accepted
    /// (`f64`, `f32`, `i32`, `u32`, `i16`, `u8`, ...).
    ///
    /// # Errors
    /// Returns [`InvalidInputError::SizeMismatch`] if `data.len() != 9`.
    ///
    /// # Examples
    /// ```
    /// use u_matstats::Matrix3;
    /// let m = Matrix3::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    /// assert_eq!(m.row(1), [4.0, 5.0, 6.0]);
    /// assert_eq!(m.col(2), [3.0, 6.0, 9.0]);
    /// assert!(Matrix3::from_slice(&[1.0; 8]).is_err());
    /// ```
    pub fn from_slice<T>(data: &[T]) -> Result<Self, InvalidInputError>
    where
        T: Copy + Into<f64>,
    {
        if data.len() != LEN {
            log::debug!(
                "rejecting input of {} values, a 3x3 matrix needs {LEN}",
                data.len()
            );
            return Err(InvalidInputError::SizeMismatch {
                expected: LEN,
                actual: data.len(),
            });
        }
        let mut cells = [[0.0; DIM]; DIM];
        for (i, &x) in data.iter().enumerate() {
            cells[i / DIM][i % DIM] = x.into();
        }
        Ok(Self { cells })
    }

    /// Builds a matrix from its rows.
    pub fn from_rows(rows: [[f64; DIM]; DIM]) -> Self {
        Self { cells: rows }
    }

    /// Returns the value at row `r`, column `c`, or `None` if out of range.
    pub fn get(&self, r: usize, c: usize) -> Option<f64> {
        self.cells.get(r)?.get(c).copied()
    }

    /// Returns row `r` in column order.
    ///
    /// # Panics
    /// Panics if `r >= 3`.
    pub fn row(&self, r: usize) -> [f64; DIM] {
        self.cells[r]
    }

    /// Returns column `c` in row order.
    ///
    /// # Panics
    /// Panics if `c >= 3`.
    pub fn col(&self, c: usize) -> [f64; DIM] {
        std::array::from_fn(|r| self.cells[r][c])
    }

    /// All rows, in row index order.
    pub fn rows(&self) -> [[f64; DIM]; DIM] {
        self.cells
    }

    /// All columns, in column index order.
    pub fn cols(&self) -> [[f64; DIM]; DIM] {
        std::array::from_fn(|c| self.col(c))
    }

    /// Flattens back to row-major order; the inverse of [`from_slice`](Self::from_slice).
    pub fn to_flat(&self) -> [f64; LEN] {
        std::array::from_fn(|i| self.cells[i / DIM][i % DIM])
    }
}

impl From<[f64; LEN]> for Matrix3 {
    fn from(data: [f64; LEN]) -> Self {
        Self::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| data[r * DIM + c])
        }))
    }
}

impl TryFrom<&[f64]> for Matrix3 {
    type Error = InvalidInputError;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(data)
    }
}
