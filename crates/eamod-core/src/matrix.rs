//! Dense row-major storage for road matrices and vehicle-state tensors.
//!
//! # Data layout
//!
//! Both types keep their elements in a single `Vec<T>`:
//!
//! ```text
//! Matrix  (rows, cols):          data[r * cols + c]
//! Tensor3 (d0, d1, d2):          data[(a * d1 + b) * d2 + c]
//! ```
//!
//! Only the operations the builder and its consumers need are provided —
//! this is storage, not a linear-algebra library.

use crate::{CoreError, CoreResult};

// ── Matrix ────────────────────────────────────────────────────────────────────

/// A dense `rows × cols` matrix.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// A `rows × cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self { rows, cols, data: vec![value; rows * cols] }
    }
}

impl<T: Clone + Default> Matrix<T> {
    /// A `rows × cols` matrix of `T::default()` (zero for numeric types).
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::default())
    }
}

impl<T> Matrix<T> {
    /// Build from nested rows.  Every row must have the same length.
    ///
    /// An empty `rows` gives a `0 × 0` matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> CoreResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(CoreError::Ragged { row: r, expected: n_cols, got: row.len() });
            }
            data.extend(row);
        }
        Ok(Self { rows: n_rows, cols: n_cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        if r < self.rows && c < self.cols {
            self.data.get(r * self.cols + c)
        } else {
            None
        }
    }

    /// Overwrite cell `(r, c)`.
    ///
    /// # Panics
    /// Panics if the cell is out of bounds.
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        assert!(r < self.rows && c < self.cols, "cell ({r}, {c}) outside {}x{}", self.rows, self.cols);
        self.data[r * self.cols + c] = value;
    }

    /// Row `r` as a contiguous slice.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Iterator over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// All cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

// ── Tensor3 ───────────────────────────────────────────────────────────────────

/// A dense 3-D tensor with shape `(d0, d1, d2)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tensor3<T> {
    shape: (usize, usize, usize),
    data: Vec<T>,
}

impl<T: Clone + Default> Tensor3<T> {
    pub fn zeros(d0: usize, d1: usize, d2: usize) -> Self {
        Self { shape: (d0, d1, d2), data: vec![T::default(); d0 * d1 * d2] }
    }
}

impl<T> Tensor3<T> {
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        self.shape
    }

    #[inline]
    pub fn get(&self, a: usize, b: usize, c: usize) -> Option<&T> {
        let (d0, d1, d2) = self.shape;
        if a < d0 && b < d1 && c < d2 {
            self.data.get((a * d1 + b) * d2 + c)
        } else {
            None
        }
    }

    /// All cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
