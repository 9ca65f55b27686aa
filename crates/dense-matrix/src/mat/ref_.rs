//! Immutable matrix view.

use std::ops::Index;

use dense_types::DenseScalar;

use crate::storage::{Dims, Matrix};

use super::Mat;

/// Immutable column-major view over borrowed data.
///
/// This is a lightweight view type that can be copied freely. The buffer
/// starts at element `(0, 0)` of the view; consecutive columns are `step`
/// elements apart, so a view may select a block of a larger matrix.
///
/// ```
/// use dense_matrix::{MatRef, Matrix};
///
/// // 2x3 matrix [[1, 2, 3], [4, 5, 6]] in column-major order
/// let data = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
/// let a = MatRef::from_slice(&data, 2, 3);
///
/// assert_eq!(a.size(), (2, 3));
/// assert_eq!(a.get(1, 2), 6.0);
/// ```
#[derive(Debug)]
pub struct MatRef<'a, T: DenseScalar> {
    pub(crate) data: &'a [T],
    pub(crate) dims: Dims,
}

impl<'a, T: DenseScalar> Copy for MatRef<'a, T> {}

impl<'a, T: DenseScalar> Clone for MatRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: DenseScalar> MatRef<'a, T> {
    /// Create a packed view from a column-major slice of length `rows * cols`.
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length {} != rows {} * cols {}",
            data.len(),
            rows,
            cols
        );
        Self {
            data,
            dims: Dims::packed(rows, cols),
        }
    }

    /// Create a view with leading stride `step`.
    ///
    /// # Panics
    /// Panics if `step < rows` or the slice cannot hold the last column.
    pub fn from_slice_strided(data: &'a [T], rows: usize, cols: usize, step: usize) -> Self {
        let dims = Dims::strided(rows, cols, step);
        assert!(
            data.len() >= dims.min_len(),
            "data length {} too short for {}x{} with step {}",
            data.len(),
            rows,
            cols,
            step
        );
        Self { data, dims }
    }

    /// The underlying buffer, starting at element `(0, 0)`.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Element at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    /// Element `(0, 0)`, or `None` for an empty matrix.
    pub fn scalar(&self) -> Option<T> {
        if self.dims.num_elements() == 0 {
            None
        } else {
            Some(self.data[0])
        }
    }

    /// Elements in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let data = self.data;
        self.dims.offsets().map(move |k| data[k])
    }

    /// Copy into a packed owned matrix.
    pub fn to_owned(&self) -> Mat<T> {
        Mat::from_vec(self.iter().collect(), self.dims.rows(), self.dims.cols())
    }

    /// View of the `nrows x ncols` block whose top-left element is `(row, col)`.
    ///
    /// # Panics
    /// Panics if the block does not fit.
    pub fn submatrix(&self, row: usize, col: usize, nrows: usize, ncols: usize) -> MatRef<'a, T> {
        let (start, dims) = block(self.dims, row, col, nrows, ncols);
        let data = if dims.num_elements() == 0 {
            &self.data[..0]
        } else {
            &self.data[start..]
        };
        MatRef { data, dims }
    }

    /// View of column `j` as a `rows x 1` matrix.
    pub fn column(&self, j: usize) -> MatRef<'a, T> {
        self.submatrix(0, j, self.dims.rows(), 1)
    }

    /// View of row `i` as a `1 x cols` matrix.
    pub fn row(&self, i: usize) -> MatRef<'a, T> {
        self.submatrix(i, 0, 1, self.dims.cols())
    }

    /// Copy row `i` into `buf`, replacing its contents.
    pub fn get_row_array(&self, i: usize, buf: &mut Vec<T>) {
        buf.clear();
        buf.extend((0..self.dims.cols()).map(|j| self.data[self.dims.offset(i, j)]));
    }

    /// Copy column `j` into `buf`, replacing its contents.
    pub fn get_column_array(&self, j: usize, buf: &mut Vec<T>) {
        let start = self.dims.offset(0, j);
        buf.clear();
        buf.extend_from_slice(&self.data[start..start + self.dims.rows()]);
    }

    /// Element at column-major position `k`.
    #[inline]
    pub(crate) fn element(&self, k: usize) -> T {
        self.data[self.dims.real_index(k)]
    }

    /// True if shapes match and every pair of elements differs by at most `tol`.
    pub fn allclose(&self, other: &MatRef<'_, T>, tol: f64) -> bool {
        self.dims.size() == other.dims.size()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (a - b).modulus() <= tol)
    }
}

/// Offset and dimensions of a block view inside `dims`.
pub(crate) fn block(dims: Dims, row: usize, col: usize, nrows: usize, ncols: usize) -> (usize, Dims) {
    assert!(
        row + nrows <= dims.rows() && col + ncols <= dims.cols(),
        "block {}x{} at ({}, {}) out of bounds {}x{}",
        nrows,
        ncols,
        row,
        col,
        dims.rows(),
        dims.cols()
    );
    let view = Dims::strided(nrows, ncols, dims.step());
    (dims.offset(row, col), view)
}

impl<'a, T: DenseScalar> Matrix for MatRef<'a, T> {
    fn dims(&self) -> Option<Dims> {
        Some(self.dims)
    }

    fn is_complex(&self) -> bool {
        T::IS_COMPLEX
    }
}

impl<'a, T: DenseScalar> Index<(usize, usize)> for MatRef<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(
            i < self.dims.rows(),
            "row index {} out of bounds {}",
            i,
            self.dims.rows()
        );
        debug_assert!(
            j < self.dims.cols(),
            "col index {} out of bounds {}",
            j,
            self.dims.cols()
        );
        &self.data[self.dims.offset(i, j)]
    }
}

impl<'a, 'b, T: DenseScalar> PartialEq<MatRef<'b, T>> for MatRef<'a, T> {
    fn eq(&self, other: &MatRef<'b, T>) -> bool {
        self.dims.size() == other.dims.size() && self.iter().eq(other.iter())
    }
}
