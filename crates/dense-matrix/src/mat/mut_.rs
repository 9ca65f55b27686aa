//! Mutable matrix view.

use std::ops::{Index, IndexMut};

use dense_types::DenseScalar;

use crate::storage::{Dims, Matrix};

use super::ref_::block;
use super::MatRef;

/// Mutable column-major view over borrowed data.
///
/// In-place operations (the apply framework, scaling, indexed updates) are
/// implemented on this type, so they work the same on whole matrices and on
/// blocks of a larger one. Writes through a view are visible in the owning
/// matrix once the view is dropped.
#[derive(Debug)]
pub struct MatMut<'a, T: DenseScalar> {
    pub(crate) data: &'a mut [T],
    pub(crate) dims: Dims,
}

impl<'a, T: DenseScalar> MatMut<'a, T> {
    /// Create a packed mutable view from a column-major slice.
    pub fn from_slice(data: &'a mut [T], rows: usize, cols: usize) -> Self {
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

    /// Create a mutable view with leading stride `step`.
    pub fn from_slice_strided(data: &'a mut [T], rows: usize, cols: usize, step: usize) -> Self {
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

    /// Immutable view of the same elements.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_, T> {
        MatRef {
            data: &*self.data,
            dims: self.dims,
        }
    }

    /// Shorter-lived mutable view of the same elements.
    #[inline]
    pub fn reborrow(&mut self) -> MatMut<'_, T> {
        MatMut {
            data: &mut *self.data,
            dims: self.dims,
        }
    }

    /// The underlying buffer, starting at element `(0, 0)`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Element at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    /// Mutable reference to the element at `(i, j)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self[(i, j)]
    }

    /// Mutable view of a block, see [`MatRef::submatrix`].
    pub fn submatrix_mut(
        &mut self,
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    ) -> MatMut<'_, T> {
        let (start, dims) = block(self.dims, row, col, nrows, ncols);
        let data = if dims.num_elements() == 0 {
            &mut self.data[..0]
        } else {
            &mut self.data[start..]
        };
        MatMut { data, dims }
    }

    /// Mutable view of column `j`.
    pub fn column_mut(&mut self, j: usize) -> MatMut<'_, T> {
        let rows = self.dims.rows();
        self.submatrix_mut(0, j, rows, 1)
    }

    /// Mutable view of row `i`.
    pub fn row_mut(&mut self, i: usize) -> MatMut<'_, T> {
        let cols = self.dims.cols();
        self.submatrix_mut(i, 0, 1, cols)
    }
}

impl<'a, T: DenseScalar> Matrix for MatMut<'a, T> {
    fn dims(&self) -> Option<Dims> {
        Some(self.dims)
    }

    fn is_complex(&self) -> bool {
        T::IS_COMPLEX
    }
}

impl<'a, T: DenseScalar> Index<(usize, usize)> for MatMut<'a, T> {
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

impl<'a, T: DenseScalar> IndexMut<(usize, usize)> for MatMut<'a, T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
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
        let k = self.dims.offset(i, j);
        &mut self.data[k]
    }
}
