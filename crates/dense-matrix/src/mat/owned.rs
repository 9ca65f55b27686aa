//! Owned matrix type.

use std::ops::{Index, IndexMut};

use dense_gemm_core::{default_params, gemm_dispatch, KernelParams};
use dense_types::DenseScalar;

use crate::error::{MatrixError, Result};
use crate::storage::{Dims, Matrix};

use super::{MatMut, MatRef};

/// Owned, packed column-major matrix.
///
/// The buffer always holds exactly `rows * cols` elements with leading
/// stride equal to the row count. Use factory methods to create matrices:
///
/// ```
/// use dense_matrix::{FloatMatrix, Matrix};
///
/// let zeros = FloatMatrix::zeros(3, 4);
/// let twos = FloatMatrix::with_value(2, 2, 2.0);
/// let diag = FloatMatrix::diagonal(3, 5.0);
/// let custom = FloatMatrix::from_fn(2, 2, |i, j| (i + j) as f64);
///
/// assert_eq!(zeros.size(), (3, 4));
/// assert_eq!(diag[(1, 1)], 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Mat<T: DenseScalar> {
    pub(crate) data: Vec<T>,
    pub(crate) dims: Dims,
}

impl<T: DenseScalar> Mat<T> {
    /// Create a `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::with_value(rows, cols, T::zero())
    }

    /// Create a `rows x cols` matrix with every element set to `value`.
    pub fn with_value(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            dims: Dims::packed(rows, cols),
        }
    }

    /// Create an `n x n` matrix with `value` on the diagonal.
    pub fn diagonal(n: usize, value: T) -> Self {
        let mut mat = Self::zeros(n, n);
        for i in 0..n {
            mat.data[i * n + i] = value;
        }
        mat
    }

    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::diagonal(n, T::one())
    }

    /// Create a matrix from a function of `(row, col)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let data = (0..rows * cols)
            .map(|k| f(k % rows, k / rows))
            .collect();
        Self {
            data,
            dims: Dims::packed(rows, cols),
        }
    }

    /// Create a matrix from column-major data.
    pub fn from_col_major(data: &[T], rows: usize, cols: usize) -> Self {
        Self::from_vec(data.to_vec(), rows, cols)
    }

    /// Create a matrix from row-major data.
    pub fn from_row_major(data: &[T], rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length {} != rows {} * cols {}",
            data.len(),
            rows,
            cols
        );
        Self::from_fn(rows, cols, |i, j| data[i * cols + j])
    }

    /// Create a matrix taking ownership of column-major data.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Self {
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

    /// Get the underlying data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the underlying data as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning its column-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    /// Set the element at `(i, j)`.
    #[inline]
    pub fn set_at(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
    }

    /// Element `(0, 0)`, or `None` for an empty matrix.
    pub fn scalar(&self) -> Option<T> {
        self.data.first().copied()
    }

    /// Immutable view of the whole matrix.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_, T> {
        MatRef {
            data: &self.data,
            dims: self.dims,
        }
    }

    /// Mutable view of the whole matrix.
    #[inline]
    pub fn as_mut(&mut self) -> MatMut<'_, T> {
        MatMut {
            data: &mut self.data,
            dims: self.dims,
        }
    }

    /// View of a block sharing this matrix's buffer.
    pub fn submatrix(&self, row: usize, col: usize, nrows: usize, ncols: usize) -> MatRef<'_, T> {
        self.as_ref().submatrix(row, col, nrows, ncols)
    }

    /// Mutable view of a block sharing this matrix's buffer.
    ///
    /// Writes through the view show up in `self` once it is dropped.
    pub fn submatrix_mut(
        &mut self,
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    ) -> MatMut<'_, T> {
        let (start, dims) = super::ref_::block(self.dims, row, col, nrows, ncols);
        let data = if dims.num_elements() == 0 {
            &mut self.data[..0]
        } else {
            &mut self.data[start..]
        };
        MatMut { data, dims }
    }

    /// View of column `j`.
    pub fn column(&self, j: usize) -> MatRef<'_, T> {
        self.as_ref().column(j)
    }

    /// Mutable view of column `j`.
    pub fn column_mut(&mut self, j: usize) -> MatMut<'_, T> {
        let rows = self.dims.rows();
        self.submatrix_mut(0, j, rows, 1)
    }

    /// View of row `i`.
    pub fn row(&self, i: usize) -> MatRef<'_, T> {
        self.as_ref().row(i)
    }

    /// Mutable view of row `i`.
    pub fn row_mut(&mut self, i: usize) -> MatMut<'_, T> {
        let cols = self.dims.cols();
        self.submatrix_mut(i, 0, 1, cols)
    }

    /// Copy row `i` into `buf`, replacing its contents.
    pub fn get_row_array(&self, i: usize, buf: &mut Vec<T>) {
        self.as_ref().get_row_array(i, buf)
    }

    /// Copy column `j` into `buf`, replacing its contents.
    pub fn get_column_array(&self, j: usize, buf: &mut Vec<T>) {
        self.as_ref().get_column_array(j, buf)
    }

    /// Change the shape to `rows x cols` without touching the elements.
    ///
    /// Does nothing unless `rows * cols` equals the current element count.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> &mut Self {
        if let Err(err) = self.try_reshape(rows, cols) {
            tracing::debug!(%err, rows, cols, "reshape ignored");
        }
        self
    }

    /// Like [`Mat::reshape`], but reports an element-count mismatch.
    pub fn try_reshape(&mut self, rows: usize, cols: usize) -> Result<&mut Self> {
        let found = rows * cols;
        if found != self.dims.num_elements() {
            return Err(MatrixError::ElementCount {
                expected: self.dims.num_elements(),
                found,
            });
        }
        self.dims.set_size(rows, cols);
        Ok(self)
    }

    /// True if shapes match and every pair of elements differs by at most `tol`.
    pub fn allclose(&self, other: &Mat<T>, tol: f64) -> bool {
        self.as_ref().allclose(&other.as_ref(), tol)
    }
}

// Kernel-backed products
impl<T: DenseScalar> Mat<T> {
    /// Accumulate `c += self * b` with the process-wide kernel.
    ///
    /// `c` must already be `self.rows x b.cols`; it is not cleared.
    ///
    /// ```
    /// use dense_matrix::FloatMatrix;
    ///
    /// let a = FloatMatrix::with_value(3, 3, 2.0);
    /// let b = FloatMatrix::diagonal(3, 4.0);
    /// let mut c = FloatMatrix::zeros(3, 3);
    ///
    /// a.mul_into(&b, &mut c).unwrap();
    /// a.mul_into(&b, &mut c).unwrap();
    /// assert!(c.as_slice().iter().all(|&x| x == 16.0));
    /// ```
    pub fn mul_into(&self, b: &Mat<T>, c: &mut Mat<T>) -> Result<()> {
        self.mul_into_with(&default_params(), b, c)
    }

    /// Accumulate `c += self * b` with explicit kernel parameters.
    pub fn mul_into_with(&self, params: &KernelParams, b: &Mat<T>, c: &mut Mat<T>) -> Result<()> {
        if self.dims.cols() != b.dims.rows() {
            tracing::debug!(a = %self.dims.shape(), b = %b.dims.shape(), "mul_into rejected");
            return Err(MatrixError::InnerDimension {
                left: self.dims.shape(),
                right: b.dims.shape(),
            });
        }
        if !c.size_match(self.dims.rows(), b.dims.cols()) {
            return Err(crate::error::shape_mismatch(
                "mul_into",
                c.dims.shape(),
                (self.dims.rows(), b.dims.cols()).into(),
            ));
        }
        gemm_dispatch(
            params,
            0..b.dims.cols(),
            self.dims.rows(),
            self.dims.cols(),
            &mut c.data,
            &self.data,
            &b.data,
        );
        Ok(())
    }

    /// Matrix product `self * b` computed by the multiply kernel.
    pub fn matmul(&self, b: &Mat<T>) -> Result<Mat<T>> {
        let mut c = Mat::zeros(self.dims.rows(), b.dims.cols());
        self.mul_into(b, &mut c)?;
        Ok(c)
    }
}

impl<T: DenseScalar> Matrix for Mat<T> {
    fn dims(&self) -> Option<Dims> {
        Some(self.dims)
    }

    fn is_complex(&self) -> bool {
        T::IS_COMPLEX
    }
}

impl<T: DenseScalar> Index<(usize, usize)> for Mat<T> {
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

impl<T: DenseScalar> IndexMut<(usize, usize)> for Mat<T> {
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

impl<T: DenseScalar> PartialEq for Mat<T> {
    fn eq(&self, other: &Mat<T>) -> bool {
        self.dims.size() == other.dims.size() && self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dense_gemm_core::KernelKind;
    use dense_types::Complex64;

    #[test]
    fn test_mat_zeros() {
        let m = Mat::<f64>::zeros(3, 4);
        assert_eq!(m.size(), (3, 4));
        assert_eq!(m.leading_index(), 3);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_mat_diagonal() {
        let m = Mat::<f64>::diagonal(3, 2.5);
        assert_eq!(m[(0, 0)], 2.5);
        assert_eq!(m[(0, 1)], 0.0);
        assert_eq!(m[(2, 2)], 2.5);
        assert_eq!(Mat::<f64>::identity(2).as_slice(), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_mat_from_fn_is_column_major() {
        let m = Mat::<f64>::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m.as_slice(), &[0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
        assert_eq!(m[(1, 2)], 5.0);
    }

    #[test]
    fn test_mat_from_row_major() {
        let m = Mat::from_row_major(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m, Mat::from_col_major(&[1.0, 4.0, 2.0, 5.0, 3.0, 6.0], 2, 3));
    }

    #[test]
    fn test_into_vec_returns_column_major() {
        let m = Mat::from_row_major(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        assert_eq!(m.into_vec(), vec![1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "data length")]
    fn test_mat_from_vec_size_mismatch() {
        let _ = Mat::from_vec(vec![1.0f64; 5], 2, 3);
    }

    #[test]
    fn test_complex_flavor() {
        let m = Mat::<Complex64>::zeros(2, 2);
        assert!(m.is_complex());
        assert!(!Mat::<f64>::zeros(2, 2).is_complex());
    }

    #[test]
    fn test_reshape() {
        let mut m = Mat::from_col_major(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        m.reshape(3, 2);
        assert_eq!(m.size(), (3, 2));
        assert_eq!(m.leading_index(), 3);
        assert_eq!(m[(0, 1)], 4.0);
    }

    #[test]
    fn test_reshape_mismatch_is_noop() {
        let mut m = Mat::<f64>::zeros(2, 3);
        m.reshape(4, 2);
        assert_eq!(m.size(), (2, 3));
        assert_eq!(
            m.try_reshape(4, 2).unwrap_err(),
            MatrixError::ElementCount {
                expected: 6,
                found: 8
            }
        );
    }

    #[test]
    fn test_submatrix_mut_aliases_owner() {
        let mut m = Mat::<f64>::zeros(3, 3);
        {
            let mut view = m.submatrix_mut(1, 0, 2, 2);
            view[(1, 1)] = 9.0;
        }
        assert_eq!(m[(2, 1)], 9.0);
        m.column_mut(2)[(0, 0)] = 1.0;
        m.row_mut(0)[(0, 0)] = 2.0;
        assert_eq!(m.as_slice(), &[2.0, 0.0, 0.0, 0.0, 0.0, 9.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_scalar() {
        assert_eq!(Mat::<f64>::with_value(1, 1, 3.0).scalar(), Some(3.0));
        assert_eq!(Mat::<f64>::zeros(0, 3).scalar(), None);
    }

    #[test]
    fn test_matmul_matches_times() {
        let a = Mat::from_fn(4, 3, |i, j| (i as f64) - 2.0 * (j as f64));
        let b = Mat::from_fn(3, 5, |i, j| if (i + j) % 2 == 0 { 0.0 } else { 1.5 });
        let kernel = a.matmul(&b).unwrap();
        let naive = a.times(&b).unwrap();
        assert!(kernel.allclose(&naive, 1e-12));
    }

    #[test]
    fn test_mul_into_viewport_kernel() {
        let a = Mat::from_fn(5, 7, |i, j| (i * 7 + j) as f64);
        let b = Mat::<f64>::diagonal(7, 2.0);
        let mut column = Mat::zeros(5, 7);
        let mut viewport = Mat::zeros(5, 7);
        a.mul_into_with(&KernelParams::DEFAULT, &b, &mut column).unwrap();
        a.mul_into_with(&KernelParams::new(KernelKind::Viewport, 3), &b, &mut viewport)
            .unwrap();
        assert_eq!(column, viewport);
        assert_eq!(column[(4, 6)], 2.0 * 34.0);
    }

    #[test]
    fn test_mul_into_shape_errors() {
        let a = Mat::<f64>::zeros(2, 3);
        let b = Mat::<f64>::zeros(2, 3);
        let mut c = Mat::<f64>::zeros(2, 3);
        assert!(matches!(
            a.mul_into(&b, &mut c),
            Err(MatrixError::InnerDimension { .. })
        ));

        let b = Mat::<f64>::zeros(3, 4);
        assert!(matches!(
            a.mul_into(&b, &mut c),
            Err(MatrixError::ShapeMismatch { op: "mul_into", .. })
        ));
    }
}
