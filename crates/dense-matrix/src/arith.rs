//! Arithmetic and reductions.
//!
//! Binary element-wise operations (`plus`, `minus`, `mul`, `div`) and the
//! matrix product `times` allocate a fresh result and never touch their
//! operands; on a shape mismatch they return an error instead.
//!
//! Scalar broadcasts (`scale`, `add`, `modulo`) mutate the receiver in place
//! through the apply framework. Each has an `_at` form restricted to a list
//! of positions, where negative positions count from the end.
//!
//! # Example
//!
//! ```
//! use dense_matrix::FloatMatrix;
//!
//! let a = FloatMatrix::from_col_major(&[1.0, 2.0, 3.0, 4.0], 2, 2);
//! let b = FloatMatrix::with_value(2, 2, 1.0);
//!
//! let mut c = a.plus(&b).unwrap();
//! c.scale(2.0).add_at(100.0, &[-1]);
//! assert_eq!(c.as_slice(), &[4.0, 6.0, 8.0, 110.0]);
//! assert_eq!(c.max(), 110.0);
//!
//! assert!(a.plus(&FloatMatrix::zeros(1, 4)).is_err());
//! ```

use dense_types::{DenseScalar, RealScalar};

use crate::error::{shape_mismatch, MatrixError, Result};
use crate::index::LogicalIndex;
use crate::mat::{Mat, MatMut, MatRef};

fn resolve_all<I: LogicalIndex>(indexes: &[I], n: usize) -> impl Iterator<Item = usize> + '_ {
    indexes.iter().map(move |&k| k.resolve(n))
}

fn check_pairs(op: &'static str, indexes: usize, values: usize) -> Result<()> {
    if indexes != values {
        tracing::debug!(op, indexes, values, "paired update length mismatch");
        return Err(MatrixError::ElementCount {
            expected: indexes,
            found: values,
        });
    }
    Ok(())
}

fn log_truncation(op: &'static str, indexes: usize, values: usize) {
    if indexes != values {
        tracing::debug!(
            op,
            indexes,
            values,
            used = indexes.min(values),
            "paired update truncated"
        );
    }
}

// Element-wise binary operations and the true matrix product
impl<'a, T: DenseScalar> MatRef<'a, T> {
    fn zip_new<F>(&self, op: &'static str, other: &MatRef<'_, T>, mut f: F) -> Result<Mat<T>>
    where
        F: FnMut(T, T) -> T,
    {
        if self.dims.size() != other.dims.size() {
            return Err(shape_mismatch(op, self.dims.shape(), other.dims.shape()));
        }
        let data = self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect();
        Ok(Mat::from_vec(data, self.dims.rows(), self.dims.cols()))
    }

    /// Element-wise sum `self + other`.
    pub fn plus(&self, other: &MatRef<'_, T>) -> Result<Mat<T>> {
        self.zip_new("plus", other, |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn minus(&self, other: &MatRef<'_, T>) -> Result<Mat<T>> {
        self.zip_new("minus", other, |a, b| a - b)
    }

    /// Hadamard product.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: &MatRef<'_, T>) -> Result<Mat<T>> {
        self.zip_new("mul", other, |a, b| a * b)
    }

    /// Element-wise quotient.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, other: &MatRef<'_, T>) -> Result<Mat<T>> {
        self.zip_new("div", other, |a, b| a / b)
    }

    /// Matrix product `self * other` by row-column dot products.
    ///
    /// One row buffer and one column buffer are filled per step and reused,
    /// so the product allocates nothing beyond its result. Use
    /// [`Mat::matmul`] for the sparsity-aware kernel.
    pub fn times(&self, other: &MatRef<'_, T>) -> Result<Mat<T>> {
        let (m, p) = self.dims.size();
        let (q, n) = other.dims.size();
        if p != q {
            tracing::debug!(a = %self.dims.shape(), b = %other.dims.shape(), "times rejected");
            return Err(MatrixError::InnerDimension {
                left: self.dims.shape(),
                right: other.dims.shape(),
            });
        }

        let mut out = Mat::zeros(m, n);
        let mut row = Vec::with_capacity(p);
        let mut col = Vec::with_capacity(p);
        for i in 0..m {
            self.get_row_array(i, &mut row);
            for j in 0..n {
                other.get_column_array(j, &mut col);
                let mut acc = T::zero();
                for (&x, &y) in row.iter().zip(&col) {
                    acc += x * y;
                }
                out[(i, j)] = acc;
            }
        }
        Ok(out)
    }
}

// Reductions
impl<'a, T: DenseScalar> MatRef<'a, T> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, v| acc + v)
    }

    /// Sum of the elements at `indexes`.
    pub fn sum_at<I: LogicalIndex>(&self, indexes: &[I]) -> T {
        let n = self.dims.num_elements();
        resolve_all(indexes, n).fold(T::zero(), |acc, k| acc + self.checked_element(k))
    }

    fn checked_element(&self, k: usize) -> T {
        let n = self.dims.num_elements();
        assert!(k < n, "index {} out of range for {} elements", k, n);
        self.element(k)
    }
}

impl<'a, T: RealScalar> MatRef<'a, T> {
    /// Largest element; `-inf` for an empty matrix, NaN if any element is NaN.
    pub fn max(&self) -> T {
        self.iter().fold(T::neg_infinity(), T::scalar_max)
    }

    /// Largest element among `indexes`; `-inf` when `indexes` is empty.
    pub fn max_at<I: LogicalIndex>(&self, indexes: &[I]) -> T {
        let n = self.dims.num_elements();
        resolve_all(indexes, n).fold(T::neg_infinity(), |acc, k| {
            acc.scalar_max(self.checked_element(k))
        })
    }

    /// Smallest element; `+inf` for an empty matrix, NaN if any element is NaN.
    pub fn min(&self) -> T {
        self.iter().fold(T::pos_infinity(), T::scalar_min)
    }

    /// Smallest element among `indexes`; `+inf` when `indexes` is empty.
    pub fn min_at<I: LogicalIndex>(&self, indexes: &[I]) -> T {
        let n = self.dims.num_elements();
        resolve_all(indexes, n).fold(T::pos_infinity(), |acc, k| {
            acc.scalar_min(self.checked_element(k))
        })
    }
}

// In-place scalar broadcasts
impl<'a, T: DenseScalar> MatMut<'a, T> {
    /// Multiply every element by `alpha`.
    pub fn scale(&mut self, alpha: T) -> &mut Self {
        self.apply_const_in_place(|v, a| v * a, alpha);
        self
    }

    /// Multiply the elements at `indexes` by `alpha`.
    pub fn scale_at<I: LogicalIndex>(&mut self, alpha: T, indexes: &[I]) -> &mut Self {
        let n = self.dims.num_elements();
        self.apply_const_at(resolve_all(indexes, n), |v, a| v * a, alpha);
        self
    }

    /// Add `x` to every element.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&mut self, x: T) -> &mut Self {
        self.apply_const_in_place(|v, x| v + x, x);
        self
    }

    /// Add `x` to the elements at `indexes`.
    pub fn add_at<I: LogicalIndex>(&mut self, x: T, indexes: &[I]) -> &mut Self {
        let n = self.dims.num_elements();
        self.apply_const_at(resolve_all(indexes, n), |v, x| v + x, x);
        self
    }

    /// Multiply element `indexes[i]` by `values[i]`.
    ///
    /// Pairs are consumed up to the shorter of the two lists; surplus
    /// indexes are left untouched.
    pub fn scale_indexes<I: LogicalIndex>(&mut self, indexes: &[I], values: &[T]) -> &mut Self {
        log_truncation("scale_indexes", indexes.len(), values.len());
        self.update_pairs(indexes, values, |v, x| v * x);
        self
    }

    /// Like [`scale_indexes`](Self::scale_indexes), but rejects lists of
    /// different lengths without modifying anything.
    pub fn try_scale_indexes<I: LogicalIndex>(
        &mut self,
        indexes: &[I],
        values: &[T],
    ) -> Result<&mut Self> {
        check_pairs("try_scale_indexes", indexes.len(), values.len())?;
        Ok(self.scale_indexes(indexes, values))
    }

    /// Add `values[i]` to element `indexes[i]`, up to the shorter list.
    pub fn add_indexes<I: LogicalIndex>(&mut self, indexes: &[I], values: &[T]) -> &mut Self {
        log_truncation("add_indexes", indexes.len(), values.len());
        self.update_pairs(indexes, values, |v, x| v + x);
        self
    }

    /// Strict form of [`add_indexes`](Self::add_indexes).
    pub fn try_add_indexes<I: LogicalIndex>(
        &mut self,
        indexes: &[I],
        values: &[T],
    ) -> Result<&mut Self> {
        check_pairs("try_add_indexes", indexes.len(), values.len())?;
        Ok(self.add_indexes(indexes, values))
    }

    fn update_pairs<I, F>(&mut self, indexes: &[I], values: &[T], mut f: F)
    where
        I: LogicalIndex,
        F: FnMut(T, T) -> T,
    {
        let n = self.dims.num_elements();
        for (k, &x) in resolve_all(indexes, n).zip(values) {
            self.apply_const_at(std::iter::once(k), &mut f, x);
        }
    }
}

impl<'a, T: RealScalar> MatMut<'a, T> {
    /// Replace every element by its remainder modulo `x`.
    pub fn modulo(&mut self, x: T) -> &mut Self {
        self.apply_const_in_place(T::scalar_rem, x);
        self
    }

    /// Remainder modulo `x` at `indexes` only.
    pub fn modulo_at<I: LogicalIndex>(&mut self, x: T, indexes: &[I]) -> &mut Self {
        let n = self.dims.num_elements();
        self.apply_const_at(resolve_all(indexes, n), T::scalar_rem, x);
        self
    }
}

impl<T: DenseScalar> Mat<T> {
    /// Element-wise sum; errors if the shapes differ.
    pub fn plus(&self, other: &Mat<T>) -> Result<Mat<T>> {
        self.as_ref().plus(&other.as_ref())
    }

    /// Element-wise difference; errors if the shapes differ.
    pub fn minus(&self, other: &Mat<T>) -> Result<Mat<T>> {
        self.as_ref().minus(&other.as_ref())
    }

    /// Hadamard product; errors if the shapes differ.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: &Mat<T>) -> Result<Mat<T>> {
        self.as_ref().mul(&other.as_ref())
    }

    /// Element-wise quotient; errors if the shapes differ.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, other: &Mat<T>) -> Result<Mat<T>> {
        self.as_ref().div(&other.as_ref())
    }

    /// Matrix product; errors unless `self.cols == other.rows`.
    pub fn times(&self, other: &Mat<T>) -> Result<Mat<T>> {
        self.as_ref().times(&other.as_ref())
    }

    pub fn sum(&self) -> T {
        self.as_ref().sum()
    }

    pub fn sum_at<I: LogicalIndex>(&self, indexes: &[I]) -> T {
        self.as_ref().sum_at(indexes)
    }

    /// Multiply every element by `alpha`.
    pub fn scale(&mut self, alpha: T) -> &mut Self {
        self.as_mut().scale(alpha);
        self
    }

    /// Multiply the elements at `indexes` by `alpha`.
    ///
    /// ```
    /// use dense_matrix::FloatMatrix;
    ///
    /// let mut a = FloatMatrix::with_value(2, 2, 1.0);
    /// a.scale_at(5.0, &[-1]);
    /// assert_eq!(a.as_slice(), &[1.0, 1.0, 1.0, 5.0]);
    /// ```
    pub fn scale_at<I: LogicalIndex>(&mut self, alpha: T, indexes: &[I]) -> &mut Self {
        self.as_mut().scale_at(alpha, indexes);
        self
    }

    /// Add `x` to every element.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&mut self, x: T) -> &mut Self {
        self.as_mut().add(x);
        self
    }

    /// Add `x` to the elements at `indexes`.
    pub fn add_at<I: LogicalIndex>(&mut self, x: T, indexes: &[I]) -> &mut Self {
        self.as_mut().add_at(x, indexes);
        self
    }

    /// See [`MatMut::scale_indexes`].
    pub fn scale_indexes<I: LogicalIndex>(&mut self, indexes: &[I], values: &[T]) -> &mut Self {
        self.as_mut().scale_indexes(indexes, values);
        self
    }

    pub fn try_scale_indexes<I: LogicalIndex>(
        &mut self,
        indexes: &[I],
        values: &[T],
    ) -> Result<&mut Self> {
        self.as_mut().try_scale_indexes(indexes, values)?;
        Ok(self)
    }

    /// See [`MatMut::add_indexes`].
    pub fn add_indexes<I: LogicalIndex>(&mut self, indexes: &[I], values: &[T]) -> &mut Self {
        self.as_mut().add_indexes(indexes, values);
        self
    }

    pub fn try_add_indexes<I: LogicalIndex>(
        &mut self,
        indexes: &[I],
        values: &[T],
    ) -> Result<&mut Self> {
        self.as_mut().try_add_indexes(indexes, values)?;
        Ok(self)
    }
}

impl<T: RealScalar> Mat<T> {
    pub fn max(&self) -> T {
        self.as_ref().max()
    }

    pub fn max_at<I: LogicalIndex>(&self, indexes: &[I]) -> T {
        self.as_ref().max_at(indexes)
    }

    pub fn min(&self) -> T {
        self.as_ref().min()
    }

    pub fn min_at<I: LogicalIndex>(&self, indexes: &[I]) -> T {
        self.as_ref().min_at(indexes)
    }

    /// Replace every element by its remainder modulo `x`.
    pub fn modulo(&mut self, x: T) -> &mut Self {
        self.as_mut().modulo(x);
        self
    }

    pub fn modulo_at<I: LogicalIndex>(&mut self, x: T, indexes: &[I]) -> &mut Self {
        self.as_mut().modulo_at(x, indexes);
        self
    }
}
