//! Element-wise apply framework.
//!
//! Three shapes of transform, each optionally reading from a companion
//! matrix instead of the receiver:
//!
//! - [`MatMut::apply`]: `A[k] = f(S[k])` for every element
//! - [`MatMut::apply_to_indexes`]: the same, restricted to an index set
//! - [`MatMut::apply_const`]: `A[k] = f(S[k], x)` for a fixed `x`
//!
//! A companion must have the receiver's shape; otherwise the call fails and
//! the receiver is left untouched. Elements are visited in column-major
//! order. Scaling, shifting, remainders and the transcendental functions
//! are all built on the in-place forms below.

use dense_types::DenseScalar;

use crate::error::{shape_mismatch, Result};
use crate::mat::{Mat, MatMut, MatRef};

fn check_companion<T: DenseScalar>(
    op: &'static str,
    target: &MatMut<'_, T>,
    source: &MatRef<'_, T>,
) -> Result<()> {
    if target.dims.size() != source.dims.size() {
        return Err(shape_mismatch(op, target.dims.shape(), source.dims.shape()));
    }
    Ok(())
}

impl<'a, T: DenseScalar> MatMut<'a, T> {
    /// Compute `A = f(source)` element-wise, or `A = f(A)` without a source.
    ///
    /// ```
    /// use dense_matrix::FloatMatrix;
    ///
    /// let src = FloatMatrix::with_value(2, 2, 4.0);
    /// let mut a = FloatMatrix::zeros(2, 2);
    /// a.as_mut().apply(Some(src.as_ref()), f64::sqrt).unwrap();
    /// assert_eq!(a[(1, 1)], 2.0);
    /// ```
    pub fn apply<F>(&mut self, source: Option<MatRef<'_, T>>, f: F) -> Result<&mut Self>
    where
        F: FnMut(T) -> T,
    {
        match source {
            Some(src) => {
                check_companion("apply", self, &src)?;
                self.apply_from(src, f);
            }
            None => self.apply_in_place(f),
        }
        Ok(self)
    }

    /// Compute `A[k] = f(source[k])` for the column-major positions in
    /// `indexes` only.
    ///
    /// Positions are used as given; negative-index normalization happens in
    /// the callers that accept them.
    pub fn apply_to_indexes<F>(
        &mut self,
        source: Option<MatRef<'_, T>>,
        indexes: &[usize],
        f: F,
    ) -> Result<&mut Self>
    where
        F: FnMut(T) -> T,
    {
        match source {
            Some(src) => {
                check_companion("apply_to_indexes", self, &src)?;
                self.apply_at_from(src, indexes.iter().copied(), f);
            }
            None => self.apply_at(indexes.iter().copied(), f),
        }
        Ok(self)
    }

    /// Compute `A = f(source, x)` element-wise, or `A = f(A, x)` without a
    /// source.
    pub fn apply_const<F>(&mut self, source: Option<MatRef<'_, T>>, mut f: F, x: T) -> Result<&mut Self>
    where
        F: FnMut(T, T) -> T,
    {
        match source {
            Some(src) => {
                check_companion("apply_const", self, &src)?;
                self.apply_from(src, |v| f(v, x));
            }
            None => self.apply_const_in_place(f, x),
        }
        Ok(self)
    }

    pub(crate) fn apply_const_in_place<F>(&mut self, mut f: F, x: T)
    where
        F: FnMut(T, T) -> T,
    {
        self.apply_in_place(|v| f(v, x));
    }

    pub(crate) fn apply_const_at<I, F>(&mut self, indexes: I, mut f: F, x: T)
    where
        I: IntoIterator<Item = usize>,
        F: FnMut(T, T) -> T,
    {
        self.apply_at(indexes, |v| f(v, x));
    }

    pub(crate) fn apply_in_place<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        let (rows, cols, step) = (self.dims.rows(), self.dims.cols(), self.dims.step());
        for j in 0..cols {
            for v in &mut self.data[j * step..j * step + rows] {
                *v = f(*v);
            }
        }
    }

    pub(crate) fn apply_from<F>(&mut self, source: MatRef<'_, T>, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        let (rows, cols) = (self.dims.rows(), self.dims.cols());
        let (ts, ss) = (self.dims.step(), source.dims.step());
        for j in 0..cols {
            let target = &mut self.data[j * ts..j * ts + rows];
            let src = &source.data[j * ss..j * ss + rows];
            for (t, &s) in target.iter_mut().zip(src) {
                *t = f(s);
            }
        }
    }

    pub(crate) fn apply_at<I, F>(&mut self, indexes: I, mut f: F)
    where
        I: IntoIterator<Item = usize>,
        F: FnMut(T) -> T,
    {
        let n = self.dims.num_elements();
        for k in indexes {
            assert!(k < n, "index {} out of range for {} elements", k, n);
            let r = self.dims.real_index(k);
            self.data[r] = f(self.data[r]);
        }
    }

    pub(crate) fn apply_at_from<I, F>(&mut self, source: MatRef<'_, T>, indexes: I, mut f: F)
    where
        I: IntoIterator<Item = usize>,
        F: FnMut(T) -> T,
    {
        let n = self.dims.num_elements();
        for k in indexes {
            assert!(k < n, "index {} out of range for {} elements", k, n);
            let r = self.dims.real_index(k);
            self.data[r] = f(source.element(k));
        }
    }
}

impl<T: DenseScalar> Mat<T> {
    /// Compute `A = f(C)` element-wise; `A = f(A)` when `source` is `None`.
    ///
    /// Fails without touching `self` if `source` differs in shape.
    pub fn apply<F>(&mut self, source: Option<&Mat<T>>, f: F) -> Result<&mut Self>
    where
        F: FnMut(T) -> T,
    {
        self.as_mut().apply(source.map(Mat::as_ref), f)?;
        Ok(self)
    }

    /// Compute `A[k] = f(C[k])` for every position in `indexes`.
    pub fn apply_to_indexes<F>(
        &mut self,
        source: Option<&Mat<T>>,
        indexes: &[usize],
        f: F,
    ) -> Result<&mut Self>
    where
        F: FnMut(T) -> T,
    {
        self.as_mut()
            .apply_to_indexes(source.map(Mat::as_ref), indexes, f)?;
        Ok(self)
    }

    /// Compute `A = f(C, x)` element-wise.
    pub fn apply_const<F>(&mut self, source: Option<&Mat<T>>, f: F, x: T) -> Result<&mut Self>
    where
        F: FnMut(T, T) -> T,
    {
        self.as_mut().apply_const(source.map(Mat::as_ref), f, x)?;
        Ok(self)
    }
}

impl<'a, T: DenseScalar> MatRef<'a, T> {
    /// New matrix `f(self)`, built by applying into a fresh zero matrix.
    pub(crate) fn map_new<F>(&self, f: F) -> Mat<T>
    where
        F: FnMut(T) -> T,
    {
        let mut out = Mat::zeros(self.dims.rows(), self.dims.cols());
        out.as_mut().apply_from(*self, f);
        out
    }

    /// Element-wise `exp`, as a new matrix.
    pub fn exp(&self) -> Mat<T> {
        self.map_new(T::exp)
    }

    /// Element-wise natural logarithm, as a new matrix.
    pub fn log(&self) -> Mat<T> {
        self.map_new(T::ln)
    }

    /// Element-wise power `x^e`, as a new matrix.
    pub fn pow(&self, e: T) -> Mat<T> {
        self.map_new(|v| v.pow(e))
    }
}

impl<T: DenseScalar> Mat<T> {
    /// Element-wise `exp`, as a new matrix.
    pub fn exp(&self) -> Mat<T> {
        self.as_ref().exp()
    }

    /// Element-wise natural logarithm, as a new matrix.
    pub fn log(&self) -> Mat<T> {
        self.as_ref().log()
    }

    /// Element-wise power `x^e`, as a new matrix.
    pub fn pow(&self, e: T) -> Mat<T> {
        self.as_ref().pow(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use dense_types::Complex64;

    #[test]
    fn test_apply_in_place() {
        let mut a = Mat::from_col_major(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        a.apply(None, |v| v * 10.0).unwrap();
        assert_eq!(a.as_slice(), &[10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_apply_from_source() {
        let src = Mat::from_col_major(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        let mut a = Mat::<f64>::zeros(2, 2);
        a.apply(Some(&src), |v| v + 1.0).unwrap();
        assert_eq!(a.as_slice(), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!(src.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_apply_shape_mismatch_leaves_receiver() {
        let src = Mat::<f64>::with_value(3, 2, 1.0);
        let mut a = Mat::<f64>::with_value(2, 3, 7.0);
        let err = a.apply(Some(&src), |v| v + 1.0).unwrap_err();
        assert!(matches!(err, MatrixError::ShapeMismatch { op: "apply", .. }));
        assert!(a.as_slice().iter().all(|&v| v == 7.0));

        let err = a.apply_to_indexes(Some(&src), &[0], |v| v).unwrap_err();
        assert!(matches!(err, MatrixError::ShapeMismatch { .. }));
        let err = a.apply_const(Some(&src), |v, x| v * x, 2.0).unwrap_err();
        assert!(matches!(err, MatrixError::ShapeMismatch { op: "apply_const", .. }));
        assert!(a.as_slice().iter().all(|&v| v == 7.0));
    }

    #[test]
    fn test_apply_to_indexes_only_touches_set() {
        let mut a = Mat::<f64>::zeros(3, 3);
        a.apply_to_indexes(None, &[0, 4, 8], |v| v + 1.0).unwrap();
        assert_eq!(a.as_slice(), Mat::<f64>::identity(3).as_slice());
    }

    #[test]
    fn test_apply_to_indexes_from_source() {
        let src = Mat::from_fn(2, 2, |i, j| (10 * i + j) as f64);
        let mut a = Mat::<f64>::with_value(2, 2, -1.0);
        a.apply_to_indexes(Some(&src), &[1, 2], |v| v * 2.0).unwrap();
        assert_eq!(a.as_slice(), &[-1.0, 20.0, 2.0, -1.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_apply_to_indexes_out_of_range() {
        let mut a = Mat::<f64>::zeros(3, 3);
        a.submatrix_mut(0, 0, 2, 2)
            .apply_to_indexes(None, &[4], |v| v)
            .unwrap();
    }

    #[test]
    fn test_apply_to_empty_indexes() {
        let mut a = Mat::<f64>::with_value(2, 2, 3.0);
        a.apply_to_indexes(None, &[], |_| 0.0).unwrap();
        assert!(a.as_slice().iter().all(|&v| v == 3.0));
    }

    #[test]
    fn test_apply_const() {
        let mut a = Mat::from_col_major(&[1.0, 2.0, 3.0], 3, 1);
        a.apply_const(None, f64::powf, 2.0).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_apply_visits_column_major_order() {
        let mut a = Mat::<f64>::zeros(2, 3);
        let mut counter = 0.0;
        a.apply(None, |_| {
            counter += 1.0;
            counter
        })
        .unwrap();
        assert_eq!(a[(0, 0)], 1.0);
        assert_eq!(a[(1, 0)], 2.0);
        assert_eq!(a[(0, 1)], 3.0);
        assert_eq!(a[(1, 2)], 6.0);
    }

    #[test]
    fn test_apply_on_strided_view() {
        let mut a = Mat::<f64>::zeros(3, 3);
        let src = Mat::from_col_major(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        a.submatrix_mut(1, 1, 2, 2)
            .apply(Some(src.as_ref()), |v| v)
            .unwrap();
        assert_eq!(a.as_slice(), &[0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 0.0, 3.0, 4.0]);

        // Positions on a view are its own column-major positions
        a.submatrix_mut(1, 1, 2, 2)
            .apply_to_indexes(None, &[3], |v| -v)
            .unwrap();
        assert_eq!(a[(2, 2)], -4.0);
    }

    #[test]
    fn test_exp_log_pow() {
        let a = Mat::from_col_major(&[0.0, 1.0, 2.0, 3.0], 2, 2);
        let e = a.exp();
        assert_eq!(e[(0, 0)], 1.0);
        assert!(e.log().allclose(&a, 1e-12));
        let p = a.pow(2.0);
        assert_eq!(p.as_slice(), &[0.0, 1.0, 4.0, 9.0]);
        assert_eq!(a.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_complex_exp() {
        let a = Mat::from_col_major(&[Complex64::new(0.0, std::f64::consts::PI)], 1, 1);
        let e = a.exp();
        assert!((e[(0, 0)] - Complex64::new(-1.0, 0.0)).norm() < 1e-12);
    }
}
