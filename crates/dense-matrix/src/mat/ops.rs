//! Operator implementations for matrix types.
//!
//! `*` is the matrix product and yields a [`Result`], since operand shapes
//! are only known at run time. Element-wise sums stay named methods
//! (`plus`, `minus`); `add` is already the in-place scalar shift.

use std::ops::{Mul, Neg};

use dense_types::DenseScalar;

use crate::error::Result;

use super::{Mat, MatRef};

// &MatRef * &MatRef, row-column product that accepts strided views
impl<'a, 'b, T: DenseScalar> Mul<&'b MatRef<'b, T>> for &'a MatRef<'a, T> {
    type Output = Result<Mat<T>>;

    fn mul(self, rhs: &'b MatRef<'b, T>) -> Result<Mat<T>> {
        self.times(rhs)
    }
}

// &Mat * &Mat, through the configured multiply kernel
impl<T: DenseScalar> Mul<&Mat<T>> for &Mat<T> {
    type Output = Result<Mat<T>>;

    fn mul(self, rhs: &Mat<T>) -> Result<Mat<T>> {
        self.matmul(rhs)
    }
}

impl<T: DenseScalar> Neg for &Mat<T> {
    type Output = Mat<T>;

    fn neg(self) -> Mat<T> {
        self.as_ref().map_new(|v| -v)
    }
}

impl<T: DenseScalar> Neg for Mat<T> {
    type Output = Mat<T>;

    fn neg(mut self) -> Mat<T> {
        self.as_mut().apply_in_place(|v| -v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn test_mat_mul_mat() {
        let a = Mat::from_row_major(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = Mat::from_row_major(&[0.0, 1.0, 1.0, 0.0], 2, 2);
        let c = (&a * &b).unwrap();
        assert_eq!(c, Mat::from_row_major(&[2.0, 1.0, 4.0, 3.0], 2, 2));
    }

    #[test]
    fn test_matref_mul_matref() {
        let big = Mat::from_fn(3, 3, |i, j| (i + j) as f64);
        let a = big.submatrix(0, 0, 2, 3);
        let b = big.submatrix(0, 1, 3, 1);
        let c = (&a * &b).unwrap();
        assert_eq!(c.as_slice(), &[8.0, 14.0]);
    }

    #[test]
    fn test_mul_dimension_mismatch() {
        let a = Mat::<f64>::zeros(2, 3);
        assert!(matches!(&a * &a, Err(MatrixError::InnerDimension { .. })));
        assert!((&a.as_ref() * &a.as_ref()).is_err());
    }

    #[test]
    fn test_neg() {
        let a = Mat::from_col_major(&[1.0, -2.0], 2, 1);
        let n = -&a;
        assert_eq!(n.as_slice(), &[-1.0, 2.0]);
        assert_eq!((-n).as_slice(), a.as_slice());
    }
}
