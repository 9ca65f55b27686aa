//! Free-function API.

use dense_types::DenseScalar;

use crate::error::{MatrixError, Result};
use crate::mat::{Mat, MatMut, MatRef};

/// Reshape `m` to `rows x cols` if the element count allows it.
///
/// A mismatched request is ignored; see [`Mat::try_reshape`] for the
/// checked form.
pub fn reshape<T: DenseScalar>(m: &mut Mat<T>, rows: usize, cols: usize) {
    m.reshape(rows, cols);
}

/// Copy `y` into `x` element by element in column-major order.
///
/// Only the element counts have to agree, not the shapes, so a column can
/// be copied into a row. Nothing is copied when the counts differ.
///
/// ```
/// use dense_matrix::{set, FloatMatrix};
///
/// let src = FloatMatrix::from_col_major(&[1.0, 2.0, 3.0], 3, 1);
/// let mut dst = FloatMatrix::zeros(1, 3);
/// set(dst.as_mut(), src.as_ref());
/// assert_eq!(dst.as_slice(), &[1.0, 2.0, 3.0]);
/// ```
pub fn set<T: DenseScalar>(x: MatMut<'_, T>, y: MatRef<'_, T>) {
    if let Err(err) = try_set(x, y) {
        tracing::debug!(%err, "set ignored");
    }
}

/// Checked form of [`set`].
pub fn try_set<T: DenseScalar>(mut x: MatMut<'_, T>, y: MatRef<'_, T>) -> Result<()> {
    let n = x.dims.num_elements();
    if n != y.dims.num_elements() {
        return Err(MatrixError::ElementCount {
            expected: n,
            found: y.dims.num_elements(),
        });
    }
    let mut k = 0;
    x.apply_in_place(|_| {
        let v = y.element(k);
        k += 1;
        v
    });
    Ok(())
}
