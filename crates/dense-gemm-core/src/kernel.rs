use std::ops::Range;

use dense_types::DenseScalar;

/// Trait for column-major multiply kernels.
///
/// A kernel accumulates `C[:, cols] += A * B[:, cols]` where A is `m x p`,
/// B has `p` rows and C has `m` rows. All three buffers are packed
/// column-major (leading dimension equal to the row count) and allocated
/// by the caller. Kernels never zero C.
pub trait MultiplyKernel<T: DenseScalar> {
    /// Name used in logs and backend descriptions.
    fn name(&self) -> &'static str;

    /// Accumulate the product into the output columns `cols`.
    ///
    /// Buffers must hold at least `m * p` (A), `p * cols.end` (B) and
    /// `m * cols.end` (C) elements.
    fn execute(&self, cols: Range<usize>, m: usize, p: usize, c: &mut [T], a: &[T], b: &[T]);
}

/// Unblocked kernel: one pass over the inner dimension per output column.
#[derive(Debug, Default, Clone, Copy)]
pub struct SparseColumnKernel;

impl<T: DenseScalar> MultiplyKernel<T> for SparseColumnKernel {
    fn name(&self) -> &'static str {
        "sparse-column"
    }

    fn execute(&self, cols: Range<usize>, m: usize, p: usize, c: &mut [T], a: &[T], b: &[T]) {
        mat_mult(cols.start, cols.end, m, p, c, a, b);
    }
}

/// Kernel splitting the inner dimension into viewports of `vlen`.
#[derive(Debug, Clone, Copy)]
pub struct ViewportKernel {
    pub vlen: usize,
}

impl<T: DenseScalar> MultiplyKernel<T> for ViewportKernel {
    fn name(&self) -> &'static str {
        "viewport"
    }

    fn execute(&self, cols: Range<usize>, m: usize, p: usize, c: &mut [T], a: &[T], b: &[T]) {
        crate::gemm::mat_mult_viewport(c, a, b, T::one(), m, p, cols, 0..m, self.vlen);
    }
}

/// `c += a * coeff`, element by element.
#[inline(always)]
pub(crate) fn axpy<T: DenseScalar>(c: &mut [T], a: &[T], coeff: T) {
    debug_assert_eq!(c.len(), a.len());
    for (ci, &ai) in c.iter_mut().zip(a) {
        *ci += ai * coeff;
    }
}

/// Column-major matrix product `C[:, s..n] += A * B[:, s..n]`.
///
/// `s` is the first and `n` one past the last output column, `m` the rows
/// of A and C, `p` the rows of B (columns of A). For a full product call
/// with `s = 0` and `n = C.cols`.
///
/// Whenever `B[k, j]` is exactly zero the whole update of column `j` by
/// column `k` of A is skipped; the A cursor still moves on to column
/// `k + 1`, so runs of zeros in B land on the right column of A.
///
/// This is an accumulation. Zero `c` first to get `C = A * B`.
///
/// # Panics
/// Panics if a buffer is shorter than the stated dimensions require.
///
/// # Example
///
/// ```
/// use dense_gemm_core::mat_mult;
///
/// // A = [[1, 2], [3, 4]] column-major, B = diag(1, 0)
/// let a = [1.0, 3.0, 2.0, 4.0];
/// let b = [1.0, 0.0, 0.0, 0.0];
/// let mut c = [0.0f64; 4];
///
/// mat_mult(0, 2, 2, 2, &mut c, &a, &b);
/// assert_eq!(c, [1.0, 3.0, 0.0, 0.0]);
/// ```
pub fn mat_mult<T: DenseScalar>(
    s: usize,
    n: usize,
    m: usize,
    p: usize,
    c: &mut [T],
    a: &[T],
    b: &[T],
) {
    if n <= s || m == 0 || p == 0 {
        return;
    }
    debug_assert!(c.len() >= n * m, "C holds {} < {} elements", c.len(), n * m);
    debug_assert!(a.len() >= m * p, "A holds {} < {} elements", a.len(), m * p);
    debug_assert!(b.len() >= n * p, "B holds {} < {} elements", b.len(), n * p);

    let c_cols = c[s * m..n * m].chunks_exact_mut(m);
    let b_cols = b[s * p..n * p].chunks_exact(p);

    for (c_col, b_col) in c_cols.zip(b_cols) {
        // A cursor advances one column per k whether or not it is used
        for (a_col, &beta) in a[..m * p].chunks_exact(m).zip(b_col) {
            if beta.is_zero() {
                continue;
            }
            axpy(c_col, a_col, beta);
        }
    }
}
