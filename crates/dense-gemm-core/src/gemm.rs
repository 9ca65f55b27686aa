use std::ops::Range;

use dense_types::DenseScalar;

use crate::kernel::{axpy, MultiplyKernel, SparseColumnKernel, ViewportKernel};
use crate::tiling::{BlockIterator, KernelKind, KernelParams, VLEN_DEFAULT};

/// Blocked product `C[rows, cols] += alpha * A[rows, :] * B[:, cols]`.
///
/// C and A have `m` rows, A has `p` columns and B has `p` rows, all packed
/// column-major. Only the C block `rows x cols` is touched, reading the
/// matching row panel of A and column panel of B. Zero entries of B skip
/// their column update, as in [`mat_mult`](crate::mat_mult).
///
/// # Panics
/// Panics if a buffer is shorter than the block requires.
#[allow(clippy::too_many_arguments)]
pub fn mat_mult_block<T: DenseScalar>(
    c: &mut [T],
    a: &[T],
    b: &[T],
    alpha: T,
    m: usize,
    p: usize,
    cols: Range<usize>,
    rows: Range<usize>,
) {
    mat_mult_viewport(c, a, b, alpha, m, p, cols, rows, p);
}

/// Blocked product with the inner dimension split into viewports.
///
/// Same contract as [`mat_mult_block`], but the inner dimension `p` is
/// walked in chunks of `vlen` so the `rows x vlen` slab of A stays hot
/// while every column in `cols` consumes it. `vlen == 0` selects
/// [`VLEN_DEFAULT`].
#[allow(clippy::too_many_arguments)]
pub fn mat_mult_viewport<T: DenseScalar>(
    c: &mut [T],
    a: &[T],
    b: &[T],
    alpha: T,
    m: usize,
    p: usize,
    cols: Range<usize>,
    rows: Range<usize>,
    vlen: usize,
) {
    if cols.is_empty() || rows.is_empty() || p == 0 {
        return;
    }
    debug_assert!(rows.end <= m, "row block {:?} exceeds {} rows", rows, m);
    debug_assert!(c.len() >= cols.end * m, "C too short for columns {:?}", cols);
    debug_assert!(a.len() >= m * p, "A holds {} < {} elements", a.len(), m * p);
    debug_assert!(b.len() >= cols.end * p, "B too short for columns {:?}", cols);

    let vlen = if vlen == 0 { VLEN_DEFAULT } else { vlen };

    for (vp_start, vp_len) in BlockIterator::new(p, vlen) {
        for j in cols.clone() {
            let c_col = &mut c[j * m + rows.start..j * m + rows.end];
            let b_col = &b[j * p + vp_start..j * p + vp_start + vp_len];

            for (offset, &beta) in b_col.iter().enumerate() {
                if beta.is_zero() {
                    continue;
                }
                let k = vp_start + offset;
                let a_col = &a[k * m + rows.start..k * m + rows.end];
                axpy(c_col, a_col, beta * alpha);
            }
        }
    }
}

/// Accumulate `C[:, cols] += A * B[:, cols]` through the kernel selected by
/// `params`.
pub fn gemm_dispatch<T: DenseScalar>(
    params: &KernelParams,
    cols: Range<usize>,
    m: usize,
    p: usize,
    c: &mut [T],
    a: &[T],
    b: &[T],
) {
    match params.kernel {
        KernelKind::SparseColumn => run(&SparseColumnKernel, cols, m, p, c, a, b),
        KernelKind::Viewport => run(&ViewportKernel { vlen: params.vlen }, cols, m, p, c, a, b),
    }
}

fn run<T: DenseScalar, K: MultiplyKernel<T>>(
    kernel: &K,
    cols: Range<usize>,
    m: usize,
    p: usize,
    c: &mut [T],
    a: &[T],
    b: &[T],
) {
    tracing::trace!(kernel = kernel.name(), m, p, ?cols, "multiply");
    kernel.execute(cols, m, p, c, a, b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::mat_mult;

    fn operands(m: usize, p: usize, n: usize) -> (Vec<f64>, Vec<f64>) {
        let a = (0..m * p).map(|i| ((i * 5) % 9) as f64 - 4.0).collect();
        let b = (0..p * n)
            .map(|i| if i % 3 == 2 { 0.0 } else { (i % 4) as f64 + 0.5 })
            .collect();
        (a, b)
    }

    #[test]
    fn test_block_full_matches_mat_mult() {
        let (m, p, n) = (6, 5, 4);
        let (a, b) = operands(m, p, n);
        let mut expected = vec![0.0f64; m * n];
        let mut actual = vec![0.0f64; m * n];

        mat_mult(0, n, m, p, &mut expected, &a, &b);
        mat_mult_block(&mut actual, &a, &b, 1.0, m, p, 0..n, 0..m);

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_block_scales_by_alpha() {
        let (m, p, n) = (3, 3, 3);
        let (a, b) = operands(m, p, n);
        let mut once = vec![0.0f64; m * n];
        let mut scaled = vec![0.0f64; m * n];

        mat_mult_block(&mut once, &a, &b, 1.0, m, p, 0..n, 0..m);
        mat_mult_block(&mut scaled, &a, &b, -2.0, m, p, 0..n, 0..m);

        for (s, o) in scaled.iter().zip(once.iter()) {
            assert_eq!(*s, -2.0 * o);
        }
    }

    #[test]
    fn test_block_touches_only_block() {
        let (m, p, n) = (4, 3, 4);
        let (a, b) = operands(m, p, n);
        let mut full = vec![0.0f64; m * n];
        let mut block = vec![0.0f64; m * n];

        mat_mult(0, n, m, p, &mut full, &a, &b);
        mat_mult_block(&mut block, &a, &b, 1.0, m, p, 1..3, 1..3);

        for j in 0..n {
            for i in 0..m {
                let inside = (1..3).contains(&i) && (1..3).contains(&j);
                let expected = if inside { full[j * m + i] } else { 0.0 };
                assert_eq!(block[j * m + i], expected, "C[{}, {}]", i, j);
            }
        }
    }

    #[test]
    fn test_viewport_lengths_agree() {
        let (m, p, n) = (4, 31, 3);
        let (a, b) = operands(m, p, n);
        let mut expected = vec![0.0f64; m * n];
        mat_mult(0, n, m, p, &mut expected, &a, &b);

        for vlen in [0, 1, 7, 30, 31, 100] {
            let mut c = vec![0.0f64; m * n];
            mat_mult_viewport(&mut c, &a, &b, 1.0, m, p, 0..n, 0..m, vlen);
            assert_eq!(c, expected, "vlen = {}", vlen);
        }
    }

    #[test]
    fn test_dispatch_kernels_agree() {
        let (m, p, n) = (5, 9, 6);
        let (a, b) = operands(m, p, n);
        let mut column = vec![0.0f64; m * n];
        let mut viewport = vec![0.0f64; m * n];

        gemm_dispatch(&KernelParams::DEFAULT, 0..n, m, p, &mut column, &a, &b);
        gemm_dispatch(
            &KernelParams::new(KernelKind::Viewport, 2),
            0..n,
            m,
            p,
            &mut viewport,
            &a,
            &b,
        );

        assert_eq!(column, viewport);
    }

    #[test]
    fn test_dispatch_empty_columns() {
        let mut c = vec![1.0f64; 4];
        gemm_dispatch(&KernelParams::DEFAULT, 0..0, 2, 2, &mut c, &[1.0; 4], &[1.0; 4]);
        assert_eq!(c, vec![1.0; 4]);
    }
}
