//! Property tests for arithmetic, index sets and the multiply kernel.

use dense_matrix::{mat_mult, make_diagonal_set, FloatMatrix, Matrix};
use proptest::prelude::*;

/// Values with a good share of exact zeros, so the kernel's skip path runs.
fn sparse_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        2 => -100.0f64..100.0,
    ]
}

fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = FloatMatrix> {
    prop::collection::vec(sparse_value(), rows * cols)
        .prop_map(move |data| FloatMatrix::from_vec(data, rows, cols))
}

fn matrix_pair() -> impl Strategy<Value = (FloatMatrix, FloatMatrix)> {
    (1..8usize, 1..8usize).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c)))
}

fn product_operands() -> impl Strategy<Value = (FloatMatrix, FloatMatrix)> {
    (1..10usize, 1..10usize, 1..10usize).prop_flat_map(|(m, p, n)| (matrix(m, p), matrix(p, n)))
}

fn naive_product(a: &FloatMatrix, b: &FloatMatrix) -> FloatMatrix {
    FloatMatrix::from_fn(a.rows(), b.cols(), |i, j| {
        (0..a.cols()).map(|k| a[(i, k)] * b[(k, j)]).sum()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_plus_minus_round_trip((a, b) in matrix_pair()) {
        let back = a.plus(&b).unwrap().minus(&b).unwrap();
        prop_assert!(back.allclose(&a, 1e-9), "{} vs {}", back, a);
    }

    #[test]
    fn prop_scale_by_one_is_identity((a, _) in matrix_pair()) {
        let mut scaled = a.clone();
        scaled.scale(1.0);
        prop_assert_eq!(scaled, a);
    }

    #[test]
    fn prop_diagonal_set(r in 0..32usize) {
        let set = make_diagonal_set(r, r);
        prop_assert_eq!(set.len(), r);
        for (i, &k) in set.iter().enumerate() {
            prop_assert_eq!(k, i * (r + 1));
        }
    }

    #[test]
    fn prop_kernel_matches_naive((a, b) in product_operands()) {
        let (m, p) = a.size();
        let n = b.cols();
        let mut c = vec![0.0; m * n];
        mat_mult(0, n, m, p, &mut c, a.as_slice(), b.as_slice());
        let kernel = FloatMatrix::from_vec(c, m, n);
        prop_assert!(kernel.allclose(&naive_product(&a, &b), 1e-9));
        prop_assert!(a.times(&b).unwrap().allclose(&kernel, 1e-9));
    }

    #[test]
    fn prop_kernel_accumulates((a, b) in product_operands()) {
        let once = a.matmul(&b).unwrap();
        let mut twice = FloatMatrix::zeros(a.rows(), b.cols());
        a.mul_into(&b, &mut twice).unwrap();
        a.mul_into(&b, &mut twice).unwrap();
        let mut doubled = once.clone();
        doubled.scale(2.0);
        prop_assert!(twice.allclose(&doubled, 1e-9));
    }

    #[test]
    fn prop_scale_negative_index((a, _) in matrix_pair(), alpha in 2.0f64..5.0) {
        let mut scaled = a.clone();
        scaled.scale_at(alpha, &[-1]);
        let n = a.num_elements();
        for k in 0..n {
            let expected = if k == n - 1 { a.as_slice()[k] * alpha } else { a.as_slice()[k] };
            prop_assert_eq!(scaled.as_slice()[k], expected);
        }
    }

    #[test]
    fn prop_max_min_bound_every_element((a, _) in matrix_pair()) {
        let (hi, lo) = (a.max(), a.min());
        prop_assert!(a.as_slice().iter().all(|&v| lo <= v && v <= hi));
        prop_assert!(a.as_slice().contains(&hi));
        prop_assert!(a.as_slice().contains(&lo));
    }
}

#[test]
fn test_diagonal_operand_scales_columns() {
    const N: usize = 8;
    let a = FloatMatrix::with_value(N, N, 2.0);
    let b = FloatMatrix::diagonal(N, 3.5);
    let mut c = vec![0.0; N * N];
    mat_mult(0, N, N, N, &mut c, a.as_slice(), b.as_slice());
    assert!(c.iter().all(|&v| v == 7.0));
}

#[test]
fn test_mismatched_operands_fail() {
    let a = FloatMatrix::zeros(2, 3);
    let b = FloatMatrix::zeros(3, 2);
    assert!(a.plus(&b).is_err());
    assert!(a.minus(&b).is_err());
    assert!(a.mul(&b).is_err());
    assert!(a.div(&b).is_err());
    assert!(a.times(&a).is_err());
}
