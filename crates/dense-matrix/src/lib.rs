//! Dense column-major matrices over real and complex scalars.
//!
//! Elements are stored column by column; element `(i, j)` of a matrix with
//! leading stride `step` lives at offset `j * step + i`. Owned matrices are
//! always packed (`step == rows`), views may select a strided block of a
//! larger buffer.
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Mat<T>`] | owned, packed matrix |
//! | [`MatRef<'a, T>`] | borrowed, read-only view |
//! | [`MatMut<'a, T>`] | borrowed, writable view |
//! | [`FloatMatrix`] | `Mat<f64>` |
//! | [`ComplexMatrix`] | `Mat<Complex64>` |
//!
//! # Quick Start
//!
//! ```
//! use dense_matrix::{FloatMatrix, Matrix};
//!
//! let a = FloatMatrix::from_row_major(&[1.0, 2.0, 3.0, 4.0], 2, 2);
//! let b = FloatMatrix::diagonal(2, 10.0);
//!
//! // Element-wise operations fail on a shape mismatch instead of panicking
//! let sum = a.plus(&b).unwrap();
//! assert_eq!(sum[(1, 1)], 14.0);
//! assert!(a.plus(&FloatMatrix::zeros(3, 2)).is_err());
//!
//! // Matrix product through the multiply kernel
//! let c = a.matmul(&b).unwrap();
//! assert_eq!(c.size(), (2, 2));
//! assert_eq!(c[(0, 1)], 20.0);
//! ```
//!
//! # Index sets
//!
//! Subset operations take lists of column-major positions. Builders derive
//! them from a shape; negative positions count from the end.
//!
//! ```
//! use dense_matrix::{diagonal_indexes, FloatMatrix};
//!
//! let mut a = FloatMatrix::with_value(3, 3, 1.0);
//! let diag = diagonal_indexes(&a);
//! a.scale_at(2.0, &diag).add_at(5.0, &[-1]);
//!
//! assert_eq!(a.sum_at(&diag), 2.0 + 2.0 + 7.0);
//! assert_eq!(a.max(), 7.0);
//! ```
//!
//! # Configuration
//!
//! The kernel behind [`Mat::matmul`] is chosen once per process from the
//! `DENSE_GEMM_KERNEL` (`column` or `viewport`) and `DENSE_GEMM_VLEN`
//! environment variables. [`Mat::mul_into_with`] takes explicit
//! [`KernelParams`] instead.
//!
//! ```
//! use dense_matrix::Backend;
//!
//! println!("Using: {}", Backend::description());
//! ```

pub mod error;
pub mod index;
pub mod mat;
pub mod storage;

mod api;
mod apply;
mod arith;
mod backend;
mod fmt;

// Public API
pub use api::{reshape, set, try_set};
pub use backend::{version_info, Backend};
pub use error::{MatrixError, Result, Shape};
pub use index::{
    column_indexes, diagonal_indexes, make_diagonal_set, make_index_set, normalize_index,
    row_indexes, LogicalIndex,
};
pub use mat::{Mat, MatMut, MatRef};
pub use storage::{Dims, Matrix};

// Re-export the scalar and kernel layers
pub use dense_gemm_core::{mat_mult, KernelKind, KernelParams};
pub use dense_types::{Complex32, Complex64, DenseScalar, RealScalar};

/// Real (`f64`) matrix.
pub type FloatMatrix = Mat<f64>;
/// Complex (`Complex64`) matrix.
pub type ComplexMatrix = Mat<Complex64>;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        column_indexes, diagonal_indexes, make_index_set, row_indexes, ComplexMatrix,
        DenseScalar, FloatMatrix, Mat, MatMut, MatRef, Matrix, MatrixError, RealScalar,
    };
}
