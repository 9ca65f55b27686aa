//! Portable column-major multiply kernels.
//!
//! All kernels accumulate into a caller-allocated C (`C += A * B`) and skip
//! the update for every zero entry of B, which makes products with diagonal
//! or otherwise zero-heavy right operands cheap.
//!
//! # Features
//!
//! - [`mat_mult`]: unblocked kernel over an output column range
//! - [`mat_mult_block`]: row/column blocked kernel with a scaling factor
//! - [`mat_mult_viewport`]: blocked kernel walking the inner dimension in
//!   viewports
//! - [`MultiplyKernel`] trait and [`gemm_dispatch`] selecting a kernel from
//!   [`KernelParams`]
//!
//! # Example
//!
//! ```
//! use dense_gemm_core::mat_mult;
//!
//! let m = 2;
//! let p = 3;
//! let n = 2;
//!
//! // Column-major 2x3 and 3x2 operands
//! let a = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
//! let b = [1.0, 3.0, 5.0, 2.0, 4.0, 6.0];
//! let mut c = vec![0.0f64; m * n];
//!
//! mat_mult(0, n, m, p, &mut c, &a, &b);
//! assert_eq!(c, vec![22.0, 49.0, 28.0, 64.0]);
//! ```

mod gemm;
mod kernel;
mod tiling;

pub use gemm::{gemm_dispatch, mat_mult_block, mat_mult_viewport};
pub use kernel::{mat_mult, MultiplyKernel, SparseColumnKernel, ViewportKernel};
pub use tiling::{
    default_params, BlockIterator, KernelKind, KernelParams, ENV_KERNEL, ENV_VLEN, VLEN_DEFAULT,
};
