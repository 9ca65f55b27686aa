//! Matrix types.
//!
//! - [`Mat<T>`]: owned, packed column-major matrix
//! - [`MatRef<'a, T>`]: immutable view, possibly a strided block
//! - [`MatMut<'a, T>`]: mutable view, possibly a strided block
//!
//! Views borrow the owner's buffer. Writing through a `MatMut` obtained from
//! `submatrix_mut`, `row_mut` or `column_mut` changes the owner, and the
//! borrow checker keeps the view from outliving it.
//!
//! # Example
//!
//! ```
//! use dense_matrix::{Mat, MatRef};
//!
//! // 2x3 matrix [[1, 3, 5], [2, 4, 6]] in column-major order
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let a = MatRef::from_slice(&data, 2, 3);
//! let b = MatRef::from_slice(&data, 3, 2);
//!
//! let c = a.times(&b).unwrap();
//! let d = (&a * &b).unwrap();
//! assert_eq!(c, d);
//!
//! let mut m = Mat::<f64>::zeros(3, 3);
//! m.column_mut(1).add(1.0);
//! assert_eq!(m[(2, 1)], 1.0);
//! ```

mod mut_;
mod ops;
mod owned;
mod ref_;

pub use mut_::MatMut;
pub use owned::Mat;
pub use ref_::MatRef;
