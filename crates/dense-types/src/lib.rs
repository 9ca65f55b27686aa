//! Scalar types for dense column-major matrices.
//!
//! A matrix holds exactly one flavor of element for its whole lifetime:
//!
//! | Flavor | Type | Ordering ops |
//! |--------|------|--------------|
//! | real | `f64` (also `f32`) | yes, via [`RealScalar`] |
//! | complex | [`Complex64`] (also `Complex32`) | no |
//!
//! # Example
//!
//! ```
//! use dense_types::{Complex64, DenseScalar, RealScalar};
//!
//! assert!(0.0f64.is_zero());
//! assert!(!Complex64::new(0.0, 1.0).is_zero());
//! assert_eq!(f64::neg_infinity().scalar_max(2.0), 2.0);
//! ```

mod scalar;
mod traits;

pub use num_complex::{Complex, Complex32, Complex64};
pub use scalar::DenseScalar;
pub use traits::RealScalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{Complex32, Complex64, DenseScalar, RealScalar};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts<T: DenseScalar>(_: T) {}

    #[test]
    fn test_all_types_compile() {
        accepts(1.0f32);
        accepts(1.0f64);
        accepts(Complex32::new(1.0, 0.0));
        accepts(Complex64::new(1.0, 0.0));
    }
}
