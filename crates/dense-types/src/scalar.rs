use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

use num_complex::Complex;

/// Trait for element types stored in a dense matrix.
///
/// Implemented for real floats and for complex numbers built on them.
/// Shape and indexing logic never looks at the values; everything numeric
/// goes through this trait.
pub trait DenseScalar:
    Copy
    + Clone
    + Send
    + Sync
    + Debug
    + Display
    + PartialEq
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + MulAssign
    + 'static
{
    /// True for complex-valued scalars.
    const IS_COMPLEX: bool;

    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Exact comparison against zero. Used by the multiply kernels to skip
    /// whole columns of work.
    fn is_zero(self) -> bool;

    /// Build a scalar from a real value (imaginary part zero).
    fn from_real(re: f64) -> Self;

    /// Absolute value (modulus for complex) widened to `f64`.
    fn modulus(self) -> f64;

    /// Natural exponential.
    fn exp(self) -> Self;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Raise to the power `e`.
    fn pow(self, e: Self) -> Self;
}

macro_rules! impl_dense_scalar_float {
    ($($t:ty),*) => {
        $(
            impl DenseScalar for $t {
                const IS_COMPLEX: bool = false;

                #[inline(always)]
                fn zero() -> Self {
                    0.0
                }

                #[inline(always)]
                fn one() -> Self {
                    1.0
                }

                #[inline(always)]
                fn is_zero(self) -> bool {
                    self == 0.0
                }

                #[inline(always)]
                fn from_real(re: f64) -> Self {
                    re as $t
                }

                #[inline(always)]
                fn modulus(self) -> f64 {
                    <$t>::abs(self) as f64
                }

                #[inline(always)]
                fn exp(self) -> Self {
                    <$t>::exp(self)
                }

                #[inline(always)]
                fn ln(self) -> Self {
                    <$t>::ln(self)
                }

                #[inline(always)]
                fn pow(self, e: Self) -> Self {
                    <$t>::powf(self, e)
                }
            }
        )*
    };
}

macro_rules! impl_dense_scalar_complex {
    ($($t:ty),*) => {
        $(
            impl DenseScalar for Complex<$t> {
                const IS_COMPLEX: bool = true;

                #[inline(always)]
                fn zero() -> Self {
                    Complex::new(0.0, 0.0)
                }

                #[inline(always)]
                fn one() -> Self {
                    Complex::new(1.0, 0.0)
                }

                #[inline(always)]
                fn is_zero(self) -> bool {
                    self.re == 0.0 && self.im == 0.0
                }

                #[inline(always)]
                fn from_real(re: f64) -> Self {
                    Complex::new(re as $t, 0.0)
                }

                #[inline(always)]
                fn modulus(self) -> f64 {
                    self.norm() as f64
                }

                #[inline(always)]
                fn exp(self) -> Self {
                    Complex::<$t>::exp(self)
                }

                #[inline(always)]
                fn ln(self) -> Self {
                    Complex::<$t>::ln(self)
                }

                #[inline(always)]
                fn pow(self, e: Self) -> Self {
                    self.powc(e)
                }
            }
        )*
    };
}

impl_dense_scalar_float!(f32, f64);
impl_dense_scalar_complex!(f32, f64);
