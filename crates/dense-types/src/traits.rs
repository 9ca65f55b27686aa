use crate::scalar::DenseScalar;

/// Scalars with a total-ish order: the real flavors.
///
/// Reductions that need an ordering (`max`, `min`) and the floating
/// remainder only exist for matrices whose element type implements this.
pub trait RealScalar: DenseScalar + PartialOrd {
    /// Positive infinity, the starting point of a minimum scan.
    fn pos_infinity() -> Self;

    /// Negative infinity, the starting point of a maximum scan.
    fn neg_infinity() -> Self;

    /// Maximum of two values; NaN if either operand is NaN.
    fn scalar_max(self, rhs: Self) -> Self;

    /// Minimum of two values; NaN if either operand is NaN.
    fn scalar_min(self, rhs: Self) -> Self;

    /// Floating remainder with the sign of `self` (C `fmod`).
    fn scalar_rem(self, rhs: Self) -> Self;
}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {
        $(
            impl RealScalar for $t {
                #[inline(always)]
                fn pos_infinity() -> Self {
                    <$t>::INFINITY
                }

                #[inline(always)]
                fn neg_infinity() -> Self {
                    <$t>::NEG_INFINITY
                }

                #[inline(always)]
                fn scalar_max(self, rhs: Self) -> Self {
                    if self.is_nan() || rhs.is_nan() {
                        <$t>::NAN
                    } else {
                        <$t>::max(self, rhs)
                    }
                }

                #[inline(always)]
                fn scalar_min(self, rhs: Self) -> Self {
                    if self.is_nan() || rhs.is_nan() {
                        <$t>::NAN
                    } else {
                        <$t>::min(self, rhs)
                    }
                }

                #[inline(always)]
                fn scalar_rem(self, rhs: Self) -> Self {
                    self % rhs
                }
            }
        )*
    };
}

impl_real_scalar!(f32, f64);
