use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Numeric element that can be summarized
///
/// This trait is the capability interface of the summary pass.  It tells the
/// pass how to order values and how to convert them into the working
/// domains: `i64` for exact sums, `u64` for unsigned deltas, and `f64` for
/// approximations.
///
/// The trait is implemented for all primitive integers and floating-point
/// types.  It is not meant to be implemented outside of this crate, although
/// nothing prevents doing so.
pub trait Element: Copy + PartialOrd + Debug + Display + FromStr {
    /// Whether the type is an integer type
    ///
    /// Integer types claim exactness, so failing to convert them to `i64` is
    /// reported as an issue.  Floating-point types are summed approximately
    /// and only report elements that cannot be converted at all.
    const IS_INTEGER: bool;

    /// Lossless conversion to `i64`
    ///
    /// Floating-point values convert only if they are integral and in range.
    fn to_exact_i64(self) -> Option<i64>;

    /// Lossless conversion to `u64`, only for unsigned integer types
    fn to_exact_u64(self) -> Option<u64>;

    /// Conversion to `f64`, rounding to nearest
    fn to_f64(self) -> f64;

    /// Lossless conversion to `f64`
    fn to_exact_f64(self) -> Option<f64>;

    /// Total order consistent with `PartialOrd` where the latter is defined
    ///
    /// Values incomparable under `PartialOrd` (NaN) fall back to the IEEE 754
    /// total order, which places them beyond the infinities.
    fn key_cmp(&self, other: &Self) -> Ordering;

    /// Conversion to `f64` as requested by `exact`
    #[must_use]
    fn approximate(self, exact: bool) -> Option<f64> {
        if exact {
            self.to_exact_f64()
        } else {
            Some(self.to_f64())
        }
    }
}

macro_rules! impl_narrow_integer {
    ($signed:literal: $($t:ty),+) => {$(
        impl Element for $t {
            const IS_INTEGER: bool = true;

            fn to_exact_i64(self) -> Option<i64> {
                Some(i64::from(self))
            }

            fn to_exact_u64(self) -> Option<u64> {
                if $signed { None } else { u64::try_from(self).ok() }
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn to_exact_f64(self) -> Option<f64> {
                Some(f64::from(self))
            }

            fn key_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )+};
}

// Integers wider than the 53-bit significand of `f64`
macro_rules! impl_wide_integer {
    ($signed:literal: $($t:ty),+) => {$(
        impl Element for $t {
            const IS_INTEGER: bool = true;

            fn to_exact_i64(self) -> Option<i64> {
                i64::try_from(self).ok()
            }

            fn to_exact_u64(self) -> Option<u64> {
                if $signed { None } else { u64::try_from(self).ok() }
            }

            #[allow(clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn to_exact_f64(self) -> Option<f64> {
                let x = self as f64;
                // `MAX` rounds up to a power of two that saturates back to `MAX`
                (x != <$t>::MAX as f64 && x as $t == self).then_some(x)
            }

            fn key_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )+};
}

macro_rules! impl_float {
    ($($t:ty),+) => {$(
        impl Element for $t {
            const IS_INTEGER: bool = false;

            #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
            fn to_exact_i64(self) -> Option<i64> {
                // -2^63 is exact in every binary float, 2^63 is the exclusive bound
                const BOUND: f64 = 9_223_372_036_854_775_808.0;
                let x = f64::from(self);
                (x.fract() == 0.0 && (-BOUND..BOUND).contains(&x)).then(|| x as i64)
            }

            fn to_exact_u64(self) -> Option<u64> {
                None
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn to_exact_f64(self) -> Option<f64> {
                Some(f64::from(self))
            }

            fn key_cmp(&self, other: &Self) -> Ordering {
                self.partial_cmp(other).unwrap_or_else(|| self.total_cmp(other))
            }
        }
    )+};
}

impl_narrow_integer!(true: i8, i16, i32);
impl_narrow_integer!(false: u8, u16, u32);
impl_wide_integer!(true: i64, i128, isize);
impl_wide_integer!(false: u64, u128, usize);
impl_float!(f32, f64);
