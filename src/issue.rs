#[cfg(feature = "serde")]
use crate::lossless::Lossless;
use crate::Element;
use core::cmp::Ordering;
use thiserror::Error;

/// Non-fatal anomaly encountered while summarizing
///
/// Issues do not abort the computation.  They are collected into
/// [`Summary::issues`][crate::Summary::issues] while every unaffected field
/// is still computed.
#[cfg_attr(feature = "serde", serde_with::serde_as)]
#[derive(Debug, Clone, Copy, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Element + serde::Serialize",
        deserialize = "T: Element + serde::Deserialize<'de>"
    ))
)]
pub enum Issue<T> {
    /// The exact sum overflowed `i64`
    ///
    /// A summary flags this condition with
    /// [`Summary::exact_sum_overflow`][crate::Summary::exact_sum_overflow]
    /// rather than listing it among its issues.
    #[error("Exact sum calculation overflow")]
    Sum,

    /// No finite average could be computed from the sum
    ///
    /// Either the exact division overflowed, or the approximate sum is
    /// infinite or NaN.
    #[error("Accurate average calculation was not possible")]
    Avg,

    /// The element cannot be represented in the working domains
    ///
    /// Either the conversion to `i64` failed for an integer type, or the
    /// conversion to `f64` failed under [`Options::EXACT`][crate::Options::EXACT].
    #[error("Element {0} can not be represented exactly as a 64-bit integer")]
    Element(#[cfg_attr(feature = "serde", serde_as(as = "Lossless"))] T),
}

impl<T: Element> Issue<T> {
    const fn rank(&self) -> u8 {
        match self {
            Self::Sum => 0,
            Self::Avg => 1,
            Self::Element(_) => 2,
        }
    }
}

impl<T: Element> PartialEq for Issue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Element> Eq for Issue<T> {}

impl<T: Element> PartialOrd for Issue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Issues order as `Sum < Avg < Element`, elements by value
impl<T: Element> Ord for Issue<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Element(x), Self::Element(y)) => x.key_cmp(y),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
