#[cfg(feature = "serde")]
use crate::lossless::Lossless;
use crate::{Element, Histogram, Issue};
use core::fmt;
use std::collections::BTreeSet;

/// Summary of a numeric sequence, computed in a single pass
///
/// A summary is a plain value: it is created fresh by
/// [`summarize`][crate::summarize] and friends and is never mutated
/// afterwards.  Every field is read through an accessor of the same name.
///
/// Exact fields are computed in `i64` (sums) or `u64` (deltas).  When they
/// overflow, the field becomes `None` and the corresponding `*_overflow` flag
/// is raised, while the approximate `f64` counterpart carries on.
///
/// With the `serde` feature, infinities and NaN in floating-point fields
/// are encoded as strings, so they survive formats without non-finite
/// number literals.
#[cfg_attr(feature = "serde", serde_with::serde_as)]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct Summary<T: Element> {
    pub(crate) count: usize,
    pub(crate) is_empty: bool,
    pub(crate) issues: BTreeSet<Issue<T>>,
    #[cfg_attr(feature = "serde", serde_as(as = "Option<Lossless>"))]
    pub(crate) sum: Option<f64>,
    pub(crate) exact_sum: Option<i64>,
    pub(crate) exact_sum_overflow: bool,
    pub(crate) element_overflow: bool,
    pub(crate) all_elements_equal: bool,
    #[cfg_attr(feature = "serde", serde_as(as = "Option<Lossless>"))]
    pub(crate) avg: Option<f64>,
    #[cfg_attr(feature = "serde", serde_as(as = "Option<Lossless>"))]
    pub(crate) min_value: Option<T>,
    #[cfg_attr(feature = "serde", serde_as(as = "Option<Lossless>"))]
    pub(crate) max_value: Option<T>,
    pub(crate) min_value_index: Option<usize>,
    pub(crate) max_value_index: Option<usize>,
    pub(crate) exact_min_delta: Option<u64>,
    pub(crate) exact_max_delta: Option<u64>,
    #[cfg_attr(feature = "serde", serde_as(as = "Option<Lossless>"))]
    pub(crate) min_delta: Option<f64>,
    #[cfg_attr(feature = "serde", serde_as(as = "Option<Lossless>"))]
    pub(crate) max_delta: Option<f64>,
    #[cfg_attr(feature = "serde", serde_as(as = "Option<Lossless>"))]
    pub(crate) avg_delta: Option<f64>,
    pub(crate) exact_sum_delta: Option<u64>,
    #[cfg_attr(feature = "serde", serde_as(as = "Option<Lossless>"))]
    pub(crate) sum_delta: Option<f64>,
    pub(crate) exact_sum_delta_overflow: bool,
    pub(crate) exact_min_max_delta_overflow: bool,
    pub(crate) is_ascending: bool,
    pub(crate) is_strictly_ascending: bool,
    pub(crate) is_descending: bool,
    pub(crate) is_strictly_descending: bool,
    pub(crate) has_constant_exact_delta: bool,
    pub(crate) constant_exact_delta: Option<u64>,
    #[cfg_attr(feature = "serde", serde_as(as = "Option<Lossless>"))]
    pub(crate) median: Option<f64>,
    pub(crate) histogram: Option<Histogram<T>>,
    #[cfg_attr(feature = "serde", serde_as(as = "Option<Vec<Lossless>>"))]
    pub(crate) mode: Option<Vec<T>>,
}

impl<T: Element> Default for Summary<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element> Summary<T> {
    /// Summary of the empty sequence
    ///
    /// All ordering flags are vacuously true, everything else is zero,
    /// `false` or absent.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            count: 0,
            is_empty: true,
            issues: BTreeSet::new(),
            sum: None,
            exact_sum: None,
            exact_sum_overflow: false,
            element_overflow: false,
            all_elements_equal: false,
            avg: None,
            min_value: None,
            max_value: None,
            min_value_index: None,
            max_value_index: None,
            exact_min_delta: None,
            exact_max_delta: None,
            min_delta: None,
            max_delta: None,
            avg_delta: None,
            exact_sum_delta: None,
            sum_delta: None,
            exact_sum_delta_overflow: false,
            exact_min_max_delta_overflow: false,
            is_ascending: true,
            is_strictly_ascending: true,
            is_descending: true,
            is_strictly_descending: true,
            has_constant_exact_delta: false,
            constant_exact_delta: None,
            median: None,
            histogram: None,
            mode: None,
        }
    }

    /// The number of elements
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether the sequence has no elements
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// Anomalies encountered during the computation
    #[must_use]
    pub const fn issues(&self) -> &BTreeSet<Issue<T>> {
        &self.issues
    }

    /// Approximate sum of the elements
    #[must_use]
    pub const fn sum(&self) -> Option<f64> {
        self.sum
    }

    /// Exact sum of the elements
    ///
    /// Always `None` for floating-point elements, whose sum is tracked by
    /// [`Self::sum`] only.
    #[must_use]
    pub const fn exact_sum(&self) -> Option<i64> {
        self.exact_sum
    }

    /// Whether the exact sum overflowed `i64`
    #[must_use]
    pub const fn exact_sum_overflow(&self) -> bool {
        self.exact_sum_overflow
    }

    /// Whether any element could not be represented exactly
    #[must_use]
    pub const fn element_overflow(&self) -> bool {
        self.element_overflow
    }

    /// Whether the sequence is non-empty and all elements are equal
    #[must_use]
    pub const fn all_elements_equal(&self) -> bool {
        self.all_elements_equal
    }

    /// Arithmetic mean
    #[must_use]
    pub const fn avg(&self) -> Option<f64> {
        self.avg
    }

    /// The smallest element
    #[must_use]
    pub const fn min_value(&self) -> Option<T> {
        self.min_value
    }

    /// The largest element
    #[must_use]
    pub const fn max_value(&self) -> Option<T> {
        self.max_value
    }

    /// Index of the first occurrence of [`Self::min_value`]
    ///
    /// The index refers to the original sequence, even if only a range of it
    /// was summarized.
    ///
    /// ```
    /// use seqinfo::{Options, Summarize as _};
    ///
    /// let summary = [1, 2, 4, 8, 16].summary_of(1..=3, Options::empty()).unwrap();
    /// assert_eq!(summary.min_value(), Some(2));
    /// assert_eq!(summary.min_value_index(), Some(1));
    /// assert_eq!(summary.max_value_index(), Some(3));
    /// ```
    #[must_use]
    pub const fn min_value_index(&self) -> Option<usize> {
        self.min_value_index
    }

    /// Index of the first occurrence of [`Self::max_value`]
    ///
    /// The index refers to the original sequence, even if only a range of it
    /// was summarized.
    #[must_use]
    pub const fn max_value_index(&self) -> Option<usize> {
        self.max_value_index
    }

    /// Exact smallest distance between adjacent elements
    #[must_use]
    pub const fn exact_min_delta(&self) -> Option<u64> {
        self.exact_min_delta
    }

    /// Exact largest distance between adjacent elements
    #[must_use]
    pub const fn exact_max_delta(&self) -> Option<u64> {
        self.exact_max_delta
    }

    /// Approximate smallest distance between adjacent elements
    #[must_use]
    pub const fn min_delta(&self) -> Option<f64> {
        self.min_delta
    }

    /// Approximate largest distance between adjacent elements
    #[must_use]
    pub const fn max_delta(&self) -> Option<f64> {
        self.max_delta
    }

    /// Mean distance between adjacent elements
    #[must_use]
    pub const fn avg_delta(&self) -> Option<f64> {
        self.avg_delta
    }

    /// Exact sum of distances between adjacent elements
    #[must_use]
    pub const fn exact_sum_delta(&self) -> Option<u64> {
        self.exact_sum_delta
    }

    /// Approximate sum of distances between adjacent elements
    #[must_use]
    pub const fn sum_delta(&self) -> Option<f64> {
        self.sum_delta
    }

    /// Whether [`Self::exact_sum_delta`] overflowed `u64`
    #[must_use]
    pub const fn exact_sum_delta_overflow(&self) -> bool {
        self.exact_sum_delta_overflow
    }

    /// Whether some adjacent distance could not be computed exactly
    ///
    /// This also invalidates [`Self::exact_sum_delta`].
    #[must_use]
    pub const fn exact_min_max_delta_overflow(&self) -> bool {
        self.exact_min_max_delta_overflow
    }

    /// Whether `previous <= next` holds for all adjacent elements
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.is_ascending
    }

    /// Whether `previous < next` holds for all adjacent elements
    #[must_use]
    pub const fn is_strictly_ascending(&self) -> bool {
        self.is_strictly_ascending
    }

    /// Whether `previous >= next` holds for all adjacent elements
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        self.is_descending
    }

    /// Whether `previous > next` holds for all adjacent elements
    #[must_use]
    pub const fn is_strictly_descending(&self) -> bool {
        self.is_strictly_descending
    }

    /// Whether the elements are in ascending or descending order
    #[must_use]
    pub const fn is_sorted(&self) -> bool {
        self.is_ascending || self.is_descending
    }

    /// Whether all adjacent distances are exactly the same
    #[must_use]
    pub const fn has_constant_exact_delta(&self) -> bool {
        self.has_constant_exact_delta
    }

    /// The common distance between adjacent elements
    #[must_use]
    pub const fn constant_exact_delta(&self) -> Option<u64> {
        self.constant_exact_delta
    }

    /// Median, only computed for sorted sequences
    #[must_use]
    pub const fn median(&self) -> Option<f64> {
        self.median
    }

    /// Value histogram, if requested by [`Options::HISTOGRAM`][crate::Options::HISTOGRAM]
    #[must_use]
    pub const fn histogram(&self) -> Option<&Histogram<T>> {
        self.histogram.as_ref()
    }

    /// Values of strictly maximal frequency in ascending order
    ///
    /// Requires [`Options::HISTOGRAM`][crate::Options::HISTOGRAM].  There is
    /// no mode when all values appear equally often.
    #[must_use]
    pub fn mode(&self) -> Option<&[T]> {
        self.mode.as_deref()
    }
}

fn field<V: fmt::Display>(f: &mut fmt::Formatter, name: &str, value: Option<V>) -> fmt::Result {
    match value {
        Some(value) => writeln!(f, "{name}: {value}"),
        None => writeln!(f, "{name}: -"),
    }
}

impl<T: Element> fmt::Display for Summary<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "count: {}", self.count)?;
        field(f, "sum", self.sum)?;
        field(f, "exact sum", self.exact_sum)?;
        field(f, "avg", self.avg)?;
        field(f, "min", self.min_value)?;
        field(f, "min index", self.min_value_index)?;
        field(f, "max", self.max_value)?;
        field(f, "max index", self.max_value_index)?;
        field(f, "exact min delta", self.exact_min_delta)?;
        field(f, "exact max delta", self.exact_max_delta)?;
        field(f, "min delta", self.min_delta)?;
        field(f, "max delta", self.max_delta)?;
        field(f, "exact sum delta", self.exact_sum_delta)?;
        field(f, "sum delta", self.sum_delta)?;
        field(f, "avg delta", self.avg_delta)?;
        field(f, "constant delta", self.constant_exact_delta)?;
        field(f, "median", self.median)?;

        let order = match (self.is_ascending, self.is_descending) {
            (true, true) => "constant",
            (true, false) if self.is_strictly_ascending => "strictly ascending",
            (true, false) => "ascending",
            (false, true) if self.is_strictly_descending => "strictly descending",
            (false, true) => "descending",
            (false, false) => "unsorted",
        };
        writeln!(f, "order: {order}")?;

        if let Some(mode) = &self.mode {
            write!(f, "mode:")?;
            mode.iter().try_for_each(|value| write!(f, " {value}"))?;
            writeln!(f)?;
        }

        self.issues
            .iter()
            .try_for_each(|issue| writeln!(f, "issue: {issue}"))
    }
}
