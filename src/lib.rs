//! Single-pass summary statistics for numeric sequences
//!
//! This package computes counts, extrema with their first positions, sums,
//! averages, distances between adjacent elements, ordering, a value
//! histogram, the median and the mode of a sequence in one forward pass.
//!
//! Exact arithmetic is carried out in `i64` and `u64` alongside an `f64`
//! approximation.  Overflow never wraps or panics: it is recorded in the
//! returned [`Summary`] as flags and [`Issue`]s, and the computation carries
//! on with every field it can still compute.
//!
//! ```
//! use seqinfo::{Options, Summarize as _};
//!
//! let summary = [0, 1, 1, 0, 2].summary(Options::HISTOGRAM);
//! assert_eq!(summary.count(), 5);
//! assert_eq!(summary.exact_sum(), Some(4));
//! assert_eq!(summary.mode(), Some(&[0, 1][..]));
//! assert!(!summary.is_sorted());
//! ```
#![warn(missing_docs)]

mod accumulator;
mod element;
mod histogram;
mod issue;
#[cfg(feature = "serde")]
mod lossless;
mod options;
mod summary;

#[cfg(test)]
mod test;

pub use element::Element;
pub use histogram::Histogram;
pub use issue::Issue;
pub use options::Options;
pub use summary::Summary;

use accumulator::{Accumulator, Sample};
use core::ops::{Bound, RangeBounds};
use thiserror::Error;

/// Errors in calling this package
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested range is not within the sequence
    #[error("Range {start}..{end} is out of bounds for a sequence of length {len}")]
    Range {
        /// Start of the range, inclusive
        start: usize,
        /// End of the range, exclusive
        end: usize,
        /// Length of the sequence
        len: usize,
    },

    /// A range bound does not fit in `usize`
    #[error("Range bound overflows `usize`")]
    Bound,
}

/// Median of a sorted sequence, by position
fn median<T: Element>(values: &[T], exact: bool) -> Option<f64> {
    let mid = values.len() / 2;

    if values.len() % 2 == 1 {
        values[mid].approximate(exact)
    } else {
        let left = values.get(mid.checked_sub(1)?)?.approximate(exact)?;
        let right = values[mid].approximate(exact)?;
        Some((left + right) / 2.0)
    }
}

/// Summarize a sequence whose first element sits at `offset`
///
/// This is the common driver of all entry points.  Positions in the result
/// are `offset` plus the position in `values`.
fn summarize_at<T: Element>(values: &[T], offset: usize, options: Options) -> Summary<T> {
    let Some(&first) = values.first() else {
        return Summary::empty();
    };

    let first = Sample::new(first, options);
    let mut acc = Accumulator::new(&first, offset, values.len(), options);
    let mut left = first;

    for (index, &value) in values.iter().enumerate().skip(1) {
        let right = Sample::new(value, options);
        acc.step(&left, &right, offset + index);
        left = right;
    }

    let mut summary = acc.finish();

    if summary.is_sorted() {
        summary.median = median(values, options.exact());
    }

    summary
}

/// Summarize a sequence
///
/// ```
/// use seqinfo::{Issue, Options, summarize};
///
/// let summary = summarize(&[u64::MAX], Options::empty());
/// assert_eq!(summary.exact_sum(), None);
/// assert!(summary.exact_sum_overflow());
/// assert!(summary.element_overflow());
/// assert!(summary.issues().contains(&Issue::Element(u64::MAX)));
/// ```
#[must_use]
pub fn summarize<T: Element>(values: &[T], options: Options) -> Summary<T> {
    summarize_at(values, 0, options)
}

/// Summarize a range of a sequence
///
/// Unlike summarizing a subslice, this function reports
/// [`Summary::min_value_index`] and [`Summary::max_value_index`] in the
/// index space of `values`.
///
/// # Errors
///
/// [`Error::Range`] if the range is decreasing or out of bounds, and
/// [`Error::Bound`] if an excluded start or included end is `usize::MAX`.
pub fn summarize_range<T: Element>(
    values: &[T],
    range: impl RangeBounds<usize>,
    options: Options,
) -> Result<Summary<T>, Error> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).ok_or(Error::Bound)?,
        Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).ok_or(Error::Bound)?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => values.len(),
    };

    let slice = values.get(start..end).ok_or(Error::Range {
        start,
        end,
        len: values.len(),
    })?;

    Ok(summarize_at(slice, start, options))
}

/// Summarize a finite iterator
///
/// The elements are collected first, as the median needs positional access.
#[must_use]
pub fn summarize_iter<T: Element>(iter: impl IntoIterator<Item = T>, options: Options) -> Summary<T> {
    let values: Vec<T> = iter.into_iter().collect();
    summarize(&values, options)
}

/// Extension methods to summarize slices
pub trait Summarize<T: Element> {
    /// Summarize all elements
    #[must_use]
    fn summary(&self, options: Options) -> Summary<T>;

    /// Summarize a range of elements, keeping the original positions
    ///
    /// # Errors
    ///
    /// See [`summarize_range`].
    fn summary_of(
        &self,
        range: impl RangeBounds<usize>,
        options: Options,
    ) -> Result<Summary<T>, Error>;
}

impl<T: Element> Summarize<T> for [T] {
    fn summary(&self, options: Options) -> Summary<T> {
        summarize(self, options)
    }

    fn summary_of(
        &self,
        range: impl RangeBounds<usize>,
        options: Options,
    ) -> Result<Summary<T>, Error> {
        summarize_range(self, range, options)
    }
}
