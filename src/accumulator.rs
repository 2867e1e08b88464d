use crate::{Element, Histogram, Issue, Options, Summary};
use std::collections::BTreeSet;

/// An element together with its conversions into the working domains
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sample<T> {
    pub value: T,
    pub int: Option<i64>,
    pub word: Option<u64>,
    pub float: Option<f64>,
}

impl<T: Element> Sample<T> {
    pub fn new(value: T, options: Options) -> Self {
        Self {
            value,
            int: value.to_exact_i64(),
            word: value.to_exact_u64(),
            float: value.approximate(options.exact()),
        }
    }
}

/// Magnitude of the difference between two adjacent samples
#[derive(Debug, Clone, Copy)]
struct Delta {
    /// Exact magnitude, if both sides share an exact domain
    exact: Option<u64>,
    /// Approximate magnitude, if finite
    approx: Option<f64>,
    /// The subtraction overflowed the exact domain
    overflow: bool,
}

impl Delta {
    #[allow(clippy::cast_precision_loss)]
    fn between<T: Element>(left: &Sample<T>, right: &Sample<T>) -> Self {
        let approx = || {
            let (l, r) = (left.float?, right.float?);
            Some((r - l).abs()).filter(|d| d.is_finite())
        };

        match (left.int, right.int) {
            (Some(l), Some(r)) => match r.checked_sub(l) {
                Some(d) => {
                    let d = d.unsigned_abs();
                    Self {
                        exact: Some(d),
                        approx: Some(d as f64),
                        overflow: false,
                    }
                }
                None => Self {
                    exact: None,
                    approx: approx(),
                    overflow: true,
                },
            },
            _ => match (left.word, right.word) {
                (Some(l), Some(r)) => {
                    let d = l.abs_diff(r);
                    Self {
                        exact: Some(d),
                        approx: Some(d as f64),
                        overflow: false,
                    }
                }
                _ => Self {
                    exact: None,
                    approx: approx(),
                    overflow: false,
                },
            },
        }
    }
}

/// State of a single forward pass over a sequence
///
/// The pass is seeded with the first element, [stepped](Self::step) once per
/// adjacent pair in original order, and [finished](Self::finish) into an
/// immutable [`Summary`].  Overflow flags are only ever raised through the
/// `overflow_*` methods, which clear the fields they invalidate.
#[derive(Debug, Clone)]
pub(crate) struct Accumulator<T: Element> {
    count: usize,
    issues: BTreeSet<Issue<T>>,

    min: T,
    min_index: usize,
    max: T,
    max_index: usize,

    ascending: bool,
    strictly_ascending: bool,
    descending: bool,
    strictly_descending: bool,

    sum: Option<f64>,
    exact_sum: Option<i64>,
    exact_sum_overflow: bool,
    element_overflow: bool,

    min_delta: Option<f64>,
    max_delta: Option<f64>,
    exact_min_delta: Option<u64>,
    exact_max_delta: Option<u64>,
    exact_min_max_delta_overflow: bool,
    // Set for floating-point pairs without an exact magnitude
    inexact_delta: bool,

    sum_delta: Option<f64>,
    exact_sum_delta: Option<u64>,
    exact_sum_delta_overflow: bool,

    histogram: Option<Histogram<T>>,
}

impl<T: Element> Accumulator<T> {
    /// Seed the pass with the first element
    ///
    /// `index` is the position of `first` in the original sequence and
    /// `count` is the number of elements to be summarized.
    pub fn new(first: &Sample<T>, index: usize, count: usize, options: Options) -> Self {
        let mut acc = Self {
            count,
            issues: BTreeSet::new(),
            min: first.value,
            min_index: index,
            max: first.value,
            max_index: index,
            ascending: true,
            strictly_ascending: true,
            descending: true,
            strictly_descending: true,
            sum: None,
            exact_sum: None,
            exact_sum_overflow: false,
            element_overflow: false,
            min_delta: None,
            max_delta: None,
            exact_min_delta: None,
            exact_max_delta: None,
            exact_min_max_delta_overflow: false,
            inexact_delta: false,
            sum_delta: Some(0.0),
            exact_sum_delta: Some(0),
            exact_sum_delta_overflow: false,
            histogram: options
                .histogram()
                .then(|| core::iter::once(first.value).collect()),
        };

        match first.int {
            Some(int) => {
                acc.exact_sum = Some(int);
                acc.sum = int.approximate(options.exact());
            }
            None => {
                if T::IS_INTEGER {
                    acc.element_overflow = true;
                    acc.issues.insert(Issue::Element(first.value));
                }
                acc.overflow_exact_sum();
            }
        }

        // Integers take the direct representation only if it is lossless
        let direct = if T::IS_INTEGER {
            first.value.to_exact_f64()
        } else {
            first.float
        };

        if let Some(float) = direct {
            acc.sum = Some(float);
        }

        if !T::IS_INTEGER {
            acc.exact_sum = None;
            acc.exact_sum_overflow = false;
        }

        acc
    }

    fn overflow_exact_sum(&mut self) {
        self.exact_sum_overflow = true;
        self.exact_sum = None;
    }

    fn overflow_exact_sum_delta(&mut self) {
        self.exact_sum_delta_overflow = true;
        self.exact_sum_delta = None;
    }

    fn overflow_exact_min_max_delta(&mut self) {
        self.exact_min_max_delta_overflow = true;
        self.exact_min_delta = None;
        self.exact_max_delta = None;
        self.overflow_exact_sum_delta();
    }

    // Floating-point sequences never claim exactness, so losing the exact
    // deltas is not an overflow for them.
    fn lose_exact_delta(&mut self) {
        if T::IS_INTEGER {
            self.overflow_exact_min_max_delta();
        } else {
            self.inexact_delta = true;
            self.exact_min_delta = None;
            self.exact_max_delta = None;
            self.exact_sum_delta = None;
        }
    }

    fn report(&mut self, value: T) {
        self.element_overflow = true;
        self.issues.insert(Issue::Element(value));
    }

    /// Update the state with an adjacent pair
    ///
    /// `index` is the original position of `right`.
    pub fn step(&mut self, left: &Sample<T>, right: &Sample<T>, index: usize) {
        self.update_extrema(left.value, right.value, index);
        self.update_order(left.value, right.value);

        let delta = Delta::between(left, right);
        self.update_delta(left, right, delta);
        self.update_sum(right);
        self.update_sum_delta(left, right, delta);
    }

    fn update_extrema(&mut self, left: T, right: T, index: usize) {
        if right < self.min {
            self.min_index = index;
        }
        if right > self.max {
            self.max_index = index;
        }
        for value in [left, right] {
            if value < self.min {
                self.min = value;
            }
            if value > self.max {
                self.max = value;
            }
        }
    }

    fn update_order(&mut self, left: T, right: T) {
        if left <= right {
            self.strictly_ascending &= left != right;
        } else {
            self.ascending = false;
            self.strictly_ascending = false;
        }

        if left >= right {
            self.strictly_descending &= left != right;
        } else {
            self.descending = false;
            self.strictly_descending = false;
        }
    }

    fn update_delta(&mut self, left: &Sample<T>, right: &Sample<T>, delta: Delta) {
        if T::IS_INTEGER && (left.int.is_none() || right.int.is_none()) {
            self.overflow_exact_sum();
            for side in [left, right] {
                if side.int.is_none() {
                    self.issues.insert(Issue::Element(side.value));
                }
            }
        }

        if delta.overflow {
            self.overflow_exact_min_max_delta();
        }

        match delta.exact {
            Some(d) if !self.exact_min_max_delta_overflow && !self.inexact_delta => {
                self.exact_min_delta = Some(self.exact_min_delta.map_or(d, |m| m.min(d)));
                self.exact_max_delta = Some(self.exact_max_delta.map_or(d, |m| m.max(d)));
            }
            Some(_) => (),
            None => self.lose_exact_delta(),
        }

        if let Some(d) = delta.approx {
            self.min_delta = Some(self.min_delta.map_or(d, |m| m.min(d)));
            self.max_delta = Some(self.max_delta.map_or(d, |m| m.max(d)));
        }
    }

    fn update_sum(&mut self, right: &Sample<T>) {
        match (right.int, right.float) {
            (Some(int), _) => {
                if let Some(sum) = self.exact_sum {
                    match sum.checked_add(int) {
                        Some(sum) => self.exact_sum = Some(sum),
                        None if T::IS_INTEGER => self.overflow_exact_sum(),
                        None => self.exact_sum = None,
                    }
                }
                self.count_value(right.value);
            }
            (None, Some(_)) => {
                if T::IS_INTEGER {
                    self.report(right.value);
                }
                self.count_value(right.value);
            }
            (None, None) => self.report(right.value),
        }

        if let Some(sum) = self.sum {
            match right.float {
                Some(float) => self.sum = Some(sum + float),
                None => {
                    self.issues.insert(Issue::Element(right.value));
                    self.sum = None;
                }
            }
        }
    }

    fn count_value(&mut self, value: T) {
        if let Some(histogram) = &mut self.histogram {
            histogram.insert(value);
        }
    }

    fn update_sum_delta(&mut self, left: &Sample<T>, right: &Sample<T>, delta: Delta) {
        if let (Some(sum), Some(d)) = (self.exact_sum_delta, delta.exact) {
            match sum.checked_add(d) {
                Some(sum) => self.exact_sum_delta = Some(sum),
                None => self.overflow_exact_sum_delta(),
            }
        }

        self.sum_delta = match (self.sum_delta, delta.approx) {
            (Some(sum), Some(d)) => Some(sum + d).filter(|s| s.is_finite()),
            _ => None,
        };

        for side in [left, right] {
            if side.int.is_none() && side.float.is_none() {
                self.report(side.value);
            }
        }
    }

    /// Derive the remaining fields and turn the state into a summary
    ///
    /// The median needs positional access to the sequence and is left for
    /// the caller.
    #[allow(clippy::cast_precision_loss)]
    pub fn finish(mut self) -> Summary<T> {
        let paired = self.count >= 2;
        let n = self.count as f64;

        let avg = match (self.exact_sum, self.sum) {
            (Some(sum), _) => {
                let quotient = i64::try_from(self.count)
                    .ok()
                    .and_then(|count| Some((sum.checked_div(count)?, sum.checked_rem(count)?)));
                match quotient {
                    Some((q, r)) => Some(q as f64 + r as f64 / n),
                    None => {
                        self.issues.insert(Issue::Avg);
                        None
                    }
                }
            }
            // The approximate sum may have run off to infinity or NaN
            (None, Some(sum)) => {
                let avg = sum / n;
                if avg.is_finite() {
                    Some(avg)
                } else {
                    self.issues.insert(Issue::Avg);
                    None
                }
            }
            (None, None) => None,
        };

        let (exact_sum_delta, sum_delta) = if paired {
            (self.exact_sum_delta, self.sum_delta)
        } else {
            (None, None)
        };

        let pairs = (self.count.max(1) - 1) as f64;
        let avg_delta = exact_sum_delta
            .map(|sum| sum as f64 / pairs)
            .or_else(|| sum_delta.map(|sum| sum / pairs))
            .filter(|_| paired);

        let constant_exact_delta = match (self.exact_min_delta, self.exact_max_delta) {
            (Some(min), Some(max)) if min == max => Some(min),
            _ => None,
        };

        let mode = self
            .histogram
            .as_ref()
            .filter(|_| self.count > 1)
            .and_then(Histogram::mode);

        Summary {
            count: self.count,
            is_empty: self.count == 0,
            issues: self.issues,
            sum: self.sum,
            exact_sum: self.exact_sum,
            exact_sum_overflow: self.exact_sum_overflow,
            element_overflow: self.element_overflow,
            all_elements_equal: self.min == self.max,
            avg,
            min_value: Some(self.min),
            max_value: Some(self.max),
            min_value_index: Some(self.min_index),
            max_value_index: Some(self.max_index),
            exact_min_delta: self.exact_min_delta,
            exact_max_delta: self.exact_max_delta,
            min_delta: self.min_delta,
            max_delta: self.max_delta,
            avg_delta,
            exact_sum_delta,
            sum_delta,
            exact_sum_delta_overflow: self.exact_sum_delta_overflow,
            exact_min_max_delta_overflow: self.exact_min_max_delta_overflow,
            is_ascending: self.ascending,
            is_strictly_ascending: self.strictly_ascending,
            is_descending: self.descending,
            is_strictly_descending: self.strictly_descending,
            has_constant_exact_delta: paired && constant_exact_delta.is_some(),
            constant_exact_delta,
            median: None,
            histogram: self.histogram,
            mode,
        }
    }
}
