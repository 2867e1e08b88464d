#[cfg(feature = "serde")]
use crate::lossless::Lossless;
use crate::Element;
use core::cmp::Ordering;
use std::collections::BTreeMap;

/// Map key ordering elements by [`Element::key_cmp`]
#[derive(Debug, Clone, Copy)]
struct Key<T>(T);

#[cfg(feature = "serde")]
impl<T: Element + serde::Serialize> serde::Serialize for Key<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        <Lossless as serde_with::SerializeAs<T>>::serialize_as(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Element + serde::Deserialize<'de>> serde::Deserialize<'de> for Key<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Lossless as serde_with::DeserializeAs<'de, T>>::deserialize_as(deserializer).map(Self)
    }
}

impl<T: Element> PartialEq for Key<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Element> Eq for Key<T> {}

impl<T: Element> PartialOrd for Key<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Element> Ord for Key<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.key_cmp(&other.0)
    }
}

/// Occurrence count of each distinct value
///
/// Values are kept in ascending order.  Floating-point zeros of either sign
/// share one entry, as they compare equal.  NaN takes its place in the IEEE
/// 754 total order.
#[cfg_attr(feature = "serde", serde_with::serde_as)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct Histogram<T: Element> {
    #[cfg_attr(feature = "serde", serde_as(as = "Vec<(_, _)>"))]
    counts: BTreeMap<Key<T>, usize>,
}

impl<T: Element> Default for Histogram<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Histogram<T> {
    /// Construct an empty histogram
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Count one more occurrence of `value`
    pub fn insert(&mut self, value: T) {
        *self.counts.entry(Key(value)).or_default() += 1;
    }

    /// Occurrences of `value`, zero if never seen
    #[must_use]
    pub fn get(&self, value: T) -> usize {
        self.counts.get(&Key(value)).copied().unwrap_or(0)
    }

    /// The number of distinct values
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no value has been counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The number of counted occurrences of all values
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(value, count)` pairs in ascending order of values
    pub fn iter(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.counts.iter().map(|(key, &count)| (key.0, count))
    }

    /// Values of strictly maximal frequency in ascending order
    ///
    /// There is no mode if every value appears the same number of times,
    /// which includes the empty histogram and a single distinct value.
    #[must_use]
    pub fn mode(&self) -> Option<Vec<T>> {
        let min = self.counts.values().min()?;
        let max = self.counts.values().max()?;

        if min == max {
            return None;
        }

        Some(
            self.iter()
                .filter(|&(_, count)| count == *max)
                .map(|(value, _)| value)
                .collect(),
        )
    }
}

impl<T: Element> FromIterator<T> for Histogram<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut histogram = Self::new();
        iter.into_iter().for_each(|value| histogram.insert(value));
        histogram
    }
}
