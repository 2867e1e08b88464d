use bitflags::bitflags;

bitflags! {
    /// Flags controlling what a summary computes
    ///
    /// The flags print and parse in the `bitflags` text form, e.g.
    /// `"HISTOGRAM | EXACT"`.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Options: u8 {
        /// Count occurrences of each value
        ///
        /// The mode is only computed when the histogram is enabled.
        const HISTOGRAM = 0x01;

        /// Require lossless conversion to `f64`
        ///
        /// Elements are converted to `f64` for the approximate sum, deltas
        /// and the median.  By default the conversion rounds to nearest.
        /// With this flag, a value that `f64` cannot hold exactly fails the
        /// conversion instead, which is then reported as an issue or as an
        /// absent field.
        const EXACT = 0x02;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Options {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Options {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

impl Options {
    /// Whether the histogram (and hence the mode) is requested
    #[must_use]
    pub const fn histogram(self) -> bool {
        self.contains(Self::HISTOGRAM)
    }

    /// Whether conversions to `f64` must be lossless
    #[must_use]
    pub const fn exact(self) -> bool {
        self.contains(Self::EXACT)
    }
}
