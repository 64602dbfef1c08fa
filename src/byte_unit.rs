//! Magnitudes of data and conversions between them.

use std::fmt::Display;

/// An error raised when a magnitude does not fit into a [`u64`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum ByteUnitError {
    /// The result overflowed.
    #[error("Encountered overflow while computing power {0}")]
    Overflow(u32),
}

/// A system of unit prefixes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrefixScale {
    /// SI prefixes, counting in powers of 1000.
    #[display("SI")]
    Si,
    /// IEC prefixes, counting in powers of 1024.
    #[display("IEC")]
    Iec,
}

impl PrefixScale {
    /// The base of the prefix system.
    #[must_use]
    pub const fn value(self) -> u64 {
        match self {
            Self::Si => 1000,
            Self::Iec => 1024,
        }
    }

    /// Raises the base of the prefix system to the power of `exponent`.
    ///
    /// # Errors
    /// [`ByteUnitError::Overflow`] if the result does not fit into a [`u64`].
    pub const fn pow(self, exponent: u32) -> Result<u64, ByteUnitError> {
        match self.value().checked_pow(exponent) {
            Some(it) => Ok(it),
            None => Err(ByteUnitError::Overflow(exponent)),
        }
    }
}

/// A magnitude of data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum ByteUnit {
    /// A single byte.
    Byte,
    /// 1000 bytes.
    Kilobyte,
    /// 1024 bytes.
    Kibibyte,
    /// 1000² bytes.
    Megabyte,
    /// 1024² bytes.
    Mebibyte,
    /// 1000³ bytes.
    Gigabyte,
    /// 1024³ bytes.
    Gibibyte,
    /// 1000⁴ bytes.
    Terabyte,
    /// 1024⁴ bytes.
    Tebibyte,
}

impl ByteUnit {
    /// All the units, from the smallest to the largest.
    pub const ALL: [Self; 9] = [
        Self::Byte,
        Self::Kilobyte,
        Self::Kibibyte,
        Self::Megabyte,
        Self::Mebibyte,
        Self::Gigabyte,
        Self::Gibibyte,
        Self::Terabyte,
        Self::Tebibyte,
    ];

    /// The unit symbol, e.g. `KiB`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Byte => "B",
            Self::Kilobyte => "kB",
            Self::Kibibyte => "KiB",
            Self::Megabyte => "MB",
            Self::Mebibyte => "MiB",
            Self::Gigabyte => "GB",
            Self::Gibibyte => "GiB",
            Self::Terabyte => "TB",
            Self::Tebibyte => "TiB",
        }
    }

    /// The prefix system and the exponent of the unit.
    #[must_use]
    pub const fn prefix(self) -> (PrefixScale, u32) {
        match self {
            Self::Byte => (PrefixScale::Si, 0),
            Self::Kilobyte => (PrefixScale::Si, 1),
            Self::Kibibyte => (PrefixScale::Iec, 1),
            Self::Megabyte => (PrefixScale::Si, 2),
            Self::Mebibyte => (PrefixScale::Iec, 2),
            Self::Gigabyte => (PrefixScale::Si, 3),
            Self::Gibibyte => (PrefixScale::Iec, 3),
            Self::Terabyte => (PrefixScale::Si, 4),
            Self::Tebibyte => (PrefixScale::Iec, 4),
        }
    }

    /// The number of bytes in one unit.
    #[must_use]
    pub const fn scale(self) -> u64 {
        let (prefix, exponent) = self.prefix();
        // At most 1024⁴, far below `u64::MAX`.
        prefix.value().pow(exponent)
    }

    /// Converts a number of bytes into this unit, truncating the remainder.
    #[must_use]
    pub const fn convert_integral(self, bytes: u64) -> u64 {
        bytes / self.scale()
    }

    /// Converts a number of bytes into this unit.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn convert_real(self, bytes: u64) -> f64 {
        bytes as f64 / self.scale() as f64
    }

    /// Converts a number of this unit into bytes.
    /// Returns [`None`] on overflow.
    #[must_use]
    pub const fn scale_integral(self, amount: u64) -> Option<u64> {
        self.scale().checked_mul(amount)
    }

    /// Converts a fractional number of this unit into bytes, truncating the fraction of a byte.
    /// Negative amounts yield zero and overflowing amounts yield [`u64::MAX`].
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn scale_real(self, amount: f64) -> u64 {
        (self.scale() as f64 * amount) as u64
    }
}

impl Display for ByteUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
