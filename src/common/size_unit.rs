// SizeUnit
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use humansize::{
    FormatSizeOptions,
    BINARY,
    DECIMAL,
};
use std::str::FromStr;

/// `SizeUnit` represents how totals are displayed in the console summary.
///
/// Reports written to storage always carry raw byte counts.
#[derive(Clone, Debug)]
pub enum SizeUnit {
    /// Human readable using IEC units (multiples of 1024).
    Binary(FormatSizeOptions),

    /// The number of bytes.
    Bytes,

    /// Human readable using SI units (multiples of 1000).
    Decimal(FormatSizeOptions),
}

impl Default for SizeUnit {
    fn default() -> Self {
        Self::Bytes
    }
}

/// This converts from the string arguments we receive on the command line to
/// our enum type.
impl FromStr for SizeUnit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // No space between value and unit so output sorts with `sort -h`.
        match s {
            "binary"  => Ok(Self::Binary(BINARY.space_after_value(false))),
            "bytes"   => Ok(Self::Bytes),
            "decimal" => Ok(Self::Decimal(DECIMAL.space_after_value(false))),
            _         => Err("no match"),
        }
    }
}
