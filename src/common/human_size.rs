// HumanSize trait and implementations
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::SizeUnit;
use humansize::format_size;

/// `HumanSize` trait.
pub trait HumanSize {
    /// Render `self` as a size in the given `unit`.
    fn humansize(&self, unit: &SizeUnit) -> String;
}

impl HumanSize for u64 {
    fn humansize(&self, unit: &SizeUnit) -> String {
        match unit {
            SizeUnit::Binary(opts)  => format_size(*self, opts),
            SizeUnit::Bytes         => self.to_string(),
            SizeUnit::Decimal(opts) => format_size(*self, opts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_humansize() {
        let tests = vec![
            (0,         "binary", "0B"),
            (1024,      "binary", "1KiB"),
            (1,         "bytes",  "1"),
            (1_048_576, "bytes",  "1048576"),
        ];

        for test in tests {
            let size: u64 = test.0;
            let unit      = SizeUnit::from_str(test.1).unwrap();
            let expected  = test.2;

            let ret = size.humansize(&unit);

            assert_eq!(ret, expected);
        }
    }
}
