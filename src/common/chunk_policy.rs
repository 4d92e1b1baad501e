// ChunkPolicy
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::num::NonZeroUsize;
use std::str::FromStr;

/// How a report is split into chunks for storage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChunkPolicy {
    /// At most this many directory totals per chunk.
    Count(NonZeroUsize),

    /// At most this many bytes of serialized report per chunk.
    Bytes(NonZeroUsize),
}

/// Parses `count:<n>`, `bytes:<n>` or a bare `<n>`, which is treated as a
/// count.
impl FromStr for ChunkPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = match s.split_once(':') {
            Some((kind, value)) => (kind, value),
            None                => ("count", s),
        };

        let value = value.trim()
            .parse::<NonZeroUsize>()
            .map_err(|_| "chunk size must be a positive integer")?;

        match kind.trim() {
            "count" => Ok(Self::Count(value)),
            "bytes" => Ok(Self::Bytes(value)),
            _       => Err("chunk policy must be 'count' or 'bytes'"),
        }
    }
}
