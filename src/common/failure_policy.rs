// FailurePolicy
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::str::FromStr;

/// What happens to the rest of a run when one bucket fails.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FailurePolicy {
    /// Stop processing at the first failed bucket.
    #[default]
    Abort,

    /// Record the failure and carry on with the next bucket.
    Continue,
}

impl FromStr for FailurePolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort"    => Ok(Self::Abort),
            "continue" => Ok(Self::Continue),
            _          => Err("no match"),
        }
    }
}
