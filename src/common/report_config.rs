// ReportConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::{
    BucketNames,
    ChunkPolicy,
    FailurePolicy,
    ReportError,
    SizeUnit,
};

/// Everything the orchestrator needs to know about a run.
#[derive(Debug)]
pub struct ReportConfig {
    /// Buckets to report on, in processing order.
    pub bucket_names: BucketNames,

    /// Only report on objects whose keys start with this prefix.
    pub prefix: Option<String>,

    /// Bucket that reports are written to.
    pub output_bucket: String,

    /// Key prefix that reports are written under.
    pub output_directory: String,

    /// How each report is split into chunks.
    pub chunk_policy: ChunkPolicy,

    /// Whether a failed bucket stops the run.
    pub failure_policy: FailurePolicy,

    /// Unit used for sizes in the console summary.
    pub size_unit: SizeUnit,
}

/// Split a delimited list of bucket names.
///
/// Names are trimmed of surrounding whitespace and empty items are skipped,
/// an input with no names at all is an error.
pub fn parse_bucket_names(names: &str) -> Result<BucketNames, ReportError> {
    let bucket_names: BucketNames = names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    if bucket_names.is_empty() {
        return Err(ReportError::Config(
            format!("no bucket names found in '{}'", names),
        ));
    }

    Ok(bucket_names)
}
