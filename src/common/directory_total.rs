// DirectoryTotal and Report
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use serde::{
    Deserialize,
    Serialize,
};

/// Directory string representing the root of a bucket.
pub const ROOT_DIRECTORY: &str = "/";

/// The aggregated size of everything beneath a directory of a bucket.
///
/// Serializes as `{"bucketName": ..., "directory": ..., "size": ...}`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryTotal {
    /// Bucket the directory belongs to.
    pub bucket_name: String,

    /// The directory, either `/` or a prefix without a trailing delimiter.
    pub directory: String,

    /// Total size in bytes of the directory's entire subtree.
    pub size: u64,
}

/// Ordered directory totals for a single bucket.
pub type Report = Vec<DirectoryTotal>;
