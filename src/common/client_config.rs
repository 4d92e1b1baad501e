// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::Region;

/// Configuration for the S3 client.
#[derive(Debug, Default)]
pub struct ClientConfig {
    /// The region that our AWS client should be created in.
    pub region: Region,

    /// Custom endpoint URL for S3 compatible stores.
    ///
    /// When set, path style addressing is used.
    pub endpoint: Option<String>,
}
