// ReportWriter trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;

/// `ReportWriter` persists serialized report bodies to object storage.
///
/// Writes overwrite whatever is stored at `key` and are safe to repeat.
#[async_trait]
pub trait ReportWriter {
    /// Write `body` to `key` in `bucket`.
    async fn write(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;

    /// How progress output describes a completed `write`.
    fn action(&self) -> &'static str {
        "written to"
    }
}
