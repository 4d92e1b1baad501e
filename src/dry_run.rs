// A ReportWriter that doesn't write
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::ReportWriter;
use tracing::info;

/// `DryRunWriter` logs where report chunks would have been written.
///
/// Listing still talks to S3, only the writes are skipped.
#[derive(Debug, Default)]
pub struct DryRunWriter;

#[async_trait]
impl ReportWriter for DryRunWriter {
    async fn write(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        info!("dry run: skipping write of {} bytes to '{}/{}'", body.len(), bucket, key);

        Ok(())
    }

    fn action(&self) -> &'static str {
        "would be written to"
    }
}
