// Implement the ReportWriter trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::ReportWriter;
use super::client::Client;

#[async_trait]
impl ReportWriter for Client {
    /// Write `body` to `key` in `bucket` using PutObject.
    async fn write(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.put_object(bucket, key, body).await
    }
}
