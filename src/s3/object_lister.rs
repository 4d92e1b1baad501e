// Implement the ObjectLister trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::{
    ObjectLister,
    ObjectRecords,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl ObjectLister for Client {
    /// Return every object in `bucket` under `prefix` using ListObjectsV2.
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<&str>,
    ) -> Result<ObjectRecords> {
        let records = Client::list_objects(self, bucket, prefix).await?;

        debug!("list_objects: '{}' holds {} objects", bucket, records.len());

        Ok(records)
    }
}
