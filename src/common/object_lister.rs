// ObjectLister trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::ObjectRecords;

/// `ObjectLister` represents the ability to list every object in a bucket.
///
/// Implementations must follow pagination until the provider reports no more
/// pages, callers only ever see a complete listing.
#[async_trait]
pub trait ObjectLister {
    /// Returns every object in `bucket`, in provider order.
    ///
    /// With a `prefix`, only objects whose keys start with it are returned.
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<&str>,
    ) -> Result<ObjectRecords>;
}
