// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    anyhow,
    bail,
    Context,
    Result,
};
use aws_config::BehaviorVersion;
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::primitives::ByteStream;
use crate::common::{
    ClientConfig,
    ObjectRecord,
    ObjectRecords,
};
use tracing::debug;

/// Content type of the reports we write.
const CONTENT_TYPE: &str = "application/json";

/// The S3 `Client`.
///
/// One `Client` is created per run and handed to everything that needs to
/// talk to S3.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client` with the given `ClientConfig`.
    pub async fn new(config: ClientConfig) -> Self {
        let region = config.region;

        debug!(
            "new: Creating S3Client in region '{}' with endpoint {:?}",
            region.name(),
            config.endpoint,
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(region);

        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        // S3 compatible stores rarely support virtual hosted buckets.
        let s3_config = S3ConfigBuilder::from(&sdk_config)
            .force_path_style(config.endpoint.is_some())
            .build();

        Self {
            client: S3Client::from_conf(s3_config),
        }
    }

    /// Returns every object in `bucket`, optionally limited to keys starting
    /// with `prefix`.
    ///
    /// Follows continuation tokens until the listing is no longer truncated.
    pub async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<&str>,
    ) -> Result<ObjectRecords> {
        debug!("list_objects for '{}' with prefix {:?}", bucket, prefix);

        let mut continuation_token = None;
        let mut records            = ObjectRecords::new();

        // Loop until all objects are processed.
        loop {
            let output = self.client.list_objects_v2()
                .bucket(bucket)
                .set_prefix(prefix.map(String::from))
                .set_continuation_token(continuation_token)
                .send()
                .await
                .with_context(|| format!("ListObjectsV2 failed for '{}'", bucket))?;

            for object in output.contents() {
                let key = object.key()
                    .ok_or_else(|| anyhow!("object without a key in '{}'", bucket))?;

                let size = object.size()
                    .ok_or_else(|| anyhow!("object '{}' has no size", key))?;

                records.push(ObjectRecord::new(bucket, key, size)?);
            }

            debug!(
                "list_objects: {} objects so far for '{}'",
                records.len(),
                bucket,
            );

            // If the output was truncated we should have a
            // next_continuation_token, without one we'd loop forever.
            match output.is_truncated() {
                Some(true) => {
                    let nct = output.next_continuation_token()
                        .map(String::from);

                    if nct.is_none() {
                        bail!("truncated listing of '{}' without a continuation token", bucket);
                    }

                    continuation_token = nct;
                },
                _ => break,
            }
        }

        Ok(records)
    }

    /// Write `body` to `key` in `bucket`, replacing any existing object.
    pub async fn put_object(
        &self,
        bucket: &str,
        key:    &str,
        body:   Vec<u8>,
    ) -> Result<()> {
        debug!("put_object: {} bytes to '{}/{}'", body.len(), bucket, key);

        self.client.put_object()
            .bucket(bucket)
            .key(key)
            .content_type(CONTENT_TYPE)
            .body(ByteStream::from(body))
            .send()
            .await
            .with_context(|| format!("PutObject failed for '{}/{}'", bucket, key))?;

        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use aws_credential_types::Credentials;
    use aws_sdk_s3::config::Config as S3Config;
    use aws_smithy_http_client::test_util::{
        ReplayEvent,
        StaticReplayClient,
    };
    use aws_smithy_types::body::SdkBody;
    use crate::common::ObjectType;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;

    pub enum ResponseType<'a> {
        FromFile(&'a str),
        WithStatus(u16),
    }

    // Create a mock S3 client, replaying the given responses in order.
    // S3 tests in other modules import this too.
    pub fn mock_client(responses: Vec<ResponseType<'_>>) -> Client {
        client_with(replay_client(responses))
    }

    // The replay client behind mock_client, kept when a test needs to
    // inspect the requests that were sent.
    fn replay_client(responses: Vec<ResponseType<'_>>) -> StaticReplayClient {
        let events = responses
            .iter()
            .map(|r| {
                let (status, body) = match r {
                    ResponseType::FromFile(file) => {
                        let path = Path::new("test-data").join(file);
                        let data = fs::read_to_string(path).unwrap();

                        (200, data)
                    },
                    ResponseType::WithStatus(status) => (*status, String::new()),
                };

                ReplayEvent::new(
                    http::Request::builder()
                        .body(SdkBody::empty())
                        .unwrap(),

                    http::Response::builder()
                        .status(status)
                        .body(SdkBody::from(body))
                        .unwrap(),
                )
            })
            .collect();

        StaticReplayClient::new(events)
    }

    fn client_with(http_client: StaticReplayClient) -> Client {
        let creds = Credentials::from_keys(
            "ATESTCLIENT",
            "atestsecretkey",
            Some("atestsessiontoken".to_string()),
        );

        let conf = S3Config::builder()
            .behavior_version_latest()
            .credentials_provider(creds)
            .http_client(http_client)
            .region(aws_sdk_s3::config::Region::new("eu-west-1"))
            .build();

        Client {
            client: S3Client::from_conf(conf),
        }
    }

    #[tokio::test]
    async fn test_list_objects() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-list-objects.xml"),
        ]);

        let ret = client.list_objects("test-bucket", None).await.unwrap();

        let keys: Vec<(&str, u64, ObjectType)> = ret
            .iter()
            .map(|r| (r.object_key.as_str(), r.size, r.object_type))
            .collect();

        let expected = vec![
            ("a/b/f1", 10, ObjectType::File),
            ("a/f2",   5,  ObjectType::File),
            ("c/",     0,  ObjectType::DirectoryMarker),
            ("c/f3",   7,  ObjectType::File),
        ];

        assert_eq!(keys, expected);
        assert!(ret.iter().all(|r| r.bucket_name == "test-bucket"));
    }

    #[tokio::test]
    async fn test_list_objects_with_prefix() {
        let replay = replay_client(vec![
            ResponseType::FromFile("s3-list-objects-prefix.xml"),
        ]);
        let client = client_with(replay.clone());

        let ret = client.list_objects("test-bucket", Some("logs")).await.unwrap();

        let keys: Vec<&str> = ret
            .iter()
            .map(|r| r.object_key.as_str())
            .collect();

        assert_eq!(keys, vec!["logs/2024/app.log", "logs/2024/db.log"]);

        // The prefix is sent to S3 rather than filtered locally.
        let uris: Vec<String> = replay
            .actual_requests()
            .map(|r| r.uri().to_string())
            .collect();

        assert_eq!(uris.len(), 1);
        assert!(uris[0].contains("prefix=logs"));
    }

    #[tokio::test]
    async fn test_list_objects_paginated() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-list-objects-page-1.xml"),
            ResponseType::FromFile("s3-list-objects-page-2.xml"),
        ]);

        let ret = client.list_objects("test-bucket", None).await.unwrap();

        let keys: Vec<&str> = ret
            .iter()
            .map(|r| r.object_key.as_str())
            .collect();

        let expected = vec![
            "index.html",
            "logs/2024/app.log",
            "logs/2024/db.log",
        ];

        assert_eq!(keys, expected);
    }

    #[tokio::test]
    async fn test_list_objects_truncated_without_token() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-list-objects-truncated-no-token.xml"),
        ]);

        let ret = client.list_objects("test-bucket", None).await;

        assert!(ret.is_err());
    }

    #[tokio::test]
    async fn test_list_objects_negative_size() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-list-objects-negative-size.xml"),
        ]);

        let ret = client.list_objects("test-bucket", None).await;

        assert!(ret.is_err());
    }

    #[tokio::test]
    async fn test_list_objects_access_denied() {
        let client = mock_client(vec![ResponseType::WithStatus(403)]);

        let ret = client.list_objects("test-bucket", None).await;

        assert!(ret.is_err());
    }

    #[tokio::test]
    async fn test_put_object() {
        let tests = vec![
            (200, true),
            (403, false),
        ];

        for test in tests {
            let status   = test.0;
            let expected = test.1;

            let client = mock_client(vec![ResponseType::WithStatus(status)]);

            let ret = client.put_object(
                "output-bucket",
                "reports/latest/logs_chunk_0.json",
                b"[]".to_vec(),
            ).await;

            assert_eq!(ret.is_ok(), expected);
        }
    }
}
