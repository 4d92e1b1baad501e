// Error types for report generation
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use thiserror::Error;

/// Errors raised while producing and persisting a bucket report.
///
/// Each variant names the bucket it happened in, so a failed run can be
/// diagnosed from the message alone.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The object listing could not be obtained.
    #[error("failed to list objects in '{bucket}'")]
    Listing {
        /// Bucket being listed.
        bucket: String,

        /// Underlying provider error.
        #[source]
        source: anyhow::Error,
    },

    /// An object record had an invalid shape.
    #[error("invalid object '{key}' in '{bucket}': {reason}")]
    InvalidRecord {
        /// Bucket the record belongs to.
        bucket: String,

        /// Key of the offending record.
        key: String,

        /// What was wrong with it.
        reason: String,
    },

    /// A report could not be serialized.
    #[error("failed to serialize report for '{bucket}'")]
    Serialize {
        /// Bucket whose report was being serialized.
        bucket: String,

        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// A chunk could not be written to storage.
    #[error("failed to write '{key}' for '{bucket}'")]
    Write {
        /// Bucket whose report was being written.
        bucket: String,

        /// Destination key of the failed write.
        key: String,

        /// Underlying provider error.
        #[source]
        source: anyhow::Error,
    },

    /// The run configuration was invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ReportError {
    /// Shorthand for an `InvalidRecord` error.
    pub fn invalid_record(
        bucket: &str,
        key:    &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRecord {
            bucket: bucket.into(),
            key:    key.into(),
            reason: reason.into(),
        }
    }

    /// Name of the pipeline stage the error was raised in.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Listing { .. }       => "list",
            Self::InvalidRecord { .. } => "aggregate",
            Self::Serialize { .. }     => "chunk",
            Self::Write { .. }         => "write",
            Self::Config(_)            => "config",
        }
    }
}
