// Drives the per-bucket report pipeline
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::NaiveDate;
use crate::common::{
    BucketNames,
    FailurePolicy,
    HumanSize,
    ObjectLister,
    ReportConfig,
    ReportError,
    ReportWriter,
    ROOT_DIRECTORY,
};
use crate::report::{
    aggregate,
    chunk,
    OutputKeys,
};
use tracing::{
    debug,
    error,
    info,
};

/// What was produced for a bucket that completed.
#[derive(Debug, Eq, PartialEq)]
pub struct BucketSummary {
    /// Name of the bucket.
    pub bucket_name: String,

    /// Number of directories in the report.
    pub directories: usize,

    /// Total size of every file in the bucket.
    pub total_size: u64,

    /// Number of chunks written, each to both the dated and latest keys.
    pub chunks: usize,
}

/// A bucket that failed, with the reason.
#[derive(Debug)]
pub struct BucketFailure {
    /// Name of the bucket.
    pub bucket_name: String,

    /// Why it failed.
    pub error: ReportError,
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Buckets whose reports were fully written, in processing order.
    pub completed: Vec<BucketSummary>,

    /// Buckets that failed, in processing order.
    pub failed: Vec<BucketFailure>,

    /// Buckets never attempted because an earlier bucket failed and the run
    /// was aborted.
    pub skipped: BucketNames,
}

impl RunSummary {
    /// Returns `true` if every bucket completed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

/// Runs list, aggregate, chunk and write for each configured bucket.
///
/// The lister and writer are injected and only live as long as the run.
pub struct Orchestrator<'a, L, W> {
    lister: &'a L,
    writer: &'a W,
    config: &'a ReportConfig,
}

impl<'a, L, W> Orchestrator<'a, L, W>
where
    L: ObjectLister,
    W: ReportWriter,
{
    /// Return a new `Orchestrator`.
    pub fn new(lister: &'a L, writer: &'a W, config: &'a ReportConfig) -> Self {
        Self {
            lister,
            writer,
            config,
        }
    }

    /// Process every configured bucket in order, dating reports with `date`.
    ///
    /// Buckets are handled one at a time. Output already written for earlier
    /// buckets is left in place when a later one fails.
    pub async fn run(&self, date: NaiveDate) -> RunSummary {
        let keys        = OutputKeys::new(&self.config.output_directory, date);
        let mut summary = RunSummary::default();
        let mut buckets = self.config.bucket_names.iter();
        let mut aborted = false;

        for bucket in buckets.by_ref() {
            match self.process_bucket(bucket, &keys).await {
                Ok(bucket_summary) => {
                    println!(
                        "Bucket '{}': {} directories, {} in total, {} chunks",
                        bucket_summary.bucket_name,
                        bucket_summary.directories,
                        bucket_summary.total_size.humansize(&self.config.size_unit),
                        bucket_summary.chunks,
                    );

                    summary.completed.push(bucket_summary);
                },
                Err(err) => {
                    error!(bucket = %bucket, stage = err.stage(), "{}", err);

                    summary.failed.push(BucketFailure {
                        bucket_name: bucket.into(),
                        error:       err,
                    });

                    if self.config.failure_policy == FailurePolicy::Abort {
                        aborted = true;
                        break;
                    }
                },
            }
        }

        if aborted {
            summary.skipped = buckets.cloned().collect();
        }

        println!(
            "Finished: {} of {} bucket reports {} '{}/{}'",
            summary.completed.len(),
            self.config.bucket_names.len(),
            self.writer.action(),
            self.config.output_bucket,
            self.config.output_directory,
        );

        summary
    }

    /// Produce and write the report for a single bucket.
    pub async fn process_bucket(
        &self,
        bucket: &str,
        keys:   &OutputKeys,
    ) -> Result<BucketSummary, ReportError> {
        info!("Listing objects in '{}'", bucket);

        let prefix = self.config.prefix.as_deref();

        // Bad records found while listing keep their own error, anything
        // else is a listing failure.
        let records = self.lister.list_objects(bucket, prefix)
            .await
            .map_err(|source| {
                match source.downcast::<ReportError>() {
                    Ok(err @ ReportError::InvalidRecord { .. }) => err,
                    Ok(err) => {
                        ReportError::Listing {
                            bucket: bucket.into(),
                            source: err.into(),
                        }
                    },
                    Err(source) => {
                        ReportError::Listing {
                            bucket: bucket.into(),
                            source: source,
                        }
                    },
                }
            })?;

        let report = aggregate(bucket, &records)?;
        let chunks = chunk(bucket, &report, self.config.chunk_policy)?;

        let total_size = report
            .iter()
            .find(|total| total.directory == ROOT_DIRECTORY)
            .map_or(0, |total| total.size);

        let chunk_count = chunks.len();

        for chunk in chunks {
            let dated  = keys.dated(bucket, chunk.index);
            let latest = keys.latest(bucket, chunk.index);

            debug!(
                "Writing chunk {} of '{}' ({} bytes, {:?} entries)",
                chunk.index,
                bucket,
                chunk.body.len(),
                chunk.entries,
            );

            self.write(bucket, &dated, chunk.body.clone()).await?;
            self.write(bucket, &latest, chunk.body).await?;

            println!("{}", self.chunk_message(bucket, chunk.index, &dated, &latest));
        }

        Ok(BucketSummary {
            bucket_name: bucket.into(),
            directories: report.len(),
            total_size:  total_size,
            chunks:      chunk_count,
        })
    }

    // Progress line for a chunk, worded by what the writer actually does.
    fn chunk_message(
        &self,
        bucket: &str,
        index:  usize,
        dated:  &str,
        latest: &str,
    ) -> String {
        let output_bucket = &self.config.output_bucket;

        format!(
            "Bucket '{}': chunk {} {} '{}/{}' and '{}/{}'",
            bucket,
            index,
            self.writer.action(),
            output_bucket,
            dated,
            output_bucket,
            latest,
        )
    }

    async fn write(
        &self,
        bucket: &str,
        key:    &str,
        body:   Vec<u8>,
    ) -> Result<(), ReportError> {
        self.writer.write(&self.config.output_bucket, key, body)
            .await
            .map_err(|source| {
                ReportError::Write {
                    bucket: bucket.into(),
                    key:    key.into(),
                    source: source,
                }
            })
    }
}
