//! s3dirsize: Writes per-directory size reports of AWS S3 buckets back to S3.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    anyhow,
    Context,
    Result,
};
use chrono::Local;
use clap::ArgMatches;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod common;
mod dry_run;
mod report;
mod s3;

use common::{
    parse_bucket_names,
    ChunkPolicy,
    ClientConfig,
    Region,
    ReportConfig,
};
use dry_run::DryRunWriter;
use report::{
    Orchestrator,
    RunSummary,
};

// Environment variable holding the log filter directives
const LOG_ENV: &str = "S3DIRSIZE_LOG";

// Logs go to stderr, stdout carries the progress report.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// Return the ClientConfig for the S3 client
fn client_config(matches: &ArgMatches) -> ClientConfig {
    let region = match matches.get_one::<String>("REGION") {
        Some(region) => Region::new().set_region(region),
        None         => Region::new(),
    };

    ClientConfig {
        region:   region,
        endpoint: matches.get_one::<String>("ENDPOINT").cloned(),
    }
}

// Return the ReportConfig for the run
fn report_config(matches: &ArgMatches) -> Result<ReportConfig> {
    let buckets = matches.get_one::<String>("BUCKETS")
        .context("no buckets given")?;

    let output_bucket = matches.get_one::<String>("OUTPUT_BUCKET")
        .context("no output bucket given")?;

    let output_directory = matches.get_one::<String>("OUTPUT_DIRECTORY")
        .context("no output directory given")?;

    let chunk_policy = matches.get_one::<ChunkPolicy>("CHUNK_SIZE")
        .copied()
        .context("no chunk size given")?;

    let config = ReportConfig {
        bucket_names:     parse_bucket_names(buckets)?,
        prefix:           matches.get_one::<String>("PREFIX").cloned(),
        output_bucket:    output_bucket.to_owned(),
        output_directory: output_directory.to_owned(),
        chunk_policy:     chunk_policy,
        failure_policy:   cli::failure_policy(matches),
        size_unit:        cli::size_unit(matches),
    };

    debug!("report_config: {:?}", config);

    Ok(config)
}

// Report failed and skipped buckets, erroring if there were any.
fn check_summary(summary: RunSummary) -> Result<()> {
    if summary.is_success() {
        return Ok(());
    }

    let failed  = summary.failed.len();
    let skipped = summary.skipped.len();

    for failure in summary.failed {
        let stage = failure.error.stage();
        let err   = anyhow::Error::from(failure.error);

        eprintln!(
            "Error: bucket '{}' failed at {}: {:#}",
            failure.bucket_name,
            stage,
            err,
        );
    }

    if !summary.skipped.is_empty() {
        eprintln!("Skipped buckets: {}", summary.skipped.join(", "));
    }

    Err(anyhow!("{} buckets failed, {} skipped", failed, skipped))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let matches       = cli::parse_args();
    let report_config = report_config(&matches)?;
    let client        = s3::Client::new(client_config(&matches)).await;
    let date          = Local::now().date_naive();

    let summary = if matches.get_flag("DRY_RUN") {
        Orchestrator::new(&client, &DryRunWriter, &report_config)
            .run(date)
            .await
    }
    else {
        Orchestrator::new(&client, &client, &report_config)
            .run(date)
            .await
    };

    check_summary(summary)
}
