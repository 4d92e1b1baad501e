// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::{
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgAction,
    ArgMatches,
    Command,
};
use crate::common::{
    ChunkPolicy,
    FailurePolicy,
    SizeUnit,
};
use std::str::FromStr;
use tracing::debug;

// Default chunking if one isn't provided on the command line
const DEFAULT_CHUNK_SIZE: &str = "count:1000";

// Default failure policy
const DEFAULT_ON_ERROR: &str = "abort";

// Default unit for the console summary
const DEFAULT_UNIT: &str = "binary";

// These should match the string values in the FromStr impls in common
const ON_ERROR_VALUES: &[&str] = &[
    "abort",
    "continue",
];

const UNIT_VALUES: &[&str] = &[
    "binary",
    "bytes",
    "decimal",
];

// Create the clap command
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("BUCKETS")
                .env("S3DIRSIZE_BUCKETS")
                .long("buckets")
                .short('b')
                .value_name("BUCKETS")
                .help("Comma separated list of buckets to report on")
                .required(true)
        )
        .arg(
            Arg::new("CHUNK_SIZE")
                .env("S3DIRSIZE_CHUNK_SIZE")
                .long("chunk-size")
                .short('c')
                .value_name("POLICY")
                .help("Split reports into chunks of 'count:<entries>' or 'bytes:<bytes>'")
                .default_value(DEFAULT_CHUNK_SIZE)
                .value_parser(ChunkPolicy::from_str)
        )
        .arg(
            Arg::new("DRY_RUN")
                .long("dry-run")
                .help("Log the report chunks instead of writing them")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("ENDPOINT")
                .env("S3DIRSIZE_ENDPOINT")
                .long("endpoint")
                .short('e')
                .value_name("URL")
                .help("Custom S3 endpoint URL, for S3 compatible stores")
        )
        .arg(
            Arg::new("ON_ERROR")
                .env("S3DIRSIZE_ON_ERROR")
                .long("on-error")
                .value_name("POLICY")
                .help("Abort the run or continue with the next bucket when one fails")
                .default_value(DEFAULT_ON_ERROR)
                .value_parser(ON_ERROR_VALUES.to_vec())
        )
        .arg(
            Arg::new("OUTPUT_BUCKET")
                .env("S3DIRSIZE_OUTPUT_BUCKET")
                .long("output-bucket")
                .short('o')
                .value_name("BUCKET")
                .help("Bucket that reports are written to")
                .required(true)
        )
        .arg(
            Arg::new("OUTPUT_DIRECTORY")
                .env("S3DIRSIZE_OUTPUT_DIRECTORY")
                .long("output-directory")
                .short('d')
                .value_name("PREFIX")
                .help("Key prefix that reports are written under")
                .required(true)
        )
        .arg(
            Arg::new("PREFIX")
                .env("S3DIRSIZE_PREFIX")
                .long("prefix")
                .short('p')
                .value_name("PREFIX")
                .help("Only report on objects whose keys start with this prefix")
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to create the client in")
        )
        .arg(
            Arg::new("UNIT")
                .env("S3DIRSIZE_UNIT")
                .long("unit")
                .short('u')
                .value_name("UNIT")
                .help("Unit to display sizes in on the console")
                .default_value(DEFAULT_UNIT)
                .value_parser(UNIT_VALUES.to_vec())
        )
}

/// Parse the command line arguments.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}

/// Returns the `FailurePolicy` selected on the command line.
pub fn failure_policy(matches: &ArgMatches) -> FailurePolicy {
    // Unwraps are fine, clap restricts the values and provides a default.
    let value = matches.get_one::<String>("ON_ERROR").unwrap();

    FailurePolicy::from_str(value).unwrap()
}

/// Returns the `SizeUnit` selected on the command line.
pub fn size_unit(matches: &ArgMatches) -> SizeUnit {
    let value = matches.get_one::<String>("UNIT").unwrap();

    SizeUnit::from_str(value).unwrap()
}
