// Building, chunking and writing directory size reports
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Directory Aggregator: object listings to per directory totals.
mod aggregator;

/// Report Chunker: splits a report into bounded pieces for storage.
mod chunker;

/// Bucket Orchestrator: runs the pipeline across the configured buckets.
mod orchestrator;

/// Dated and latest destination keys.
mod output_key;

pub use aggregator::*;
pub use chunker::*;
pub use orchestrator::*;
pub use output_key::*;
