// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chunk_policy;
mod client_config;
mod directory_total;
mod error;
mod failure_policy;
mod human_size;
mod object_lister;
mod object_record;
mod region;
mod report_config;
mod report_writer;
mod size_unit;

pub use chunk_policy::*;
pub use client_config::*;
pub use directory_total::*;
pub use error::*;
pub use failure_policy::*;
pub use human_size::*;
pub use object_lister::*;
pub use object_record::*;
pub use region::*;
pub use report_config::*;
pub use report_writer::*;
pub use size_unit::*;

/// Bucket names, in the order they were configured.
pub type BucketNames = Vec<String>;
