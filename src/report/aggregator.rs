// Directory size aggregation
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    DirectoryTotal,
    ObjectRecord,
    Report,
    ReportError,
    DELIMITER,
    ROOT_DIRECTORY,
};
use indexmap::IndexMap;
use std::iter;
use tracing::debug;

/// Returns the immediate parent directory of `path`.
///
/// A path without a delimiter, or whose only delimiter is the leading one,
/// lives in the root.
pub fn parent_directory(path: &str) -> &str {
    match path.rfind(DELIMITER) {
        Some(0) | None => ROOT_DIRECTORY,
        Some(index)    => &path[..index],
    }
}

/// Iterates over `directory` followed by each of its ancestors, ending with
/// the root.
///
/// Ancestors are found by dropping whole path components, so `ab` is never
/// an ancestor of `abc`.
fn lineage(directory: &str) -> impl Iterator<Item = &str> + '_ {
    iter::successors(Some(directory), |dir| {
        if *dir == ROOT_DIRECTORY {
            None
        }
        else {
            Some(parent_directory(*dir))
        }
    })
}

fn checked_add(
    bucket: &str,
    key:    &str,
    total:  u64,
    size:   u64,
) -> Result<u64, ReportError> {
    total.checked_add(size).ok_or_else(|| {
        ReportError::invalid_record(bucket, key, "size total overflows u64")
    })
}

fn validate(bucket: &str, record: &ObjectRecord) -> Result<(), ReportError> {
    if record.object_key.is_empty() {
        return Err(ReportError::invalid_record(
            bucket,
            &record.object_key,
            "object key is empty",
        ));
    }

    if record.bucket_name != bucket {
        return Err(ReportError::invalid_record(
            bucket,
            &record.object_key,
            format!("record was listed from '{}'", record.bucket_name),
        ));
    }

    Ok(())
}

/// Aggregate the object `records` of `bucket` into per directory totals.
///
/// Each directory's total covers its whole subtree. Directories are emitted
/// in the order they were first seen, where seeing a file registers its
/// parent directory, then each ancestor up to and including the root.
///
/// Directory markers are skipped and their declared sizes ignored, so a
/// bucket holding nothing but markers produces an empty report.
pub fn aggregate(
    bucket:  &str,
    records: &[ObjectRecord],
) -> Result<Report, ReportError> {
    debug!("aggregate: {} records for '{}'", records.len(), bucket);

    // Size of the files directly inside each directory.
    let mut direct: IndexMap<&str, u64> = IndexMap::new();

    for record in records {
        validate(bucket, record)?;

        if record.is_directory_marker() {
            continue;
        }

        let parent = parent_directory(&record.object_key);

        // A registered directory always has its ancestors registered too, so
        // we can stop at the first one we already know.
        for directory in lineage(parent) {
            if direct.contains_key(directory) {
                break;
            }

            direct.insert(directory, 0);
        }

        let total = direct.entry(parent).or_insert(0);
        *total = checked_add(bucket, &record.object_key, *total, record.size)?;
    }

    let mut totals: IndexMap<&str, u64> = direct
        .keys()
        .map(|directory| (*directory, 0))
        .collect();

    for (directory, size) in &direct {
        for ancestor in lineage(directory) {
            if let Some(total) = totals.get_mut(ancestor) {
                *total = checked_add(bucket, directory, *total, *size)?;
            }
        }
    }

    debug!("aggregate: {} directories for '{}'", totals.len(), bucket);

    let report = totals
        .into_iter()
        .map(|(directory, size)| {
            DirectoryTotal {
                bucket_name: bucket.into(),
                directory:   directory.into(),
                size:        size,
            }
        })
        .collect();

    Ok(report)
}
