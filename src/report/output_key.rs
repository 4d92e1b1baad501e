// Destination keys for report chunks
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::NaiveDate;

/// Date format used in dated report keys, e.g. `05-03-2024`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Name of the directory holding the most recent reports.
const LATEST: &str = "latest";

/// Builds the keys that report chunks are written to for a single run.
///
/// ```text
/// {directory}/{dd-mm-yyyy}/{bucket}_chunk_{index}.json
/// {directory}/latest/{bucket}_chunk_{index}.json
/// ```
#[derive(Debug)]
pub struct OutputKeys {
    directory: String,
    date:      String,
}

impl OutputKeys {
    /// Returns `OutputKeys` writing under `directory` for a run on `date`.
    pub fn new(directory: &str, date: NaiveDate) -> Self {
        Self {
            directory: directory.into(),
            date:      date.format(DATE_FORMAT).to_string(),
        }
    }

    fn key(&self, folder: &str, bucket: &str, index: usize) -> String {
        format!("{}/{}/{}_chunk_{}.json", self.directory, folder, bucket, index)
    }

    /// Key of chunk `index` of `bucket` in the dated archive.
    pub fn dated(&self, bucket: &str, index: usize) -> String {
        self.key(&self.date, bucket, index)
    }

    /// Key of chunk `index` of `bucket` under `latest`.
    pub fn latest(&self, bucket: &str, index: usize) -> String {
        self.key(LATEST, bucket, index)
    }
}
