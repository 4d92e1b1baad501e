// Splitting reports into chunks for storage
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    ChunkPolicy,
    DirectoryTotal,
    ReportError,
};
use tracing::debug;

/// A serialized piece of a report, written to storage in a single request.
#[derive(Debug, Eq, PartialEq)]
pub struct Chunk {
    /// Position of this chunk in production order, starting at 0.
    pub index: usize,

    /// Serialized JSON bytes.
    pub body: Vec<u8>,

    /// Number of whole directory totals in `body`.
    ///
    /// Only known when chunking by count, byte chunks may split an entry.
    pub entries: Option<usize>,
}

/// Split `report` into chunks according to `policy`.
///
/// Count chunks are each a complete JSON array. Byte chunks are consecutive
/// slices of the serialized report and are only valid JSON once
/// concatenated. An empty report always produces no chunks.
pub fn chunk(
    bucket: &str,
    report: &[DirectoryTotal],
    policy: ChunkPolicy,
) -> Result<Vec<Chunk>, ReportError> {
    debug!("chunk: {} entries for '{}' with {:?}", report.len(), bucket, policy);

    if report.is_empty() {
        return Ok(Vec::new());
    }

    let serialize = |entries: &[DirectoryTotal]| {
        serde_json::to_vec(entries).map_err(|source| {
            ReportError::Serialize {
                bucket: bucket.into(),
                source: source,
            }
        })
    };

    let chunks = match policy {
        ChunkPolicy::Count(max_entries) => {
            report
                .chunks(max_entries.get())
                .enumerate()
                .map(|(index, entries)| -> Result<Chunk, ReportError> {
                    Ok(Chunk {
                        index:   index,
                        body:    serialize(entries)?,
                        entries: Some(entries.len()),
                    })
                })
                .collect::<Result<Vec<Chunk>, _>>()?
        },
        ChunkPolicy::Bytes(max_bytes) => {
            serialize(report)?
                .chunks(max_bytes.get())
                .enumerate()
                .map(|(index, body)| {
                    Chunk {
                        index:   index,
                        body:    body.to_vec(),
                        entries: None,
                    }
                })
                .collect()
        },
    };

    debug!("chunk: {} chunks for '{}'", chunks.len(), bucket);

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::num::NonZeroUsize;

    fn report(entries: usize) -> Vec<DirectoryTotal> {
        (0..entries)
            .map(|i| {
                DirectoryTotal {
                    bucket_name: "test-bucket".into(),
                    directory:   format!("dir-{}", i),
                    size:        i as u64 * 100,
                }
            })
            .collect()
    }

    fn count(n: usize) -> ChunkPolicy {
        ChunkPolicy::Count(NonZeroUsize::new(n).unwrap())
    }

    fn bytes(n: usize) -> ChunkPolicy {
        ChunkPolicy::Bytes(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn test_chunk_by_count() {
        let report = report(5);
        let chunks = chunk("test-bucket", &report, count(2)).unwrap();

        let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
        let sizes: Vec<Option<usize>> = chunks.iter().map(|c| c.entries).collect();

        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(sizes, vec![Some(2), Some(2), Some(1)]);

        // Reading every chunk back, in index order, gives the whole report.
        let mut entries = Vec::new();
        for chunk in &chunks {
            let mut parsed: Vec<DirectoryTotal> = serde_json::from_slice(&chunk.body)
                .unwrap();

            entries.append(&mut parsed);
        }

        assert_eq!(entries, report);
    }

    #[test]
    fn test_chunk_by_count_body() {
        let report = report(1);
        let chunks = chunk("test-bucket", &report, count(10)).unwrap();

        let expected = r#"[{"bucketName":"test-bucket","directory":"dir-0","size":0}]"#;

        assert_eq!(chunks.len(), 1);
        assert_eq!(String::from_utf8_lossy(&chunks[0].body), expected);
    }

    #[test]
    fn test_chunk_by_bytes() {
        let report     = report(7);
        let serialized = serde_json::to_vec(&report).unwrap();
        let max_bytes  = 64;

        let chunks = chunk("test-bucket", &report, bytes(max_bytes)).unwrap();

        assert_eq!(chunks.len(), serialized.len().div_ceil(max_bytes));

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert_eq!(chunk.entries, None);
            assert!(chunk.body.len() <= max_bytes);
        }

        let joined: Vec<u8> = chunks
            .iter()
            .flat_map(|c| c.body.iter().copied())
            .collect();

        assert_eq!(joined, serialized);
    }

    #[test]
    fn test_chunk_by_bytes_larger_than_report() {
        let report = report(3);
        let chunks = chunk("test-bucket", &report, bytes(5 * 1024 * 1024)).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].body, serde_json::to_vec(&report).unwrap());
    }

    #[test]
    fn test_chunk_empty_report() {
        for policy in [count(2), bytes(1024)] {
            let chunks = chunk("test-bucket", &[], policy).unwrap();

            assert!(chunks.is_empty());
        }
    }
}
