// ObjectRecord and ObjectType
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::ReportError;

/// Delimiter used to infer directories from object keys.
pub const DELIMITER: char = '/';

/// The type of an object, inferred from its key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ObjectType {
    /// A regular object carrying data.
    File,

    /// A zero-content object whose key ends with the delimiter, used by
    /// consoles and tools to mark an empty "folder".
    DirectoryMarker,
}

impl ObjectType {
    /// Infer the `ObjectType` of the given `key`.
    pub fn from_key(key: &str) -> Self {
        if key.ends_with(DELIMITER) {
            Self::DirectoryMarker
        }
        else {
            Self::File
        }
    }
}

/// A single object discovered while listing a bucket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObjectRecord {
    /// Bucket that the object was listed from.
    pub bucket_name: String,

    /// The object key, never empty.
    pub object_key: String,

    /// Size of the object in bytes.
    pub size: u64,

    /// Whether the object is a file or a directory marker.
    pub object_type: ObjectType,
}

/// Convenience type for a complete listing of a bucket.
pub type ObjectRecords = Vec<ObjectRecord>;

impl ObjectRecord {
    /// Returns a new `ObjectRecord`, validating the raw listing values.
    ///
    /// Listing APIs report sizes as signed integers, a negative size or an
    /// empty key is rejected instead of being coerced.
    pub fn new(
        bucket_name: &str,
        object_key:  &str,
        size:        i64,
    ) -> Result<Self, ReportError> {
        if object_key.is_empty() {
            return Err(ReportError::invalid_record(
                bucket_name,
                object_key,
                "object key is empty",
            ));
        }

        let size = u64::try_from(size).map_err(|_| {
            ReportError::invalid_record(
                bucket_name,
                object_key,
                format!("negative size {}", size),
            )
        })?;

        Ok(Self {
            bucket_name: bucket_name.into(),
            object_key:  object_key.into(),
            size:        size,
            object_type: ObjectType::from_key(object_key),
        })
    }

    /// Returns `true` if this record is a directory marker.
    pub fn is_directory_marker(&self) -> bool {
        self.object_type == ObjectType::DirectoryMarker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_type_from_key() {
        let tests = vec![
            ("a.txt",     ObjectType::File),
            ("a/b/c.txt", ObjectType::File),
            ("a/",        ObjectType::DirectoryMarker),
            ("/",         ObjectType::DirectoryMarker),
            ("a/b/",      ObjectType::DirectoryMarker),
        ];

        for test in tests {
            let key      = test.0;
            let expected = test.1;

            assert_eq!(ObjectType::from_key(key), expected);
        }
    }

    #[test]
    fn test_new_ok() {
        let record = ObjectRecord::new("bucket", "logs/app.log", 42).unwrap();

        let expected = ObjectRecord {
            bucket_name: "bucket".into(),
            object_key:  "logs/app.log".into(),
            size:        42,
            object_type: ObjectType::File,
        };

        assert_eq!(record, expected);
        assert!(!record.is_directory_marker());
    }

    #[test]
    fn test_new_directory_marker() {
        let record = ObjectRecord::new("bucket", "logs/", 0).unwrap();

        assert!(record.is_directory_marker());
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        let tests = vec![
            ("",      1),
            ("a.txt", -1),
        ];

        for test in tests {
            let key  = test.0;
            let size = test.1;

            let ret = ObjectRecord::new("bucket", key, size);

            assert!(matches!(ret, Err(ReportError::InvalidRecord { .. })));
        }
    }
}
