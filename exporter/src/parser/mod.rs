//! Loading research-question records from disk.
//!
//! Each input is one JSON document, read whole and decoded into its typed
//! record. A missing file and a malformed file are distinct errors.

use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{InputError, InputResult};

/// Read and decode one record file.
///
/// # Example
/// ```ignore
/// use contrib_tableau::{read_record, GeographyRecord};
///
/// let record: GeographyRecord = read_record("data/seventh-step/Q1_geographical_distribution.json")?;
/// println!("{} countries", record.countries.len());
/// ```
pub fn read_record<T, P>(path: P) -> InputResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InputError::Missing {
            path: path.to_path_buf(),
        },
        _ => InputError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    parse_record(&content).map_err(|source| InputError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode a record from JSON text.
pub fn parse_record<T: DeserializeOwned>(content: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeographyRecord;
    use std::fs;

    #[test]
    fn test_read_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Q1.json");
        fs::write(&path, r#"{"total_contributors": 2, "countries": {"USA": 2}}"#).unwrap();

        let record: GeographyRecord = read_record(&path).unwrap();
        assert_eq!(record.total_contributors, 2);
        assert_eq!(record.countries["USA"], 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = read_record::<GeographyRecord, _>(&path).unwrap_err();
        assert!(matches!(err, InputError::Missing { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"countries\": [").unwrap();

        let err = read_record::<GeographyRecord, _>(&path).unwrap_err();
        assert!(matches!(err, InputError::Malformed { .. }));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        // Counts must be integers
        let result = parse_record::<GeographyRecord>(r#"{"countries": {"USA": "two"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_object_defaults() {
        let record: GeographyRecord = parse_record("{}").unwrap();
        assert_eq!(record.total_contributors, 0);
        assert!(record.countries.is_empty());
    }
}
