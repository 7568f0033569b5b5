//! Error types for the report export pipeline.
//!
//! - [`InputError`] - Reading and decoding research-question records
//! - [`OutputError`] - Creating the output directory and writing CSV files
//! - [`ReportError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Input Errors
// =============================================================================

/// Errors while loading an input record.
#[derive(Debug, Error)]
pub enum InputError {
    /// The record file does not exist.
    #[error("Input file not found: {}", .path.display())]
    Missing { path: PathBuf },

    /// The record file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record file is not valid JSON or does not match the record shape.
    #[error("Malformed record in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing CSV outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV file could not be created.
    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rows could not be serialized or written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// =============================================================================
// Report Errors (top-level)
// =============================================================================

/// Top-level error returned by the transforms and the pipeline.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Input loading error.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Output writing error.
    #[error(transparent)]
    Output(#[from] OutputError),

    /// A research question name that does not exist.
    #[error("Unknown research question: {0} (expected rq1..rq5)")]
    UnknownQuestion(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for transforms and the pipeline.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let input_err = InputError::Missing {
            path: PathBuf::from("data/seventh-step/Q1.json"),
        };
        let report_err: ReportError = input_err.into();
        assert!(report_err.to_string().contains("Q1.json"));
        assert!(report_err.to_string().contains("not found"));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let output_err = OutputError::CreateDir {
            path: PathBuf::from("data/tableau"),
            source: io,
        };
        let report_err: ReportError = output_err.into();
        assert!(report_err.to_string().contains("data/tableau"));
        assert!(report_err.to_string().contains("denied"));
    }

    #[test]
    fn test_malformed_error_keeps_parser_message() {
        let source = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err = InputError::Malformed {
            path: PathBuf::from("Q4.json"),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("Q4.json"));
        assert!(msg.contains("line 1"));
    }

    #[test]
    fn test_unknown_question_format() {
        let err = ReportError::UnknownQuestion("rq9".into());
        assert_eq!(
            err.to_string(),
            "Unknown research question: rq9 (expected rq1..rq5)"
        );
    }
}
