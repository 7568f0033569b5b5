//! Tabular output for Tableau.
//!
//! Every output is a UTF-8, comma-separated file with the header row first
//! (also when there are no data rows) and `\r\n`-terminated records. Each row
//! type declares its exact column list through [`CsvRow`]; values are written
//! through serde in field order, so a row struct's fields must follow its
//! `COLUMNS`.

use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, OutputResult};

/// A flat output row with a fixed, exhaustive column list.
pub trait CsvRow: Serialize {
    /// Header names, in field order.
    const COLUMNS: &'static [&'static str];
}

/// A CSV file produced by a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    /// Path of the written file
    pub path: PathBuf,
    /// Number of data rows (header excluded)
    pub rows: usize,
}

/// Create the output directory (and parents) if it does not exist.
///
/// Existing files in the directory are left alone.
pub fn ensure_output_dir(dir: &Path) -> OutputResult<()> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Percentage of `count` over `total`, rounded to 2 decimals.
///
/// A zero total yields 0.0.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64 * 100.0)
}

/// Round to 2 decimal places.
///
/// Rounds the exact binary value, ties to even, so 2.675 (stored just below
/// the tie) gives 2.67 and 3.125 gives 3.12.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Write header and rows to any writer.
pub fn write_rows<W: Write, R: CsvRow>(out: W, rows: &[R]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    writer.write_record(R::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render rows as CSV text.
pub fn render_csv<R: CsvRow>(rows: &[R]) -> csv::Result<String> {
    let mut buf = Vec::new();
    write_rows(&mut buf, rows)?;
    // Serialized fields come from `String`s and numbers, so the buffer is UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Create (or overwrite) a CSV file with the given rows.
pub fn write_csv<R: CsvRow>(path: &Path, rows: &[R]) -> OutputResult<WrittenReport> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    write_rows(file, rows).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(WrittenReport {
        path: path.to_path_buf(),
        rows: rows.len(),
    })
}
