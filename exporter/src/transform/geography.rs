//! RQ1: geographical distribution of contributors.
//!
//! One row per country with its share of all contributors. Contributors
//! whose country could not be resolved ("Unknown") are left out of the rows
//! but still count towards the total.

use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::models::GeographyRecord;
use crate::parser::read_record;
use crate::writer::{percentage, write_csv, CsvRow, WrittenReport};

/// Input record file name.
pub const INPUT_FILE: &str = "Q1_geographical_distribution.json";

/// Output CSV file name.
pub const OUTPUT_FILE: &str = "RQ1_geographical_distribution.csv";

/// Country label excluded from the output.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRow {
    pub country: String,
    pub contributors_count: u64,
    pub contributors_percentage_total: f64,
}

impl CsvRow for CountryRow {
    const COLUMNS: &'static [&'static str] =
        &["country", "contributors_count", "contributors_percentage_total"];
}

/// Build rows ordered by contributor count, largest first.
pub fn build_rows(record: &GeographyRecord) -> Vec<CountryRow> {
    let mut rows: Vec<CountryRow> = record
        .countries
        .iter()
        .filter(|(country, _)| country.as_str() != UNKNOWN_COUNTRY)
        .map(|(country, &count)| CountryRow {
            country: country.clone(),
            contributors_count: count,
            contributors_percentage_total: percentage(count, record.total_contributors),
        })
        .collect();

    rows.sort_by(|a, b| b.contributors_count.cmp(&a.contributors_count));
    rows
}

/// Read the RQ1 record and write its CSV.
pub fn transform(config: &ReportConfig) -> ReportResult<Vec<WrittenReport>> {
    let record: GeographyRecord = read_record(config.input_path(INPUT_FILE))?;
    let rows = build_rows(&record);
    let written = write_csv(&config.output_path(OUTPUT_FILE), &rows)?;
    Ok(vec![written])
}
