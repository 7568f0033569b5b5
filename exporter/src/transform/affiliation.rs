//! RQ2: professional affiliation of contributors.
//!
//! One row per company with its share of all contributors and a coarse
//! category separating organizations from independent or unresolved
//! affiliations.

use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::models::AffiliationRecord;
use crate::parser::read_record;
use crate::writer::{percentage, write_csv, CsvRow, WrittenReport};

/// Input record file name.
pub const INPUT_FILE: &str = "Q2_professional_affiliation.json";

/// Output CSV file name.
pub const OUTPUT_FILE: &str = "RQ2_professional_affiliation.csv";

pub const CATEGORY_INDEPENDENT: &str = "Independent/Unknown";
pub const CATEGORY_ORGANIZATION: &str = "Company/Organization";

/// Lower-case markers of a non-organizational affiliation.
const INDEPENDENT_MARKERS: [&str; 2] = ["independent", "unknown"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyRow {
    pub company: String,
    pub contributors_count: u64,
    pub contributors_percentage_total: f64,
    pub affiliation_category: &'static str,
}

impl CsvRow for CompanyRow {
    const COLUMNS: &'static [&'static str] = &[
        "company",
        "contributors_count",
        "contributors_percentage_total",
        "affiliation_category",
    ];
}

/// Affiliation category for a company name (case-insensitive).
pub fn categorize(company: &str) -> &'static str {
    let name = company.to_lowercase();
    if INDEPENDENT_MARKERS.iter().any(|marker| name.contains(marker)) {
        CATEGORY_INDEPENDENT
    } else {
        CATEGORY_ORGANIZATION
    }
}

/// Build rows ordered by contributor count, largest first.
pub fn build_rows(record: &AffiliationRecord) -> Vec<CompanyRow> {
    let mut rows: Vec<CompanyRow> = record
        .companies
        .iter()
        .map(|(company, &count)| CompanyRow {
            company: company.clone(),
            contributors_count: count,
            contributors_percentage_total: percentage(count, record.total_contributors),
            affiliation_category: categorize(company),
        })
        .collect();

    rows.sort_by(|a, b| b.contributors_count.cmp(&a.contributors_count));
    rows
}

/// Read the RQ2 record and write its CSV.
pub fn transform(config: &ReportConfig) -> ReportResult<Vec<WrittenReport>> {
    let record: AffiliationRecord = read_record(config.input_path(INPUT_FILE))?;
    let rows = build_rows(&record);
    let written = write_csv(&config.output_path(OUTPUT_FILE), &rows)?;
    Ok(vec![written])
}
