//! RQ4: pull request approval by experience level.

use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::models::{ApprovalRecord, ExperienceLevel};
use crate::parser::read_record;
use crate::writer::{round2, write_csv, CsvRow, WrittenReport};

/// Input record file name.
pub const INPUT_FILE: &str = "Q4_pr_approval_by_experience.json";

/// Output CSV file name.
pub const OUTPUT_FILE: &str = "RQ4_pr_approval_by_experience.csv";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovalRow {
    pub experience_level: String,
    pub total_prs: u64,
    pub approved_prs: u64,
    pub approval_rate: f64,
    pub approval_percentage: f64,
    pub contributors_count: u64,
}

impl CsvRow for ApprovalRow {
    const COLUMNS: &'static [&'static str] = &[
        "experience_level",
        "total_prs",
        "approved_prs",
        "approval_rate",
        "approval_percentage",
        "contributors_count",
    ];
}

/// One row per level, Initial, Intermediate, Advanced first.
pub fn build_rows(record: &ApprovalRecord) -> Vec<ApprovalRow> {
    let mut rows: Vec<ApprovalRow> = record
        .iter()
        .map(|(level, stats)| ApprovalRow {
            experience_level: level.clone(),
            total_prs: stats.total_prs,
            approved_prs: stats.approved_prs,
            approval_rate: stats.approval_rate,
            approval_percentage: round2(stats.approval_percentage),
            contributors_count: stats.contributors_count,
        })
        .collect();

    rows.sort_by_key(|row| ExperienceLevel::rank(&row.experience_level));
    rows
}

/// Read the RQ4 record and write its CSV.
pub fn transform(config: &ReportConfig) -> ReportResult<Vec<WrittenReport>> {
    let record: ApprovalRecord = read_record(config.input_path(INPUT_FILE))?;
    let rows = build_rows(&record);
    let written = write_csv(&config.output_path(OUTPUT_FILE), &rows)?;
    Ok(vec![written])
}
