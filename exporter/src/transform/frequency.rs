//! RQ5: contribution frequency by experience level.
//!
//! Flattens the nested PR-count and interval statistics into one row per
//! level.

use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::models::{ExperienceLevel, FrequencyRecord, FrequencyStats};
use crate::parser::read_record;
use crate::writer::{write_csv, CsvRow, WrittenReport};

/// Input record file name.
pub const INPUT_FILE: &str = "Q5_contribution_frequency_by_experience.json";

/// Output CSV file name.
pub const OUTPUT_FILE: &str = "RQ5_contribution_frequency_by_experience.csv";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub experience_level: String,
    pub contributors_count: u64,
    pub total_prs_sum: u64,
    pub total_prs_mean: f64,
    pub total_prs_median: f64,
    pub avg_interval_mean_days: f64,
    pub avg_interval_median_days: f64,
    pub contributors_with_intervals: u64,
}

impl CsvRow for FrequencyRow {
    const COLUMNS: &'static [&'static str] = &[
        "experience_level",
        "contributors_count",
        "total_prs_sum",
        "total_prs_mean",
        "total_prs_median",
        "avg_interval_mean_days",
        "avg_interval_median_days",
        "contributors_with_intervals",
    ];
}

impl FrequencyRow {
    fn new(level: &str, stats: &FrequencyStats) -> Self {
        Self {
            experience_level: level.to_string(),
            contributors_count: stats.contributors_count,
            total_prs_sum: stats.total_prs_stats.sum,
            total_prs_mean: stats.total_prs_stats.mean,
            total_prs_median: stats.total_prs_stats.median,
            avg_interval_mean_days: stats.avg_interval_stats.mean_days,
            avg_interval_median_days: stats.avg_interval_stats.median_days,
            contributors_with_intervals: stats.avg_interval_stats.contributors_with_intervals,
        }
    }
}

/// One row per level, Initial, Intermediate, Advanced first.
pub fn build_rows(record: &FrequencyRecord) -> Vec<FrequencyRow> {
    let mut rows: Vec<FrequencyRow> = record
        .iter()
        .map(|(level, stats)| FrequencyRow::new(level, stats))
        .collect();

    rows.sort_by_key(|row| ExperienceLevel::rank(&row.experience_level));
    rows
}

/// Read the RQ5 record and write its CSV.
pub fn transform(config: &ReportConfig) -> ReportResult<Vec<WrittenReport>> {
    let record: FrequencyRecord = read_record(config.input_path(INPUT_FILE))?;
    let rows = build_rows(&record);
    let written = write_csv(&config.output_path(OUTPUT_FILE), &rows)?;
    Ok(vec![written])
}
