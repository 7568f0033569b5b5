//! RQ3: contributor experience levels.
//!
//! Produces two tables: a level summary (count and share per level) and one
//! detail row per contributor with the metrics the level was derived from.

use serde::Serialize;
use serde_json::Number;

use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::models::{ContributorRecord, ExperienceRecord};
use crate::parser::read_record;
use crate::writer::{round2, write_csv, CsvRow, WrittenReport};

/// Input record file name.
pub const INPUT_FILE: &str = "Q3_experience_levels.json";

/// Level summary CSV file name.
pub const SUMMARY_FILE: &str = "RQ3_experience_levels_summary.csv";

/// Per-contributor CSV file name.
pub const CONTRIBUTORS_FILE: &str = "RQ3_contributors_experience.csv";

/// Separator used when flattening a contributor's roles.
pub const ROLE_SEPARATOR: &str = ",";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummaryRow {
    pub experience_level: String,
    pub contributors_count: u64,
    pub contributors_percentage: f64,
}

impl CsvRow for LevelSummaryRow {
    const COLUMNS: &'static [&'static str] =
        &["experience_level", "contributors_count", "contributors_percentage"];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributorRow {
    pub login: Option<String>,
    pub experience_level: Option<String>,
    pub experience_score: Option<Number>,
    pub span_months: Option<Number>,
    pub active_months: Option<Number>,
    pub total_prs_created: Option<Number>,
    pub total_prs_reviewed: Option<Number>,
    pub total_issues_created: Option<Number>,
    pub total_volume: Option<Number>,
    pub roles: String,
    pub diversity_score: Option<Number>,
    pub span_normalized: Option<Number>,
    pub regularity: Option<Number>,
    pub volume_normalized: Option<Number>,
}

impl CsvRow for ContributorRow {
    const COLUMNS: &'static [&'static str] = &[
        "login",
        "experience_level",
        "experience_score",
        "span_months",
        "active_months",
        "total_prs_created",
        "total_prs_reviewed",
        "total_issues_created",
        "total_volume",
        "roles",
        "diversity_score",
        "span_normalized",
        "regularity",
        "volume_normalized",
    ];
}

impl From<&ContributorRecord> for ContributorRow {
    fn from(c: &ContributorRecord) -> Self {
        Self {
            login: c.login.clone(),
            experience_level: c.experience_level.clone(),
            experience_score: c.experience_score.clone(),
            span_months: c.span_months.clone(),
            active_months: c.active_months.clone(),
            total_prs_created: c.total_prs_created.clone(),
            total_prs_reviewed: c.total_prs_reviewed.clone(),
            total_issues_created: c.total_issues_created.clone(),
            total_volume: c.total_volume.clone(),
            roles: c.roles.join(ROLE_SEPARATOR),
            diversity_score: c.diversity_score.clone(),
            span_normalized: c.span_normalized.clone(),
            regularity: c.regularity.clone(),
            volume_normalized: c.volume_normalized.clone(),
        }
    }
}

/// Level summary ordered by contributor count, largest first.
///
/// Levels without a recorded percentage get 0.0.
pub fn build_summary_rows(record: &ExperienceRecord) -> Vec<LevelSummaryRow> {
    let mut rows: Vec<LevelSummaryRow> = record
        .experience_levels
        .iter()
        .map(|(level, &count)| LevelSummaryRow {
            experience_level: level.clone(),
            contributors_count: count,
            contributors_percentage: round2(
                record
                    .experience_levels_percentage
                    .get(level)
                    .copied()
                    .unwrap_or_default(),
            ),
        })
        .collect();

    rows.sort_by(|a, b| b.contributors_count.cmp(&a.contributors_count));
    rows
}

/// One row per contributor, in input order.
pub fn build_contributor_rows(record: &ExperienceRecord) -> Vec<ContributorRow> {
    record.contributors.iter().map(ContributorRow::from).collect()
}

/// Read the RQ3 record and write both CSVs.
pub fn transform(config: &ReportConfig) -> ReportResult<Vec<WrittenReport>> {
    let record: ExperienceRecord = read_record(config.input_path(INPUT_FILE))?;

    let summary = write_csv(&config.output_path(SUMMARY_FILE), &build_summary_rows(&record))?;
    let contributors = write_csv(
        &config.output_path(CONTRIBUTORS_FILE),
        &build_contributor_rows(&record),
    )?;

    Ok(vec![summary, contributors])
}
