//! Input record models for the five research questions.
//!
//! This module contains the typed shape of every upstream analysis file:
//!
//! - [`GeographyRecord`] - RQ1, contributors per country
//! - [`AffiliationRecord`] - RQ2, contributors per company
//! - [`ExperienceRecord`] - RQ3, experience levels and per-contributor metrics
//! - [`ApprovalRecord`] - RQ4, PR approval stats per experience level
//! - [`FrequencyRecord`] - RQ5, contribution frequency per experience level
//! - [`ExperienceLevel`] - Logical ordering of level labels
//!
//! Mappings are [`IndexMap`]s so rows keep the file's encounter order
//! wherever a sort leaves ties. Absent numeric fields, and numeric fields
//! set to `null`, decode as zero.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Decode `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Experience Level
// =============================================================================

/// Experience level assigned to a contributor by the upstream analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Initial,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// All levels in logical order.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Initial,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    /// Parse an exact level label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Initial" => Some(Self::Initial),
            "Intermediate" => Some(Self::Intermediate),
            "Advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Sort key for a label: known levels in logical order, anything else after them.
    pub fn rank(label: &str) -> usize {
        Self::from_label(label)
            .map(|level| level as usize)
            .unwrap_or(Self::ALL.len())
    }
}

// =============================================================================
// RQ1 - Geographical Distribution
// =============================================================================

/// Contributors per country.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeographyRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_contributors: u64,
    #[serde(default)]
    pub countries: IndexMap<String, u64>,
}

// =============================================================================
// RQ2 - Professional Affiliation
// =============================================================================

/// Contributors per company or organization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AffiliationRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_contributors: u64,
    #[serde(default)]
    pub companies: IndexMap<String, u64>,
}

// =============================================================================
// RQ3 - Experience Levels
// =============================================================================

/// Level distribution plus one entry per classified contributor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default)]
    pub experience_levels: IndexMap<String, u64>,
    #[serde(default)]
    pub experience_levels_percentage: IndexMap<String, f64>,
    #[serde(default)]
    pub contributors: Vec<ContributorRecord>,
}

/// Per-contributor experience metrics.
///
/// Numeric metrics stay as JSON numbers so integers and floats are written
/// back exactly as the analysis produced them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributorRecord {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub experience_score: Option<Number>,
    #[serde(default)]
    pub span_months: Option<Number>,
    #[serde(default)]
    pub active_months: Option<Number>,
    #[serde(default)]
    pub total_prs_created: Option<Number>,
    #[serde(default)]
    pub total_prs_reviewed: Option<Number>,
    #[serde(default)]
    pub total_issues_created: Option<Number>,
    #[serde(default)]
    pub total_volume: Option<Number>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
    #[serde(default)]
    pub diversity_score: Option<Number>,
    #[serde(default)]
    pub span_normalized: Option<Number>,
    #[serde(default)]
    pub regularity: Option<Number>,
    #[serde(default)]
    pub volume_normalized: Option<Number>,
}

// =============================================================================
// RQ4 - PR Approval by Experience
// =============================================================================

/// PR approval stats for one experience level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApprovalStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_prs: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub approved_prs: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub approval_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub approval_percentage: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contributors_count: u64,
}

/// Level label to approval stats.
pub type ApprovalRecord = IndexMap<String, ApprovalStats>;

// =============================================================================
// RQ5 - Contribution Frequency by Experience
// =============================================================================

/// Distribution of PRs opened per contributor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TotalPrsStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sum: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mean: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub median: f64,
}

/// Average days between contributions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IntervalStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mean_days: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub median_days: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contributors_with_intervals: u64,
}

/// Contribution frequency stats for one experience level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FrequencyStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub contributors_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_prs_stats: TotalPrsStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_interval_stats: IntervalStats,
}

/// Level label to frequency stats.
pub type FrequencyRecord = IndexMap<String, FrequencyStats>;

// =============================================================================
// Tests
// =============================================================================
