//! # contrib-tableau - Contributor research results to Tableau CSV
//!
//! Converts the JSON results of five research questions about open-source
//! contributors (geography, affiliation, experience, PR approval and
//! contribution frequency) into flat CSV files ready for Tableau.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Qn JSON    │────▶│   Parser    │────▶│  Transform  │────▶│   RQn CSV   │
//! │ (upstream)  │     │  (typed)    │     │ (per RQ)    │     │  (Tableau)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use contrib_tableau::{run_all, ReportConfig};
//!
//! fn main() {
//!     let written = run_all(&ReportConfig::new(".")).unwrap();
//!     println!("Wrote {} files", written.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Input/output directory configuration
//! - [`logs`] - Console progress logging
//! - [`models`] - Typed input records
//! - [`parser`] - JSON record loading
//! - [`writer`] - CSV output and shared numeric helpers
//! - [`transform`] - Per-question transforms and the pipeline

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Input / output
pub mod parser;
pub mod writer;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports - Errors and configuration
// =============================================================================

pub use config::{ConfigOverrides, ReportConfig};
pub use error::{InputError, OutputError, ReportError, ReportResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    AffiliationRecord,
    ApprovalRecord,
    ApprovalStats,
    ContributorRecord,
    ExperienceLevel,
    ExperienceRecord,
    FrequencyRecord,
    FrequencyStats,
    GeographyRecord,
};

// =============================================================================
// Re-exports - Parsing and writing
// =============================================================================

pub use parser::{parse_record, read_record};
pub use writer::{ensure_output_dir, percentage, round2, write_csv, CsvRow, WrittenReport};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{run_all, run_selected, ResearchQuestion};
