//! Transformation module.
//!
//! One submodule per research question, each reading its record and
//! writing its CSV file(s):
//! - Geography (RQ1), Affiliation (RQ2), Experience (RQ3),
//!   Approval (RQ4), Frequency (RQ5)
//! - Pipeline: runs them in order

pub mod affiliation;
pub mod approval;
pub mod experience;
pub mod frequency;
pub mod geography;
pub mod pipeline;

pub use pipeline::*;
