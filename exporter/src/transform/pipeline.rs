//! Orchestration of the five research-question exports.
//!
//! The transforms run one after another in RQ order. The first failure
//! stops the run; files written before it are kept.
//!
//! # Example
//!
//! ```rust,ignore
//! use contrib_tableau::{run_all, ReportConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let written = run_all(&ReportConfig::new("."))?;
//!     println!("Wrote {} files", written.len());
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use super::{affiliation, approval, experience, frequency, geography};
use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::logs::{log_info, log_success, log_success_indent, log_warning};
use crate::writer::{ensure_output_dir, WrittenReport};

/// One research question and its export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResearchQuestion {
    Rq1,
    Rq2,
    Rq3,
    Rq4,
    Rq5,
}

impl ResearchQuestion {
    /// All questions in run order.
    pub const ALL: [ResearchQuestion; 5] = [
        ResearchQuestion::Rq1,
        ResearchQuestion::Rq2,
        ResearchQuestion::Rq3,
        ResearchQuestion::Rq4,
        ResearchQuestion::Rq5,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Rq1 => "Geographical distribution",
            Self::Rq2 => "Professional affiliation",
            Self::Rq3 => "Experience levels",
            Self::Rq4 => "PR approval by experience",
            Self::Rq5 => "Contribution frequency by experience",
        }
    }

    /// Input record file name.
    pub fn input_file(&self) -> &'static str {
        match self {
            Self::Rq1 => geography::INPUT_FILE,
            Self::Rq2 => affiliation::INPUT_FILE,
            Self::Rq3 => experience::INPUT_FILE,
            Self::Rq4 => approval::INPUT_FILE,
            Self::Rq5 => frequency::INPUT_FILE,
        }
    }

    /// Output CSV file names.
    pub fn output_files(&self) -> &'static [&'static str] {
        match self {
            Self::Rq1 => &[geography::OUTPUT_FILE],
            Self::Rq2 => &[affiliation::OUTPUT_FILE],
            Self::Rq3 => &[experience::SUMMARY_FILE, experience::CONTRIBUTORS_FILE],
            Self::Rq4 => &[approval::OUTPUT_FILE],
            Self::Rq5 => &[frequency::OUTPUT_FILE],
        }
    }

    /// Run this question's transform.
    pub fn transform(&self, config: &ReportConfig) -> ReportResult<Vec<WrittenReport>> {
        match self {
            Self::Rq1 => geography::transform(config),
            Self::Rq2 => affiliation::transform(config),
            Self::Rq3 => experience::transform(config),
            Self::Rq4 => approval::transform(config),
            Self::Rq5 => frequency::transform(config),
        }
    }
}

impl fmt::Display for ResearchQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self {
            Self::Rq1 => 1,
            Self::Rq2 => 2,
            Self::Rq3 => 3,
            Self::Rq4 => 4,
            Self::Rq5 => 5,
        };
        write!(f, "RQ{}", n)
    }
}

impl FromStr for ResearchQuestion {
    type Err = ReportError;

    /// Accepts `rq1`, `RQ1`, `q1` or `1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let digits = normalized
            .strip_prefix("rq")
            .or_else(|| normalized.strip_prefix('q'))
            .unwrap_or(normalized.as_str());

        match digits {
            "1" => Ok(Self::Rq1),
            "2" => Ok(Self::Rq2),
            "3" => Ok(Self::Rq3),
            "4" => Ok(Self::Rq4),
            "5" => Ok(Self::Rq5),
            _ => Err(ReportError::UnknownQuestion(s.to_string())),
        }
    }
}

/// Run every export in RQ order.
pub fn run_all(config: &ReportConfig) -> ReportResult<Vec<WrittenReport>> {
    run_selected(config, &ResearchQuestion::ALL)
}

/// Run a subset of the exports, still in RQ order, each at most once.
pub fn run_selected(
    config: &ReportConfig,
    questions: &[ResearchQuestion],
) -> ReportResult<Vec<WrittenReport>> {
    let mut selected = questions.to_vec();
    selected.sort();
    selected.dedup();

    if selected.is_empty() {
        log_warning("No research questions selected");
        return Ok(Vec::new());
    }

    ensure_output_dir(&config.output_dir)?;

    let mut written = Vec::new();
    for question in selected {
        log_info(format!("{}: {}", question, question.title()));
        for report in question.transform(config)? {
            log_success(format!("Generated {}", report.path.display()));
            log_success_indent(format!("{} rows", report.rows), 1);
            written.push(report);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use std::fs;
    use std::path::Path;

    fn write_inputs(config: &ReportConfig) {
        fs::create_dir_all(&config.input_dir).unwrap();
        let inputs = [
            (
                geography::INPUT_FILE,
                r#"{"total_contributors": 4, "countries": {"USA": 2, "Brazil": 1, "Unknown": 1}}"#,
            ),
            (
                affiliation::INPUT_FILE,
                r#"{"total_contributors": 4, "companies": {"Independent": 2, "Acme": 2}}"#,
            ),
            (
                experience::INPUT_FILE,
                r#"{"experience_levels": {"Initial": 1}, "experience_levels_percentage": {"Initial": 100.0},
                    "contributors": [{"login": "ana", "experience_level": "Initial", "roles": ["author"]}]}"#,
            ),
            (
                approval::INPUT_FILE,
                r#"{"Advanced": {"total_prs": 3}, "Initial": {"total_prs": 10, "approved_prs": 7}}"#,
            ),
            (
                frequency::INPUT_FILE,
                r#"{"Initial": {"contributors_count": 1, "total_prs_stats": {"sum": 1, "mean": 1.0, "median": 1.0}}}"#,
            ),
        ];
        for (name, content) in inputs {
            fs::write(config.input_path(name), content).unwrap();
        }
    }

    fn read_outputs(dir: &Path) -> Vec<(String, String)> {
        let mut outputs: Vec<(String, String)> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| {
                let path = entry.unwrap().path();
                let name = path.file_name().unwrap().to_string_lossy().into_owned();
                (name, fs::read_to_string(&path).unwrap())
            })
            .collect();
        outputs.sort();
        outputs
    }

    #[test]
    fn test_parse_question() {
        assert_eq!("rq1".parse::<ResearchQuestion>().unwrap(), ResearchQuestion::Rq1);
        assert_eq!("RQ3".parse::<ResearchQuestion>().unwrap(), ResearchQuestion::Rq3);
        assert_eq!("q4".parse::<ResearchQuestion>().unwrap(), ResearchQuestion::Rq4);
        assert_eq!(" 5 ".parse::<ResearchQuestion>().unwrap(), ResearchQuestion::Rq5);
        assert!("rq6".parse::<ResearchQuestion>().is_err());
        assert!("geo".parse::<ResearchQuestion>().is_err());
    }

    #[test]
    fn test_question_files() {
        let outputs: usize = ResearchQuestion::ALL
            .iter()
            .map(|q| q.output_files().len())
            .sum();
        assert_eq!(outputs, 6);
        assert_eq!(ResearchQuestion::Rq3.to_string(), "RQ3");
        assert_eq!(
            ResearchQuestion::Rq5.input_file(),
            "Q5_contribution_frequency_by_experience.json"
        );
    }

    #[test]
    fn test_run_all_writes_six_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path());
        write_inputs(&config);

        let written = run_all(&config).unwrap();
        let expected: Vec<_> = ResearchQuestion::ALL
            .iter()
            .flat_map(|q| q.output_files().iter().map(|f| config.output_path(f)))
            .collect();
        let paths: Vec<_> = written.iter().map(|w| w.path.clone()).collect();
        assert_eq!(paths, expected);
        assert!(paths.iter().all(|p| p.exists()));

        let rq4 = fs::read_to_string(config.output_path(approval::OUTPUT_FILE)).unwrap();
        let levels: Vec<&str> = rq4
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(levels, vec!["Initial", "Advanced"]);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path());
        write_inputs(&config);

        run_all(&config).unwrap();
        let first = read_outputs(&config.output_dir);
        run_all(&config).unwrap();
        let second = read_outputs(&config.output_dir);

        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_input_halts_later_transforms() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path());
        write_inputs(&config);
        fs::remove_file(config.input_path(affiliation::INPUT_FILE)).unwrap();

        let err = run_all(&config).unwrap_err();
        assert!(matches!(err, ReportError::Input(InputError::Missing { .. })));

        // RQ1 output stays, nothing after RQ2 was produced
        assert!(config.output_path(geography::OUTPUT_FILE).exists());
        assert!(!config.output_path(experience::SUMMARY_FILE).exists());
        assert!(!config.output_path(frequency::OUTPUT_FILE).exists());
    }

    #[test]
    fn test_malformed_input_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path());
        write_inputs(&config);
        fs::write(config.input_path(geography::INPUT_FILE), "not json").unwrap();

        let err = run_all(&config).unwrap_err();
        assert!(matches!(err, ReportError::Input(InputError::Malformed { .. })));
    }

    #[test]
    fn test_output_dir_created_and_unrelated_files_kept() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path());
        write_inputs(&config);
        fs::create_dir_all(&config.output_dir).unwrap();
        fs::write(config.output_dir.join("dashboard.twb"), "workbook").unwrap();

        run_all(&config).unwrap();
        assert_eq!(
            fs::read_to_string(config.output_dir.join("dashboard.twb")).unwrap(),
            "workbook"
        );
    }

    #[test]
    fn test_run_selected_dedups_and_orders() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path());
        write_inputs(&config);

        let written = run_selected(
            &config,
            &[ResearchQuestion::Rq4, ResearchQuestion::Rq1, ResearchQuestion::Rq4],
        )
        .unwrap();
        let paths: Vec<_> = written.iter().map(|w| w.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                config.output_path(geography::OUTPUT_FILE),
                config.output_path(approval::OUTPUT_FILE),
            ]
        );
    }

    #[test]
    fn test_run_selected_empty_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path());
        assert!(run_selected(&config, &[]).unwrap().is_empty());
        assert!(!config.output_dir.exists());
    }
}
