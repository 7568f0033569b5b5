//! Path configuration for an export run.
//!
//! Resolved once at start-up and passed by reference to every transform.
//! Precedence is CLI flag, then environment (a `.env` file is honored),
//! then defaults relative to the base directory:
//!
//! ```text
//! <base>/data/seventh-step/   input records (Q1..Q5 JSON)
//! <base>/data/tableau/        generated CSV files
//! ```

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the base directory.
pub const ENV_BASE_DIR: &str = "CONTRIB_TABLEAU_BASE_DIR";

/// Environment variable overriding the input directory.
pub const ENV_INPUT_DIR: &str = "CONTRIB_TABLEAU_INPUT_DIR";

/// Environment variable overriding the output directory.
pub const ENV_OUTPUT_DIR: &str = "CONTRIB_TABLEAU_OUTPUT_DIR";

/// Data directory under the base directory.
pub const DATA_DIR: &str = "data";

/// Input directory under the data directory.
pub const INPUT_SUBDIR: &str = "seventh-step";

/// Output directory under the data directory.
pub const OUTPUT_SUBDIR: &str = "tableau";

/// Where records are read from and CSV files are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl ReportConfig {
    /// Default layout under a base directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let data_dir = base_dir.as_ref().join(DATA_DIR);
        Self {
            input_dir: data_dir.join(INPUT_SUBDIR),
            output_dir: data_dir.join(OUTPUT_SUBDIR),
        }
    }

    /// Path of an input record file.
    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }

    /// Path of an output CSV file.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Directory overrides given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_dir: Option<PathBuf>,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Resolve against the process environment (after loading `.env`).
    pub fn resolve(self) -> ReportConfig {
        let _ = dotenvy::dotenv();
        self.resolve_with(|key| env::var(key).ok())
    }

    /// Resolve against an arbitrary variable lookup.
    pub fn resolve_with<F>(self, lookup: F) -> ReportConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = self
            .base_dir
            .or_else(|| lookup(ENV_BASE_DIR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        let defaults = ReportConfig::new(&base_dir);

        ReportConfig {
            input_dir: self
                .input_dir
                .or_else(|| lookup(ENV_INPUT_DIR).map(PathBuf::from))
                .unwrap_or(defaults.input_dir),
            output_dir: self
                .output_dir
                .or_else(|| lookup(ENV_OUTPUT_DIR).map(PathBuf::from))
                .unwrap_or(defaults.output_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_layout() {
        let config = ReportConfig::new("/srv/study");
        assert_eq!(config.input_dir, PathBuf::from("/srv/study/data/seventh-step"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/study/data/tableau"));
        assert_eq!(
            config.input_path("Q1_geographical_distribution.json"),
            PathBuf::from("/srv/study/data/seventh-step/Q1_geographical_distribution.json")
        );
    }

    #[test]
    fn test_env_base_dir() {
        let config = ConfigOverrides::default().resolve_with(lookup_from(&[(ENV_BASE_DIR, "/env")]));
        assert_eq!(config, ReportConfig::new("/env"));
    }

    #[test]
    fn test_cli_overrides_env() {
        let overrides = ConfigOverrides {
            base_dir: None,
            input_dir: Some(PathBuf::from("/cli/in")),
            output_dir: None,
        };
        let config = overrides.resolve_with(lookup_from(&[
            (ENV_INPUT_DIR, "/env/in"),
            (ENV_OUTPUT_DIR, "/env/out"),
        ]));
        assert_eq!(config.input_dir, PathBuf::from("/cli/in"));
        assert_eq!(config.output_dir, PathBuf::from("/env/out"));
    }

    #[test]
    fn test_no_overrides_uses_current_dir() {
        let config = ConfigOverrides::default().resolve_with(|_| None);
        assert_eq!(config, ReportConfig::default());
    }
}
