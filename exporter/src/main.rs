//! contrib-tableau CLI - Export research-question results to Tableau CSV
//!
//! # Commands
//!
//! ```bash
//! contrib-tableau                      # Run all five exports (same as `run`)
//! contrib-tableau run --only rq1 --only rq4
//! contrib-tableau list                 # Show input and output files per question
//! contrib-tableau --base-dir ../study run
//! ```

use clap::{Parser, Subcommand};
use contrib_tableau::logs::{log_error, LOGGER};
use contrib_tableau::{run_all, run_selected, ConfigOverrides, ReportConfig, ResearchQuestion};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contrib-tableau")]
#[command(about = "Export contributor research results to Tableau-ready CSV files", long_about = None)]
struct Cli {
    /// Base directory holding data/seventh-step and data/tableau
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Directory with the Q1..Q5 JSON records
    #[arg(long, global = true)]
    input_dir: Option<PathBuf>,

    /// Directory for the generated CSV files
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the exports (all of them unless --only is given)
    Run {
        /// Research question to export (rq1..rq5), repeatable
        #[arg(long, value_name = "RQ")]
        only: Vec<String>,
    },

    /// List research questions with their input and output files
    List,
}

fn main() {
    let cli = Cli::parse();
    LOGGER.set_quiet(cli.quiet);

    let config = ConfigOverrides {
        base_dir: cli.base_dir,
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
    }
    .resolve();

    let result = match cli.command.unwrap_or(Commands::Run { only: Vec::new() }) {
        Commands::Run { only } => cmd_run(&config, &only),
        Commands::List => cmd_list(&config),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_run(config: &ReportConfig, only: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let written = if only.is_empty() {
        run_all(config)?
    } else {
        let questions = only
            .iter()
            .map(|s| s.parse::<ResearchQuestion>())
            .collect::<Result<Vec<_>, _>>()?;
        run_selected(config, &questions)?
    };

    if !LOGGER.is_quiet() {
        println!("\nDone: {} file(s) in {}", written.len(), config.output_dir.display());
    }
    Ok(())
}

fn cmd_list(config: &ReportConfig) -> Result<(), Box<dyn std::error::Error>> {
    for question in ResearchQuestion::ALL {
        println!("{} - {}", question, question.title());
        println!("   in:  {}", config.input_path(question.input_file()).display());
        for file in question.output_files() {
            println!("   out: {}", config.output_path(file).display());
        }
    }
    Ok(())
}
