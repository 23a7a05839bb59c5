//! Offline CLI driver: reads a JSON `Instance` from a file or stdin, runs
//! the pipeline, and writes the JSON solution report to stdout.
//!
//! This is pure ambient tooling (§10.3) — it has no effect on solve
//! semantics; the flags it reads are process/CLI configuration, not
//! instance data.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use timetable_core::error::ErrorPayload;
use timetable_core::solver::SolverConfig;
use timetable_core::types::Instance;
use timetable_core::solve_instance;

#[derive(Parser)]
#[command(name = "timetable-solve")]
#[command(about = "Solve a school-timetable instance and print the JSON report", long_about = None)]
struct Cli {
    /// Input JSON instance file (omit to read from stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Override the number of parallel search workers (default: 3)
    #[arg(long)]
    num_search_workers: Option<i32>,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read instance from stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let json = read_input(cli.input.as_ref())?;
    let instance: Instance = serde_json::from_str(&json).context("failed to parse instance JSON")?;

    let mut solver_config = SolverConfig::from_settings(&instance.settings);
    if let Some(workers) = cli.num_search_workers {
        solver_config.num_search_workers = workers;
    }

    let report = match solve_instance(&instance, &solver_config) {
        Ok(report) => serde_json::to_value(&report)?,
        Err(err) => {
            log::warn!("pipeline returned an error: {err}");
            let payload = ErrorPayload::from(&err);
            serde_json::to_value(&payload)?
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, &rendered).with_context(|| format!("failed to write {path:?}"))?;
            log::info!("report written to {path:?}");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
