//! Command-line driver for the coverage report.
//!
//! ```bash
//! # Render every traveler's report into ./outputs
//! coverage-report render --data data --lists lists --output outputs
//!
//! # Check travel logs for routes no system carries
//! coverage-report validate --data data --lists lists
//! ```
//!
//! Logging is controlled through `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use coverage_report::config::ReportConfig;
use coverage_report::coverage::validate_log;
use coverage_report::inventory::load_index;
use coverage_report::report::Report;
use coverage_report::travel_log::load_travel_logs;

/// Route coverage reports from travel logs.
#[derive(Parser)]
#[command(name = "coverage-report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render HTML and JSON reports for every traveler
    Render {
        #[command(flatten)]
        inputs: Inputs,

        /// Directory reports are written into
        #[arg(long, default_value = "outputs")]
        output: PathBuf,
    },

    /// List logged routes that no system carries
    Validate {
        #[command(flatten)]
        inputs: Inputs,
    },
}

/// Input locations shared by every command.
#[derive(Args)]
struct Inputs {
    /// Directory holding systems/, regions/, counties/ and lookup tables
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Directory holding one *.list file per traveler
    #[arg(long, default_value = "lists")]
    lists: PathBuf,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { inputs, output } => {
            render(ReportConfig::new(inputs.data, inputs.lists, output))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { inputs } => {
            let config = ReportConfig {
                data_dir: inputs.data,
                lists_dir: inputs.lists,
                ..ReportConfig::default()
            };
            validate(&config)
        }
    }
}

fn render(config: ReportConfig) -> Result<()> {
    config.validate().context("invalid configuration")?;

    let index = load_index(&config).context("failed to load route inventories")?;
    let logs = load_travel_logs(&config.lists_dir).context("failed to load travel logs")?;

    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    let report =
        Report::build(&index, &logs, &config, &generated).context("failed to render reports")?;
    let written = report
        .write(&config.output_dir)
        .context("failed to write reports")?;

    info!(travelers = logs.len(), documents = written, "done");
    Ok(())
}

fn validate(config: &ReportConfig) -> Result<ExitCode> {
    config.validate().context("invalid configuration")?;

    let index = load_index(config).context("failed to load route inventories")?;
    let logs = load_travel_logs(&config.lists_dir).context("failed to load travel logs")?;

    let mut clean = true;
    for log in &logs {
        let report = validate_log(&index, log);
        println!("{} ({} routes)", report.traveler, report.listed);
        for count in &report.systems {
            println!(
                "  {}: {} ({:.2}%)",
                count.system,
                count.found,
                report.share(count)
            );
        }
        if !report.is_clean() {
            clean = false;
            println!("  missing from every system:");
            for route in &report.missing {
                println!("    {route}");
            }
        }
    }

    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
