//! restcheck cli definition and entrypoint.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::Style;
use restcheck_core::config::{Config, get_config};
use restcheck_core::scenario::Selection;
use restcheck_core::{Fixture, Group, run_scenarios, suite};
use tracing::info;

use crate::log::setup_logging;
use crate::ux::{format_listing, format_result_line, format_summary};

/// restcheck - integration checks for public REST and SOAP APIs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show verbose logs.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default location.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run scenarios against the configured services.
    Run {
        /// Only run scenarios of this group (objects, character, auth, books, soap).
        #[arg(short, long)]
        group: Option<Group>,
        /// Only run scenarios whose name contains this text.
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// List the available scenarios.
    List {
        /// Only list scenarios of this group.
        #[arg(short, long)]
        group: Option<Group>,
    },
}

/// Runs the CLI. Returns `false` when any scenario failed.
pub async fn run() -> Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        let log_path = setup_logging().context("Failed to set up logging")?;
        eprintln!(
            "{}",
            Style::new()
                .dim()
                .apply_to(format!("Logging to {}", log_path.display()))
        );
    }

    match cli.command {
        Commands::Run { group, filter } => {
            let config = get_config(cli.config).context("Failed to load configuration")?;
            execute_run(config, Selection { group, filter }).await
        }
        Commands::List { group } => {
            let scenarios = suite::select(&Selection {
                group,
                filter: None,
            });
            println!("{}", format_listing(&scenarios));
            Ok(true)
        }
    }
}

async fn execute_run(config: Config, selection: Selection) -> Result<bool> {
    let scenarios = suite::select(&selection);
    if scenarios.is_empty() {
        anyhow::bail!("No scenarios match the given group/filter");
    }

    info!(count = scenarios.len(), "Running scenarios");
    let fixture = Fixture::new(config).context("Failed to prepare HTTP client")?;
    let report = run_scenarios(&scenarios, &fixture).await;

    for result in &report.results {
        println!("{}", format_result_line(result));
    }
    println!("\n{}", format_summary(&report));

    Ok(report.is_success())
}
