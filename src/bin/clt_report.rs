//! Print CLT confidence intervals for columns of CSV files
//!
//! Either pass a JSON report configuration with `--config`, or point
//! `--survey` and/or `--quakes` at the lecture datasets. Set `RUST_LOG` to
//! see loading and caveat diagnostics.

use anyhow::{bail, Result};
use clap::Parser;
use clt_stats::{Report, ReportConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "clt-report", version, about = "CLT-based confidence intervals for CSV columns")]
struct Cli {
    /// JSON file listing the analyses to run
    #[arg(short, long, conflicts_with_all = ["survey", "quakes"])]
    config: Option<PathBuf>,

    /// Survey CSV with `hrsrelax` and `getahead` columns
    #[arg(long)]
    survey: Option<PathBuf>,

    /// Seismic events CSV with a `depth` column
    #[arg(long)]
    quakes: Option<PathBuf>,

    /// Emit results as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::lecture(cli.survey, cli.quakes),
    };
    if config.analyses.is_empty() {
        bail!("nothing to analyse: pass --config, --survey or --quakes");
    }

    let outcomes = Report::new().run(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            println!("{outcome}");
        }
    }

    Ok(())
}
