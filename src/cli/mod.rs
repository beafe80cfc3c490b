pub mod output;

use crate::core::ReportProcessor;
use crate::report::render;
use clap::Parser;
use perfreport_core::{load_effective_config, OutputFormat};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "perfreport",
    version,
    about = "Generate performance reports from employee CSV files",
    long_about = "Perfreport reads employee records from one or more CSV files, groups them by \
                  position and prints the average performance score of every position, \
                  highest first."
)]
pub struct Cli {
    /// CSV files with employee records (header row required)
    #[arg(long, value_name = "FILE", num_args = 1.., required_unless_present = "list_reports")]
    pub files: Vec<PathBuf>,

    /// Report to generate (e.g. "performance")
    #[arg(long, value_name = "NAME", required_unless_present = "list_reports")]
    pub report: Option<String>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file (default: $PERFREPORT_CONFIG, then ./perfreport.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List available reports and exit
    #[arg(long)]
    pub list_reports: bool,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let (mut config, source) = load_effective_config(cli.config.as_deref())?;
    match &source {
        Some(path) => info!(path = %path.display(), "Loaded configuration"),
        None => debug!("No config file found, using defaults"),
    }

    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let processor = ReportProcessor::new(&config)?;

    if cli.list_reports {
        output::report_list(processor.available_reports().map(|k| (k.name(), k.description())));
        return Ok(());
    }

    let report_name = cli
        .report
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("--report is required"))?;

    info!(report = report_name, files = cli.files.len(), "Generating report");
    for path in &cli.files {
        debug!(path = %path.display(), "Input file");
    }

    let rows = processor.generate_report(report_name, &cli.files)?;
    info!(rows = rows.len(), "Report generated");

    if rows.is_empty() {
        output::empty();
        return Ok(());
    }

    let rendered = render(
        &rows,
        config.output.format,
        config.output.style,
        config.output.precision,
    )?;
    println!("{}", rendered.trim_end());

    Ok(())
}
