use clap::Parser;
use perfreport::cli::{output, Cli};
use perfreport::ReportError;
use perfreport_core::LOG_ENV;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Logging goes to stderr so stdout only carries the report.
    // PERFREPORT_LOG takes precedence over -v.
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = perfreport::cli::run(cli) {
        if let Some(report_err) = e.downcast_ref::<ReportError>() {
            tracing::debug!(kind = ?report_err.kind(), "Report failed");
        }
        output::error(&e.to_string());
        process::exit(1);
    }
}
