/// Standard output helpers for the report command
use colored::*;

/// Shown instead of a table when a report has no rows
pub const NO_DATA_MESSAGE: &str = "No data to display";

/// Report a failed run. Goes to stdout together with the report output.
pub fn error(message: &str) {
    println!("{} {}", "Error:".red().bold(), message);
}

/// Display the empty-report notice
pub fn empty() {
    println!("{}", NO_DATA_MESSAGE.dimmed());
}

/// List report names with their descriptions
pub fn report_list<'a>(reports: impl IntoIterator<Item = (&'a str, &'a str)>) {
    println!("{}", "Available reports".bold().cyan());
    for (name, description) in reports {
        println!("  {} {}", name.green(), description.dimmed());
    }
}
