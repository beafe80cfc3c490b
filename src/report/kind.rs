use crate::report::performance::PerformanceReport;
use crate::report::traits::ReportEngine;
use perfreport_core::{Config, ReportError};
use std::fmt;

/// Every report the tool can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Performance,
}

impl ReportKind {
    pub const ALL: &'static [ReportKind] = &[ReportKind::Performance];

    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Performance => "performance",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReportKind::Performance => "Average performance score per position, highest first",
        }
    }

    /// Build the engine for this report
    pub fn engine(self, config: &Config) -> Box<dyn ReportEngine> {
        match self {
            ReportKind::Performance => Box::new(PerformanceReport::with_precision(config.output.precision)),
        }
    }

    /// Comma-separated list of registered names, for error messages
    pub fn available() -> String {
        Self::ALL.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
    }
}

impl std::str::FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ReportError::UnknownReport {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
