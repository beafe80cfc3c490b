pub mod cli;
pub mod core;
pub mod report;

pub use crate::core::{Record, RecordLoader, ReportProcessor};
pub use crate::report::{PerformanceReport, ReportEngine, ReportKind, ReportRow};
pub use perfreport_core::{Config, ErrorKind, ReportError, ReportResult};
