use crate::core::loader::{LoaderOptions, RecordLoader};
use crate::report::{ReportEngine, ReportKind, ReportRow};
use indexmap::IndexMap;
use perfreport_core::{Config, ReportError, ReportResult};
use std::path::Path;

/// Maps report names to engines and runs load → generate.
///
/// The registry is built once in [`ReportProcessor::new`] and never changes
/// afterwards, so one processor can serve any number of requests.
pub struct ReportProcessor {
    loader: RecordLoader,
    reports: IndexMap<ReportKind, Box<dyn ReportEngine>>,
}

impl ReportProcessor {
    /// Build a processor, rejecting configs the loader cannot honor
    pub fn new(config: &Config) -> ReportResult<Self> {
        config.validate()?;
        let loader = RecordLoader::new(LoaderOptions::try_from(config)?);
        Ok(Self::with_loader(config, loader))
    }

    fn with_loader(config: &Config, loader: RecordLoader) -> Self {
        let reports = ReportKind::ALL
            .iter()
            .map(|&kind| (kind, kind.engine(config)))
            .collect();

        Self { loader, reports }
    }

    /// Names of the registered reports, in registration order
    pub fn available_reports(&self) -> impl Iterator<Item = ReportKind> + '_ {
        self.reports.keys().copied()
    }

    /// Look up the engine for a report name
    pub fn engine(&self, report_name: &str) -> ReportResult<&dyn ReportEngine> {
        let kind: ReportKind = report_name.parse()?;
        self.reports
            .get(&kind)
            .map(|engine| engine.as_ref())
            .ok_or_else(|| ReportError::UnknownReport {
                name: report_name.to_string(),
                available: ReportKind::available(),
            })
    }

    /// Generate the named report from the given files.
    ///
    /// The name is checked before any file is opened. Loader and engine
    /// errors are returned as they are.
    pub fn generate_report<P: AsRef<Path>>(
        &self,
        report_name: &str,
        file_paths: &[P],
    ) -> ReportResult<Vec<ReportRow>> {
        let engine = self.engine(report_name)?;
        let records = self.loader.load(file_paths)?;
        engine.generate(&records)
    }
}

impl Default for ReportProcessor {
    fn default() -> Self {
        Self::with_loader(&Config::default(), RecordLoader::default())
    }
}
