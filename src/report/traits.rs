use crate::core::record::Record;
use perfreport_core::ReportResult;
use rust_decimal::Decimal;
use serde::Serialize;

/// One aggregated output line: a position and its rounded average score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub position: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub performance: Decimal,
}

impl ReportRow {
    pub fn new(position: impl Into<String>, performance: Decimal) -> Self {
        Self {
            position: position.into(),
            performance,
        }
    }
}

/// Common interface for report variants.
///
/// An engine consumes the full record sequence and returns rows in their
/// final order; callers must not reorder them.
pub trait ReportEngine: Send + Sync {
    /// Name the report is requested by
    fn name(&self) -> &'static str;

    /// Aggregate records into report rows
    fn generate(&self, records: &[Record]) -> ReportResult<Vec<ReportRow>>;
}
