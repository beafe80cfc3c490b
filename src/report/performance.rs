//! Average performance score per position.

use crate::core::record::Record;
use crate::report::traits::{ReportEngine, ReportRow};
use indexmap::IndexMap;
use perfreport_core::{ReportError, ReportResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const POSITION_FIELD: &str = "position";
pub const PERFORMANCE_FIELD: &str = "performance";

/// Default number of fractional digits in averages
pub const DEFAULT_PRECISION: u32 = 2;

/// Groups records by position, averages their scores and sorts the
/// averages from highest to lowest. Ties keep first-seen order.
#[derive(Debug, Clone)]
pub struct PerformanceReport {
    precision: u32,
}

#[derive(Debug, Default)]
struct AggregationBucket {
    sum: Decimal,
    count: u64,
}

impl PerformanceReport {
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    pub fn with_precision(precision: u32) -> Self {
        Self { precision }
    }

    /// Rounded mean of a bucket. Decimal holds at most 28 digits, so a mean
    /// whose integer part leaves no room keeps fewer than `precision`
    /// fractional digits; renderers pad it back out.
    fn average(&self, bucket: &AggregationBucket) -> Decimal {
        let mean = bucket.sum / Decimal::from(bucket.count);
        let mut rounded = mean.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(self.precision);
        rounded
    }
}

impl Default for PerformanceReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEngine for PerformanceReport {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn generate(&self, records: &[Record]) -> ReportResult<Vec<ReportRow>> {
        let mut buckets: IndexMap<&str, AggregationBucket> = IndexMap::new();

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            let position = required_field(record, POSITION_FIELD, row)?;
            if position.trim().is_empty() {
                return Err(ReportError::InvalidValue {
                    field: POSITION_FIELD.to_string(),
                    value: position.to_string(),
                    row,
                });
            }
            let raw = required_field(record, PERFORMANCE_FIELD, row)?;
            let score = parse_score(raw, row)?;

            let bucket = buckets.entry(position).or_default();
            bucket.sum = bucket.sum.checked_add(score).ok_or_else(|| ReportError::SumOverflow {
                field: PERFORMANCE_FIELD.to_string(),
                group: position.to_string(),
                row,
            })?;
            bucket.count += 1;
        }

        let mut rows: Vec<ReportRow> = buckets
            .iter()
            .map(|(position, bucket)| ReportRow::new(*position, self.average(bucket)))
            .collect();

        // sort_by is stable
        rows.sort_by(|a, b| b.performance.cmp(&a.performance));

        Ok(rows)
    }
}

fn required_field<'a>(record: &'a Record, field: &str, row: usize) -> ReportResult<&'a str> {
    record.get(field).ok_or_else(|| ReportError::MissingField {
        field: field.to_string(),
        row,
    })
}

/// Parse a score written in plain or scientific decimal notation.
/// Digits below Decimal's 28th fractional place are rounded away.
fn parse_score(raw: &str, row: usize) -> ReportResult<Decimal> {
    let value = raw.trim();
    if let Ok(score) = Decimal::from_str(value) {
        return Ok(score);
    }

    let (mantissa, exponent) = value
        .split_once(|c: char| c == 'e' || c == 'E')
        .ok_or_else(|| invalid_score(raw, row))?;
    let mantissa = Decimal::from_str(mantissa).map_err(|_| invalid_score(raw, row))?;
    let exponent: i64 = exponent.parse().map_err(|_| invalid_score(raw, row))?;

    scale_by_power_of_ten(mantissa, exponent).ok_or_else(|| ReportError::ValueOutOfRange {
        field: PERFORMANCE_FIELD.to_string(),
        value: raw.to_string(),
        row,
    })
}

/// `value * 10^exponent`, or None when the result does not fit in a Decimal
fn scale_by_power_of_ten(mut value: Decimal, exponent: i64) -> Option<Decimal> {
    if exponent >= 0 {
        for _ in 0..exponent {
            if value.is_zero() {
                break;
            }
            value = value.checked_mul(Decimal::TEN)?;
        }
    } else {
        // past this many divisions every representable mantissa has rounded to zero
        for _ in 0..exponent.unsigned_abs().min(MAX_DIVISIONS) {
            value = value.checked_div(Decimal::TEN)?;
        }
    }
    Some(value)
}

const MAX_DIVISIONS: u64 = 64;

fn invalid_score(raw: &str, row: usize) -> ReportError {
    ReportError::InvalidValue {
        field: PERFORMANCE_FIELD.to_string(),
        value: raw.to_string(),
        row,
    }
}
