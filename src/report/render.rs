//! Rendering of finished reports for stdout.

use crate::report::traits::ReportRow;
use anyhow::Result;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use perfreport_core::{OutputFormat, TableStyle};
use rust_decimal::Decimal;

const HEADERS: [&str; 2] = ["position", "performance"];

pub fn render(
    rows: &[ReportRow],
    format: OutputFormat,
    style: TableStyle,
    precision: u32,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_table(rows, style, precision)),
        OutputFormat::Json => render_json(rows),
        OutputFormat::Csv => render_csv(rows, precision),
    }
}

/// Score text with exactly `precision` fractional digits
pub fn format_score(score: &Decimal, precision: u32) -> String {
    format!("{:.*}", precision as usize, score)
}

pub fn render_table(rows: &[ReportRow], style: TableStyle, precision: u32) -> String {
    let mut table = Table::new();
    table.load_preset(match style {
        TableStyle::Utf8 => UTF8_FULL,
        TableStyle::Ascii => ASCII_FULL,
    });
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(HEADERS.iter().map(|h| Cell::new(h).add_attribute(Attribute::Bold)));

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.position),
            Cell::new(format_score(&row.performance, precision)).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

pub fn render_json(rows: &[ReportRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub fn render_csv(rows: &[ReportRow], precision: u32) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;
    for row in rows {
        let score = format_score(&row.performance, precision);
        writer.write_record([row.position.as_str(), score.as_str()])?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow::new("DevOps Engineer", dec!(4.90)),
            ReportRow::new("Backend Developer, API", dec!(4.70)),
        ]
    }

    #[test]
    fn test_table_contains_headers_and_rows() {
        let table = render_table(&rows(), TableStyle::Utf8, 2);
        assert!(table.contains("position"));
        assert!(table.contains("performance"));
        assert!(table.contains("DevOps Engineer"));
        assert!(table.contains("4.90"));

        let devops = table.find("DevOps Engineer").unwrap();
        let backend = table.find("Backend Developer").unwrap();
        assert!(devops < backend);
    }

    #[test]
    fn test_ascii_table_has_no_box_drawing() {
        let table = render_table(&rows(), TableStyle::Ascii, 2);
        assert!(table.contains('+'));
        assert!(!table.contains('│'));
    }

    #[test]
    fn test_json_output() {
        let json = render_json(&rows()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["position"], "DevOps Engineer");
        assert_eq!(parsed[0]["performance"].as_f64(), Some(4.9));
        assert_eq!(parsed[1]["performance"].as_f64(), Some(4.7));
    }

    #[test]
    fn test_csv_output_quotes_delimiters() {
        let csv = render_csv(&rows(), 2).unwrap();
        assert_eq!(
            csv,
            "position,performance\nDevOps Engineer,4.90\n\"Backend Developer, API\",4.70\n"
        );
    }

    #[test]
    fn test_scores_padded_to_precision() {
        let huge = ReportRow::new("Board", "9999999999999999999999999999".parse::<Decimal>().unwrap());
        assert_eq!(huge.performance.scale(), 0);

        let csv = render_csv(&[huge.clone()], 2).unwrap();
        assert_eq!(csv, "position,performance\nBoard,9999999999999999999999999999.00\n");

        let table = render_table(&[huge], TableStyle::Ascii, 2);
        assert!(table.contains("9999999999999999999999999999.00"));

        assert_eq!(format_score(&dec!(4.7), 3), "4.700");
        assert_eq!(format_score(&dec!(5), 0), "5");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let text = render(&rows(), OutputFormat::Text, TableStyle::Utf8, 2).unwrap();
        assert!(text.contains('│'));

        let json = render(&rows(), OutputFormat::Json, TableStyle::Utf8, 2).unwrap();
        assert!(json.trim_start().starts_with('['));

        let csv = render(&rows(), OutputFormat::Csv, TableStyle::Utf8, 2).unwrap();
        assert!(csv.starts_with("position,performance"));
    }
}
