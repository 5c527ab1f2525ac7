// DeedFinder - core/export.rs
//
// CSV and JSON export of an aggregated search result.
// Core layer: writes to any Write trait object.

use crate::core::model::{AggregatedResult, CellValue, ResultRow};
use crate::util::constants;
use crate::util::error::ExportError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::Write;
use std::path::Path;

/// Export result rows to CSV: an `index` column followed by the result columns.
pub fn export_csv<W: Write>(
    result: &AggregatedResult,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_size(result)?;
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(result.columns.len() + 1);
    header.push("index");
    header.extend(result.columns.iter().map(String::as_str));
    csv_writer.write_record(&header).map_err(csv_err)?;

    for row in &result.rows {
        let mut record = Vec::with_capacity(row.cells.len() + 1);
        record.push(row.index.to_string());
        record.extend(row.cells.iter().map(CellValue::to_string));
        csv_writer.write_record(&record).map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(result.rows.len())
}

/// One exported row: `index`, `source_file`, then each column in result order.
struct JsonRow<'a> {
    columns: &'a [String],
    row: &'a ResultRow,
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 2))?;
        map.serialize_entry("index", &self.row.index)?;
        map.serialize_entry("source_file", &self.row.source.display().to_string())?;
        for (column, cell) in self.columns.iter().zip(self.row.cells.iter()) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

/// Export result rows to JSON: an array of flat objects whose keys follow the
/// result's column order.
pub fn export_json<W: Write>(
    result: &AggregatedResult,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_size(result)?;

    let rows: Vec<JsonRow<'_>> = result
        .rows
        .iter()
        .map(|row| JsonRow {
            columns: &result.columns,
            row,
        })
        .collect();

    serde_json::to_writer_pretty(writer, &rows).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(rows.len())
}

fn check_size(result: &AggregatedResult) -> Result<(), ExportError> {
    if result.rows.len() > constants::MAX_EXPORT_ROWS {
        return Err(ExportError::TooManyRows {
            count: result.rows.len(),
            max: constants::MAX_EXPORT_ROWS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn sample() -> AggregatedResult {
        AggregatedResult {
            columns: vec!["docno".to_string(), "sellerparty".to_string()],
            rows: vec![
                ResultRow {
                    index: 0,
                    source: PathBuf::from("a.xlsx"),
                    cells: vec![CellValue::Float(101.0), CellValue::Text("Acme, Corp".to_string())],
                },
                ResultRow {
                    index: 1,
                    source: PathBuf::from("b.xlsx"),
                    cells: vec![CellValue::Float(7.0), CellValue::Empty],
                },
            ],
        }
    }

    #[test]
    fn test_csv_export() {
        let mut buf = Vec::new();
        let count = export_csv(&sample(), &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("index,docno,sellerparty"));
        assert_eq!(lines.next(), Some("0,101,\"Acme, Corp\""));
        assert_eq!(lines.next(), Some("1,7,"));
    }

    #[test]
    fn test_json_export() {
        let mut buf = Vec::new();
        let count = export_json(&sample(), &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 2);

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["sellerparty"], "Acme, Corp");
        assert_eq!(parsed[1]["sellerparty"], serde_json::Value::Null);
        assert_eq!(parsed[1]["source_file"], "b.xlsx");
        assert!(parsed[0].get("values").is_none());
    }

    #[test]
    fn test_json_keys_follow_column_order() {
        let result = AggregatedResult {
            columns: vec![
                "srocode".to_string(),
                "docno".to_string(),
                "areaname".to_string(),
            ],
            rows: vec![ResultRow {
                index: 0,
                source: PathBuf::from("a.xlsx"),
                cells: vec![
                    CellValue::Text("S1".to_string()),
                    CellValue::Int(5),
                    CellValue::Text("North".to_string()),
                ],
            }],
        };
        let mut buf = Vec::new();
        export_json(&result, &mut buf, Path::new("out.json")).unwrap();

        // serde_json::Value sorts keys, so check the order in the raw text.
        let text = String::from_utf8(buf).unwrap();
        let keys = ["index", "source_file", "srocode", "docno", "areaname"];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| text.find(&format!("\"{k}\":")).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "{text}");
    }

    #[test]
    fn test_json_datetime_matches_display_form() {
        let when = NaiveDate::from_ymd_opt(2023, 4, 9)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let result = AggregatedResult {
            columns: vec!["registrationdate".to_string()],
            rows: vec![ResultRow {
                index: 0,
                source: PathBuf::from("a.xlsx"),
                cells: vec![CellValue::DateTime(when)],
            }],
        };
        let mut buf = Vec::new();
        export_json(&result, &mut buf, Path::new("out.json")).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["registrationdate"], "2023-04-09 00:00:00");
        assert_eq!(
            parsed[0]["registrationdate"],
            CellValue::DateTime(when).to_string()
        );
    }
}
