// DeedFinder - tests/e2e_search.rs
//
// End-to-end tests for the search pipeline.
//
// These tests write real .xlsx workbooks with rust_xlsxwriter, then run the
// full collect -> load -> match -> filter -> aggregate path through the real
// calamine-backed WorkbookLoader. No stubs.

use deedfinder::app::search::{run_search, SearchRequest};
use deedfinder::core::discovery::DiscoveryConfig;
use deedfinder::core::export;
use deedfinder::core::model::{Diagnostic, SearchCriterion};
use deedfinder::core::schema::{SCHEMA_A, SCHEMA_B};
use deedfinder::util::error::DiscoveryError;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

/// Write a single-sheet workbook. Each row maps header name -> value; headers
/// not named in a row are left blank.
fn write_workbook(path: &Path, headers: &[&str], rows: &[&[(&str, &str)]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (name, value) in row.iter() {
            let col = headers.iter().position(|h| h == name).unwrap();
            sheet
                .write_string((r + 1) as u32, col as u16, *value)
                .unwrap();
        }
    }
    workbook.save(path).unwrap();
}

fn request(folder: &Path, column: &str, term: &str) -> SearchRequest {
    SearchRequest {
        folder: folder.to_path_buf(),
        criterion: SearchCriterion::new(column, term),
        discovery: DiscoveryConfig::default(),
    }
}

fn column_values(result: &deedfinder::core::model::AggregatedResult, name: &str) -> Vec<String> {
    let col = result.columns.iter().position(|c| c == name).unwrap();
    result.rows.iter().map(|r| r.cells[col].to_string()).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn e2e_plot_search_returns_only_matching_rows() {
    let dir = tempfile::tempdir().unwrap();
    write_workbook(
        &dir.path().join("register.xlsx"),
        SCHEMA_A.columns,
        &[
            &[("docno", "11"), ("propertydescription", "Open PLOT near tank")],
            &[("docno", "12"), ("propertydescription", "Flat 4B, Sunrise Apts")],
            &[("docno", "13"), ("propertydescription", "agricultural plot")],
        ],
    );

    let out = run_search(&request(dir.path(), "PropertyDescription", "Plot")).unwrap();
    assert!(out.diagnostics.is_empty(), "{:?}", out.diagnostics);

    let result = out.result.expect("two rows should match");
    assert_eq!(result.columns, SCHEMA_A.columns);
    assert_eq!(column_values(&result, "docno"), vec!["11", "13"]);
    let indices: Vec<usize> = result.rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn e2e_superset_columns_are_projected_in_schema_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut headers: Vec<&str> = vec!["Notes"];
    headers.extend(SCHEMA_B.columns.iter().rev());
    write_workbook(
        &dir.path().join("camel.xlsx"),
        &headers,
        &[&[("Notes", "x"), ("SellerParty", "Acme Corp")]],
    );

    let out = run_search(&request(dir.path(), "sellerparty", "ACME")).unwrap();
    let result = out.result.expect("row should match");
    let expected: Vec<String> = SCHEMA_B.columns.iter().map(|c| c.to_lowercase()).collect();
    assert_eq!(result.columns, expected);
    assert!(!result.columns.iter().any(|c| c == "notes"));
}

#[test]
fn e2e_lockfile_is_skipped_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    write_workbook(
        &dir.path().join("deeds.xlsx"),
        SCHEMA_A.columns,
        &[&[("docno", "7")]],
    );
    fs::write(dir.path().join("~$lockfile.xlsx"), b"owner").unwrap();

    let out = run_search(&request(dir.path(), "DocNo", "7")).unwrap();
    assert_eq!(
        out.diagnostics,
        vec![Diagnostic::TempFileSkipped {
            file_name: "~$lockfile.xlsx".to_string()
        }]
    );
    assert_eq!(out.summary.candidates, 1);
    assert_eq!(out.result.map(|r| r.len()), Some(1));
}

#[test]
fn e2e_missing_folder_is_fatal() {
    let missing = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("no-such-folder-for-e2e");
    let err = run_search(&request(&missing, "DocNo", "1")).unwrap_err();
    assert!(matches!(err, DiscoveryError::RootNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "The specified folder does not exist. Please try again."
    );
}

#[test]
fn e2e_both_schemas_found_in_processing_order() {
    let dir = tempfile::tempdir().unwrap();
    write_workbook(
        &dir.path().join("lower.xlsx"),
        SCHEMA_A.columns,
        &[
            &[("docno", "1"), ("sellerparty", "Acme Corp")],
            &[("docno", "2"), ("sellerparty", "Globex")],
        ],
    );
    write_workbook(
        &dir.path().join("camel.xlsx"),
        SCHEMA_B.columns,
        &[&[("DocNo", "3"), ("SellerParty", "Acme Corp")]],
    );

    let out = run_search(&request(dir.path(), "SellerParty", "acme")).unwrap();
    let result = out.result.expect("one row from each file");
    assert_eq!(result.len(), 2);
    assert_eq!(
        column_values(&result, "sellerparty"),
        vec!["Acme Corp", "Acme Corp"]
    );

    // Row order follows the directory listing order, which is not sorted.
    let listed: Vec<String> = walk_names(dir.path());
    let sources: Vec<String> = result
        .rows
        .iter()
        .map(|r| r.source.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(sources, listed);
}

#[test]
fn e2e_unknown_layout_and_corrupt_file_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_workbook(
        &dir.path().join("payroll.xlsx"),
        &["Name", "Salary"],
        &[&[("Name", "Plot Holder")]],
    );
    fs::write(dir.path().join("broken.xls"), b"not a workbook").unwrap();
    fs::write(dir.path().join("notes.txt"), b"plot").unwrap();

    let out = run_search(&request(dir.path(), "PropertyDescription", "")).unwrap();
    assert!(out.result.is_none());
    assert_eq!(out.diagnostics.len(), 2, "{:?}", out.diagnostics);
    assert!(out.diagnostics.contains(&Diagnostic::SchemaMismatch {
        file_name: "payroll.xlsx".to_string()
    }));
    let broken_reported = out.diagnostics.iter().any(|d| {
        matches!(d, Diagnostic::LoadFailed { file_name, .. } if file_name == "broken.xls")
    });
    assert!(broken_reported);
}

#[test]
fn e2e_literal_search_and_empty_term() {
    let dir = tempfile::tempdir().unwrap();
    write_workbook(
        &dir.path().join("deeds.xlsx"),
        SCHEMA_A.columns,
        &[
            &[("docno", "1"), ("propertydescription", "Plot 4.5 acres")],
            &[("docno", "2"), ("propertydescription", "Plot 405 acres")],
            &[("docno", "3")],
        ],
    );

    let dotted = run_search(&request(dir.path(), "PropertyDescription", "4.5")).unwrap();
    let dotted = dotted.result.expect("literal dot matches once");
    assert_eq!(column_values(&dotted, "docno"), vec!["1"]);

    let star = run_search(&request(dir.path(), "PropertyDescription", "P*")).unwrap();
    assert!(star.result.is_none());

    // The empty term matches every non-empty cell; row 3 has no description.
    let all = run_search(&request(dir.path(), "PropertyDescription", "")).unwrap();
    assert_eq!(column_values(&all.result.unwrap(), "docno"), vec!["1", "2"]);
}

#[test]
fn e2e_repeat_runs_export_identically() {
    let dir = tempfile::tempdir().unwrap();
    write_workbook(
        &dir.path().join("a.xlsx"),
        SCHEMA_A.columns,
        &[&[("docno", "1"), ("areaname", "North")]],
    );
    write_workbook(
        &dir.path().join("b.xlsx"),
        SCHEMA_B.columns,
        &[&[("DocNo", "10"), ("AreaName", "Northgate")]],
    );

    let req = request(dir.path(), "DocNo", "1");
    let mut exports = Vec::new();
    for _ in 0..2 {
        let result = run_search(&req).unwrap().result.unwrap();
        let mut buf = Vec::new();
        export::export_csv(&result, &mut buf, Path::new("out.csv")).unwrap();
        exports.push(buf);
    }
    assert_eq!(exports[0], exports[1]);
    assert!(String::from_utf8_lossy(&exports[0]).starts_with("index,srocode,"));
}

fn walk_names(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".xlsx"))
        .collect()
}
