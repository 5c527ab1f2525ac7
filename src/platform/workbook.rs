// DeedFinder - platform/workbook.rs
//
// Spreadsheet reading via calamine. Produces the first worksheet of an
// .xls or .xlsx file as a `RawTable` whose first row supplies the headers.
//
// The file is opened here rather than through `calamine::open_workbook` so
// that an OS permission failure (typically Excel holding a lock on Windows)
// stays distinguishable from a corrupt workbook.

use crate::core::loader::TableLoader;
use crate::core::model::{Candidate, CellValue, RawTable};
use crate::util::constants;
use crate::util::error::LoadError;
use calamine::{Data, DataType, Range, Reader, Xls, Xlsx};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// `TableLoader` backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkbookLoader;

impl TableLoader for WorkbookLoader {
    fn load(&self, candidate: &Candidate) -> Result<RawTable, LoadError> {
        read_first_sheet(&candidate.path)
    }
}

/// Read the first worksheet of `path`.
pub fn read_first_sheet(path: &Path) -> Result<RawTable, LoadError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::PermissionDenied {
            LoadError::PermissionDenied {
                path: path.to_path_buf(),
                source: e,
            }
        } else {
            LoadError::Open {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let reader = BufReader::new(file);

    let is_xls = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xls"));

    let range = if is_xls {
        let mut workbook: Xls<_> = Xls::new(reader).map_err(|e| workbook_error(path, e.into()))?;
        first_range(&mut workbook, path)?
    } else {
        let mut workbook: Xlsx<_> =
            Xlsx::new(reader).map_err(|e| workbook_error(path, e.into()))?;
        first_range(&mut workbook, path)?
    };

    let table = range_to_table(path, &range);
    tracing::debug!(
        file = %path.display(),
        columns = table.columns.len(),
        rows = table.row_count(),
        "Worksheet loaded"
    );
    Ok(table)
}

fn first_range<R>(workbook: &mut R, path: &Path) -> Result<Range<Data>, LoadError>
where
    R: Reader<BufReader<File>>,
    R::Error: Into<calamine::Error>,
{
    match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => Ok(range),
        Some(Err(e)) => Err(workbook_error(path, e.into())),
        None => Err(LoadError::NoWorksheet {
            path: path.to_path_buf(),
        }),
    }
}

fn workbook_error(path: &Path, source: calamine::Error) -> LoadError {
    LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    }
}

/// Convert a worksheet range to a table: first row is the header, remaining
/// rows are data. Rows with no non-empty cell are dropped.
fn range_to_table(path: &Path, range: &Range<Data>) -> RawTable {
    let mut rows_iter = range.rows();

    let columns: Vec<String> = rows_iter
        .next()
        .map(|header| {
            header
                .iter()
                .enumerate()
                .map(|(idx, cell)| header_name(idx, cell))
                .collect()
        })
        .unwrap_or_default();

    let width = columns.len();
    let rows = rows_iter
        .map(|row| {
            let mut cells: Vec<CellValue> = row.iter().map(to_cell).collect();
            cells.resize(width, CellValue::Empty);
            cells
        })
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();

    RawTable {
        source: path.to_path_buf(),
        columns,
        rows,
    }
}

fn header_name(idx: usize, cell: &Data) -> String {
    match to_cell(cell) {
        CellValue::Empty => format!("{}{idx}", constants::UNNAMED_COLUMN_PREFIX),
        other => other.to_string(),
    }
}

/// Map a calamine cell onto the core cell type.
pub fn to_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(dt) => CellValue::DateTime(dt),
            None => CellValue::Text(cell.to_string()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}
