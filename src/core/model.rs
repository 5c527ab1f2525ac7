// DeedFinder - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// =============================================================================
// Cell values
// =============================================================================

/// One scalar cell read from a spreadsheet.
///
/// `Empty` is the null value: it never matches a search, including the
/// empty search term.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Serialized in the same form as `Display`.
    DateTime(#[serde(serialize_with = "serialize_datetime")] NaiveDateTime),
    /// Spreadsheet error literal such as `#N/A` or `#DIV/0!`.
    Error(String),
}

fn serialize_datetime<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&dt.format(constants::DATETIME_DISPLAY_FORMAT))
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text used for substring matching. `None` for null cells.
    pub fn search_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::Error(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::DateTime(dt) => {
                write!(f, "{}", dt.format(constants::DATETIME_DISPLAY_FORMAT))
            }
        }
    }
}

// =============================================================================
// Tables
// =============================================================================

/// A spreadsheet's first worksheet as loaded from disk, before schema matching.
///
/// Row-major; every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub source: PathBuf,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A raw table projected onto one known schema.
///
/// Column names are lowercased and in the schema's declared order.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub source: PathBuf,
    /// Name of the schema the table matched.
    pub schema: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl NormalizedTable {
    /// Position of `name` among the (lowercase) columns, compared case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.columns.iter().position(|c| *c == wanted)
    }
}

/// File name portion of a path, falling back to the full display form.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

// =============================================================================
// Candidates
// =============================================================================

/// A spreadsheet-named directory entry selected for loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub file_name: String,
}

// =============================================================================
// Search criteria
// =============================================================================

/// The six columns the search form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchColumn {
    DocNo,
    RegistrationDate,
    SellerParty,
    PurchaserParty,
    #[default]
    PropertyDescription,
    DateOfExecution,
}

impl SearchColumn {
    /// All options in form order.
    pub fn all() -> &'static [SearchColumn] {
        &[
            SearchColumn::DocNo,
            SearchColumn::RegistrationDate,
            SearchColumn::SellerParty,
            SearchColumn::PurchaserParty,
            SearchColumn::PropertyDescription,
            SearchColumn::DateOfExecution,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchColumn::DocNo => "DocNo",
            SearchColumn::RegistrationDate => "RegistrationDate",
            SearchColumn::SellerParty => "SellerParty",
            SearchColumn::PurchaserParty => "PurchaserParty",
            SearchColumn::PropertyDescription => "PropertyDescription",
            SearchColumn::DateOfExecution => "DateOfExecution",
        }
    }
}

impl fmt::Display for SearchColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchColumn {
    type Err = String;

    /// Case-insensitive: `sellerparty` and `SELLERPARTY` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchColumn::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let options: Vec<&str> = SearchColumn::all().iter().map(|c| c.label()).collect();
                format!("unknown column '{s}'; expected one of {}", options.join(", "))
            })
    }
}

/// Column name plus literal search term, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriterion {
    pub column: String,
    pub term: String,
}

impl SearchCriterion {
    pub fn new(column: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            term: term.into(),
        }
    }
}

// =============================================================================
// Results
// =============================================================================

/// Rows of one normalized table whose target cell contains the search term.
#[derive(Debug, Clone)]
pub struct MatchSet {
    pub source: PathBuf,
    pub schema: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    /// Position of each matched row within its table's data rows.
    pub source_rows: Vec<usize>,
}

/// One row of the final result table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Sequential position in the aggregated result, starting at zero.
    pub index: usize,
    pub source: PathBuf,
    pub cells: Vec<CellValue>,
}

/// All matches of one search, concatenated in file-processing order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedResult {
    pub columns: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl AggregatedResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

/// A non-fatal anomaly encountered during a search run.
///
/// Every skipped file or table produces exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An editor lock/temp file (`~$...`) was skipped.
    TempFileSkipped { file_name: String },

    /// A directory entry could not be read while listing the folder.
    EntryInaccessible { path: PathBuf, reason: String },

    /// More candidates than the configured `max_files` cap; the rest were dropped.
    TooManyFiles { found: usize, limit: usize },

    /// The OS denied access to a spreadsheet.
    PermissionDenied { file_name: String },

    /// A spreadsheet could not be parsed.
    LoadFailed { file_name: String, reason: String },

    /// A spreadsheet's columns satisfy neither known schema.
    SchemaMismatch { file_name: String },

    /// The selected column is absent from a loaded table.
    ColumnMissing { column: String, file_name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TempFileSkipped { file_name } => {
                write!(f, "Skipping temporary file: {file_name}")
            }
            Self::EntryInaccessible { path, reason } => {
                write!(f, "Cannot access '{}': {reason}", path.display())
            }
            Self::TooManyFiles { found, limit } => write!(
                f,
                "{found} spreadsheets were found but the limit is {limit}. \
                 Only the first {limit} have been searched."
            ),
            Self::PermissionDenied { file_name } => write!(
                f,
                "Permission denied for file {file_name}. \
                 Ensure it is not open in another application."
            ),
            Self::LoadFailed { file_name, reason } => {
                write!(f, "An error occurred with file {file_name}: {reason}")
            }
            Self::SchemaMismatch { file_name } => write!(
                f,
                "File {file_name} does not match the expected column sets and will be skipped."
            ),
            Self::ColumnMissing { column, file_name } => write!(
                f,
                "Selected column '{column}' not found in file {file_name}."
            ),
        }
    }
}

// =============================================================================
// Search summary
// =============================================================================

/// Summary statistics for a completed search.
#[derive(Debug, Clone, Default)]
pub struct SearchSummary {
    /// Spreadsheet candidates collected from the folder.
    pub candidates: usize,

    /// Tables that loaded and matched a schema.
    pub tables_loaded: usize,

    /// Candidates skipped (unreadable or no schema match).
    pub files_skipped: usize,

    /// Tables that had the selected column and were searched.
    pub tables_searched: usize,

    /// Total rows in the aggregated result.
    pub rows_matched: usize,

    /// Wall-clock search duration.
    pub duration: std::time::Duration,
}
