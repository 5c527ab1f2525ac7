// DeedFinder - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for user-initiated operations on a finished search.
///
/// Search runs report `DiscoveryError` directly and per-file `LoadError`s
/// become diagnostics; config problems become warnings. None of them reach
/// this type.
#[derive(Debug)]
pub enum DeedFinderError {
    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for DeedFinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DeedFinderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Discovery errors
// ---------------------------------------------------------------------------

/// Fatal errors raised before any file in the search folder is read.
#[derive(Debug)]
pub enum DiscoveryError {
    /// The search folder does not exist.
    RootNotFound { path: PathBuf },

    /// The search path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// Permission denied accessing the search folder.
    PermissionDenied { path: PathBuf, source: io::Error },
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotFound { .. } => {
                write!(f, "The specified folder does not exist. Please try again.")
            }
            Self::NotADirectory { path } => {
                write!(
                    f,
                    "'{}' is a file, not a folder. Please choose a folder.",
                    path.display()
                )
            }
            Self::PermissionDenied { path, source } => {
                write!(
                    f,
                    "Permission denied accessing '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors reading one spreadsheet. Always non-fatal to a search run.
#[derive(Debug)]
pub enum LoadError {
    /// The OS refused access; usually the workbook is open in another program.
    PermissionDenied { path: PathBuf, source: io::Error },

    /// Any other failure opening the file.
    Open { path: PathBuf, source: io::Error },

    /// The spreadsheet parser rejected the file contents.
    Workbook {
        path: PathBuf,
        source: calamine::Error,
    },

    /// The workbook contains no worksheets.
    NoWorksheet { path: PathBuf },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::PermissionDenied { path, .. }
            | Self::Open { path, .. }
            | Self::Workbook { path, .. }
            | Self::NoWorksheet { path } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied { path, source } => {
                write!(f, "'{}': permission denied: {source}", path.display())
            }
            Self::Open { path, source } => {
                write!(f, "'{}': cannot open: {source}", path.display())
            }
            Self::Workbook { path, source } => {
                write!(f, "'{}': {source}", path.display())
            }
            Self::NoWorksheet { path } => {
                write!(f, "'{}': workbook has no worksheets", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. } => Some(source),
            Self::Open { source, .. } => Some(source),
            Self::Workbook { source, .. } => Some(source),
            Self::NoWorksheet { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Export would exceed maximum row count.
    TooManyRows { count: usize, max: usize },

    /// Export was requested before any search produced rows.
    NoResults,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::TooManyRows { count, max } => write!(
                f,
                "Export of {count} rows exceeds maximum of {max}. \
                 Narrow the search term to reduce the result set."
            ),
            Self::NoResults => write!(f, "There are no results to export."),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for DeedFinderError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for DeedFinder results.
pub type Result<T> = std::result::Result<T, DeedFinderError>;
