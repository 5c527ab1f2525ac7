// DeedFinder - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "DeedFinder";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "DeedFinder";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Heading shown above the search form.
pub const FORM_TITLE: &str = "Document Details Search Interface";

// =============================================================================
// File collection
// =============================================================================

/// Default include glob patterns for spreadsheet collection.
/// Matching is case-sensitive, so `REPORT.XLSX` is not collected.
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["*.xls", "*.xlsx"];

/// Names matching this pattern are editor lock/temp files (`~$Book1.xlsx`).
pub const TEMP_FILE_PATTERN: &str = "~$*";

/// Smallest accepted value for the optional max-files cap. There is no
/// cap unless one is configured.
pub const MIN_MAX_FILES: usize = 1;

// =============================================================================
// Loading
// =============================================================================

/// Prefix used for header cells that are empty, followed by the column index.
pub const UNNAMED_COLUMN_PREFIX: &str = "Unnamed: ";

/// chrono format used to render spreadsheet date/time cells as text.
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Export
// =============================================================================

/// Maximum number of rows that can be exported in a single operation.
pub const MAX_EXPORT_ROWS: usize = 5_000_000;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
