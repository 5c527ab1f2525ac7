// DeedFinder - app/state.rs
//
// Application state management. Holds the form inputs, the outcome of the
// most recent submission, and view flags.
// Owned by the eframe::App implementation.

use crate::app::search::{self, SearchOutcome, SearchRequest};
use crate::core::discovery::DiscoveryConfig;
use crate::core::export;
use crate::core::model::{AggregatedResult, SearchColumn, SearchCriterion};
use crate::util::error::{DeedFinderError, ExportError, Result};
use std::path::{Path, PathBuf};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Folder path as typed (or picked) in the form.
    pub folder_path: String,

    /// Selected search column.
    pub column: SearchColumn,

    /// Search value as typed.
    pub term: String,

    /// Collection settings from config.toml.
    pub discovery: DiscoveryConfig,

    /// Outcome of the most recent completed submission.
    pub outcome: Option<SearchOutcome>,

    /// Criterion the current outcome was produced with; used for captions.
    pub last_criterion: Option<SearchCriterion>,

    /// Fatal error from the most recent submission, shown instead of results.
    pub fatal_error: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal startup warnings (config problems).
    pub startup_warnings: Vec<String>,

    /// Whether to show the search summary window.
    pub show_summary: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Set by a panel to request a submission on the next frame.
    pub pending_submit: bool,
}

impl AppState {
    pub fn new(
        column: SearchColumn,
        discovery: DiscoveryConfig,
        font_size: f32,
        debug_mode: bool,
    ) -> Self {
        Self {
            folder_path: String::new(),
            column,
            term: String::new(),
            discovery,
            outcome: None,
            last_criterion: None,
            fatal_error: None,
            status_message: "Ready. Enter a folder path and search value.".to_string(),
            startup_warnings: Vec::new(),
            show_summary: false,
            debug_mode,
            font_size,
            pending_submit: false,
        }
    }

    /// Build the request for the current form inputs.
    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            folder: PathBuf::from(self.folder_path.trim()),
            criterion: SearchCriterion::new(self.column.label(), self.term.clone()),
            discovery: self.discovery.clone(),
        }
    }

    /// Run the pipeline for the current inputs, replacing any previous outcome.
    ///
    /// Blocks until the run completes.
    pub fn submit(&mut self) {
        let request = self.request();
        self.clear();

        match search::run_search(&request) {
            Ok(outcome) => {
                self.status_message = format!(
                    "{} matching row(s) from {} file(s) in {:.2}s",
                    outcome.summary.rows_matched,
                    outcome.summary.tables_searched,
                    outcome.summary.duration.as_secs_f64()
                );
                self.outcome = Some(outcome);
            }
            Err(e) => {
                tracing::error!(folder = %request.folder.display(), error = %e, "Search aborted");
                self.status_message = "Search aborted.".to_string();
                self.fatal_error = Some(e.to_string());
            }
        }
        self.last_criterion = Some(request.criterion);
    }

    /// The aggregated rows of the current outcome, if any matched.
    pub fn result(&self) -> Option<&AggregatedResult> {
        self.outcome.as_ref().and_then(|o| o.result.as_ref())
    }

    /// Caption shown above the results grid, or in place of it.
    pub fn result_caption(&self) -> Option<String> {
        let criterion = self.last_criterion.as_ref()?;
        self.outcome.as_ref()?;
        Some(match self.result() {
            Some(_) => format!(
                "Results for {} containing '{}':",
                criterion.column, criterion.term
            ),
            None => format!(
                "No results found for {} containing '{}'.",
                criterion.column, criterion.term
            ),
        })
    }

    /// Write the current result as CSV to `dest`.
    pub fn export_csv_to(&self, dest: &Path) -> Result<usize> {
        let result = self.exportable()?;
        let file = create_export_file(dest)?;
        Ok(export::export_csv(result, file, dest)?)
    }

    /// Write the current result as JSON to `dest`.
    pub fn export_json_to(&self, dest: &Path) -> Result<usize> {
        let result = self.exportable()?;
        let file = create_export_file(dest)?;
        Ok(export::export_json(result, file, dest)?)
    }

    fn exportable(&self) -> Result<&AggregatedResult> {
        self.result()
            .ok_or_else(|| DeedFinderError::Export(ExportError::NoResults))
    }

    /// Clear the previous outcome and reset to the pre-submission state.
    pub fn clear(&mut self) {
        self.outcome = None;
        self.last_criterion = None;
        self.fatal_error = None;
        self.show_summary = false;
        self.status_message = "Ready.".to_string();
    }
}

fn create_export_file(dest: &Path) -> Result<std::fs::File> {
    std::fs::File::create(dest).map_err(|e| DeedFinderError::Io {
        path: dest.to_path_buf(),
        operation: "create export file",
        source: e,
    })
}
