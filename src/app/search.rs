// DeedFinder - app/search.rs
//
// One search run: collect -> load/match -> filter -> aggregate.
//
// Runs synchronously on the caller's thread and always completes. Only a bad
// folder path is fatal; every other anomaly becomes a diagnostic, in the
// order it occurred.

use crate::core::aggregate;
use crate::core::discovery::{self, DiscoveryConfig};
use crate::core::filter;
use crate::core::loader::{self, TableLoader};
use crate::core::model::{AggregatedResult, Diagnostic, SearchCriterion, SearchSummary};
use crate::platform::workbook::WorkbookLoader;
use crate::util::error::DiscoveryError;
use std::path::PathBuf;
use std::time::Instant;

/// Everything the form supplies for one submission.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub folder: PathBuf,
    pub criterion: SearchCriterion,
    pub discovery: DiscoveryConfig,
}

/// Result of a completed run.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// `None` when nothing matched.
    pub result: Option<AggregatedResult>,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: SearchSummary,
}

/// Run a search against real spreadsheet files.
pub fn run_search(request: &SearchRequest) -> Result<SearchOutcome, DiscoveryError> {
    run_search_with(request, &WorkbookLoader)
}

/// Run a search with an explicit loader.
pub fn run_search_with<L>(
    request: &SearchRequest,
    table_loader: &L,
) -> Result<SearchOutcome, DiscoveryError>
where
    L: TableLoader + ?Sized,
{
    let started = Instant::now();
    tracing::info!(
        folder = %request.folder.display(),
        column = %request.criterion.column,
        "Search started"
    );
    tracing::trace!(term = %request.criterion.term, "Search term");

    let collected = discovery::collect_candidates(&request.folder, &request.discovery)?;
    let mut diagnostics = collected.diagnostics;

    let loaded = loader::load_tables(&collected.candidates, table_loader);
    let files_skipped = loaded.diagnostics.len();
    diagnostics.extend(loaded.diagnostics);

    let searched = filter::apply_search(&loaded.tables, &request.criterion);
    diagnostics.extend(searched.diagnostics);

    let result = aggregate::aggregate(searched.matches);

    for d in &diagnostics {
        tracing::warn!("{}", d);
    }

    let summary = SearchSummary {
        candidates: collected.candidates.len(),
        tables_loaded: loaded.tables.len(),
        files_skipped,
        tables_searched: searched.tables_searched,
        rows_matched: result.as_ref().map_or(0, AggregatedResult::len),
        duration: started.elapsed(),
    };

    tracing::info!(
        candidates = summary.candidates,
        tables = summary.tables_loaded,
        skipped = summary.files_skipped,
        rows = summary.rows_matched,
        "Search complete"
    );

    Ok(SearchOutcome {
        result,
        diagnostics,
        summary,
    })
}
