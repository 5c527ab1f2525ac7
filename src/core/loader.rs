// DeedFinder - core/loader.rs
//
// Dataset loading: turn candidates into normalized tables.
//
// Reading a file is delegated to a `TableLoader` so the fold below can be
// exercised without real spreadsheets. Every failure becomes a diagnostic;
// nothing here aborts the run.

use crate::core::model::{Candidate, Diagnostic, NormalizedTable, RawTable};
use crate::core::schema;
use crate::util::error::LoadError;

/// Reads one candidate file into a raw table.
pub trait TableLoader {
    fn load(&self, candidate: &Candidate) -> Result<RawTable, LoadError>;
}

/// Tables that loaded and matched, plus one diagnostic per skipped file.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub tables: Vec<NormalizedTable>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Load, match, and project every candidate in order.
pub fn load_tables<L>(candidates: &[Candidate], loader: &L) -> LoadOutcome
where
    L: TableLoader + ?Sized,
{
    candidates
        .iter()
        .fold(LoadOutcome::default(), |mut outcome, candidate| {
            match load_one(candidate, loader) {
                Ok(table) => outcome.tables.push(table),
                Err(diagnostic) => {
                    tracing::debug!(file = %candidate.path.display(), "File skipped");
                    outcome.diagnostics.push(diagnostic);
                }
            }
            outcome
        })
}

fn load_one<L>(candidate: &Candidate, loader: &L) -> Result<NormalizedTable, Diagnostic>
where
    L: TableLoader + ?Sized,
{
    let raw = loader
        .load(candidate)
        .map_err(|e| to_diagnostic(candidate, e))?;

    schema::normalize(raw).ok_or_else(|| Diagnostic::SchemaMismatch {
        file_name: candidate.file_name.clone(),
    })
}

fn to_diagnostic(candidate: &Candidate, error: LoadError) -> Diagnostic {
    tracing::debug!(file = %error.path().display(), error = %error, "Load failed");
    let file_name = candidate.file_name.clone();
    match error {
        LoadError::PermissionDenied { .. } => Diagnostic::PermissionDenied { file_name },
        LoadError::Open { source, .. } => Diagnostic::LoadFailed {
            file_name,
            reason: source.to_string(),
        },
        LoadError::Workbook { source, .. } => Diagnostic::LoadFailed {
            file_name,
            reason: source.to_string(),
        },
        LoadError::NoWorksheet { .. } => Diagnostic::LoadFailed {
            file_name,
            reason: "workbook has no worksheets".to_string(),
        },
    }
}
