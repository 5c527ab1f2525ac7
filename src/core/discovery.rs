// DeedFinder - core/discovery.rs
//
// Spreadsheet collection from a single folder (non-recursive).
//
// Architecture note: this module uses `walkdir` for directory listing as an
// OS abstraction. It reads only directory entries and metadata, never file
// contents; loading is owned by the app layer through a `TableLoader`.
//
//   - Per-entry I/O errors are non-fatal and returned as diagnostics.
//   - Only a missing, non-directory, or inaccessible root is fatal.
//   - Listing order is the OS order; nothing is sorted.

use crate::core::model::{Candidate, Diagnostic};
use crate::util::constants;
use crate::util::error::DiscoveryError;
use std::path::Path;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a collection pass.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Glob patterns (file name only) a file must match to be collected.
    pub include_patterns: Vec<String>,

    /// Optional cap on candidates returned; later entries are dropped with a
    /// `TooManyFiles` diagnostic. `None` collects every matching file.
    pub max_files: Option<usize>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            include_patterns: constants::DEFAULT_INCLUDE_PATTERNS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            max_files: None,
        }
    }
}

/// Candidates plus the diagnostics raised while listing.
#[derive(Debug, Default)]
pub struct Collected {
    pub candidates: Vec<Candidate>,
    pub diagnostics: Vec<Diagnostic>,
}

// =============================================================================
// Pre-flight
// =============================================================================

/// Check that `root` is an existing, accessible directory.
///
/// `fs::metadata` is used rather than `Path::exists` because the latter maps
/// every error, including PermissionDenied, to `false`.
pub fn check_root(root: &Path) -> Result<(), DiscoveryError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(DiscoveryError::NotADirectory {
            path: root.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(DiscoveryError::PermissionDenied {
                path: root.to_path_buf(),
                source: e,
            })
        }
        Err(_) => Err(DiscoveryError::RootNotFound {
            path: root.to_path_buf(),
        }),
    }
}

// =============================================================================
// Collection
// =============================================================================

/// List spreadsheet candidates directly inside `root`.
///
/// # Fatal errors
/// Returns `Err` only if the root is missing, not a directory, or denied.
pub fn collect_candidates(
    root: &Path,
    config: &DiscoveryConfig,
) -> Result<Collected, DiscoveryError> {
    check_root(root)?;

    tracing::debug!(
        root = %root.display(),
        max_files = ?config.max_files,
        include = ?config.include_patterns,
        "Collection starting"
    );

    let include_pats = compile_patterns(&config.include_patterns, "include");
    let temp_pat = glob::Pattern::new(constants::TEMP_FILE_PATTERN).ok();

    let mut collected = Collected::default();

    let walker = walkdir::WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                tracing::debug!(path = %path.display(), error = %e, "Entry inaccessible");
                collected.diagnostics.push(Diagnostic::EntryInaccessible {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        // Patterns are matched against the lossy name; the real path is kept
        // for loading so names that are not valid UTF-8 still open.
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy();
        let file_name = file_name.as_ref();

        if !is_included(file_name, &include_pats) {
            tracing::trace!(file = file_name, "Not a spreadsheet name");
            continue;
        }

        if temp_pat.as_ref().is_some_and(|p| p.matches(file_name)) {
            tracing::debug!(file = file_name, "Skipping temp file");
            collected.diagnostics.push(Diagnostic::TempFileSkipped {
                file_name: file_name.to_string(),
            });
            continue;
        }

        collected.candidates.push(Candidate {
            path: path.to_path_buf(),
            file_name: file_name.to_string(),
        });
    }

    let found = collected.candidates.len();
    if let Some(limit) = config.max_files.filter(|&limit| found > limit) {
        collected.candidates.truncate(limit);
        collected.diagnostics.push(Diagnostic::TooManyFiles { found, limit });
        tracing::info!(found, limit, "Candidate list truncated");
    }

    tracing::debug!(
        candidates = collected.candidates.len(),
        diagnostics = collected.diagnostics.len(),
        "Collection complete"
    );

    Ok(collected)
}

// =============================================================================
// Glob helpers
// =============================================================================

/// Compile a list of glob pattern strings into `glob::Pattern` objects.
/// Patterns that fail to compile are logged as warnings and skipped.
fn compile_patterns(patterns: &[String], kind: &str) -> Vec<glob::Pattern> {
    patterns
        .iter()
        .filter_map(|p| match glob::Pattern::new(p) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                tracing::warn!(pattern = p, kind, error = %e, "Invalid glob pattern, skipping");
                None
            }
        })
        .collect()
}

/// Returns true if `file_name` matches at least one include pattern.
fn is_included(file_name: &str, include_pats: &[glob::Pattern]) -> bool {
    include_pats.iter().any(|p| p.matches(file_name))
}

// =============================================================================
// Tests
// =============================================================================
