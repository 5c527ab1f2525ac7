// DeedFinder - core/filter.rs
//
// Literal, case-insensitive substring search over one column of each
// normalized table.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{display_name, Diagnostic, MatchSet, NormalizedTable, SearchCriterion};

/// Output of a search pass: per-table matches and per-table skips.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// One entry per table with at least one matching row, in table order.
    pub matches: Vec<MatchSet>,

    /// One `ColumnMissing` per table lacking the selected column.
    pub diagnostics: Vec<Diagnostic>,

    /// Tables that had the column and were scanned.
    pub tables_searched: usize,
}

/// Returns true if `haystack` contains `needle_lower` ignoring case.
///
/// `needle_lower` must already be lowercased. The match is literal: `.`
/// and `*` only match themselves.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Search every table for rows whose `criterion.column` cell contains
/// `criterion.term`.
///
/// Empty cells never match. An empty term matches every non-empty cell.
pub fn apply_search(tables: &[NormalizedTable], criterion: &SearchCriterion) -> FilterOutcome {
    let term_lower = criterion.term.to_lowercase();
    let mut outcome = FilterOutcome::default();

    for table in tables {
        let Some(col) = table.column_index(&criterion.column) else {
            tracing::debug!(
                file = %table.source.display(),
                column = %criterion.column,
                "Selected column missing"
            );
            outcome.diagnostics.push(Diagnostic::ColumnMissing {
                column: criterion.column.clone(),
                file_name: display_name(&table.source),
            });
            continue;
        };
        outcome.tables_searched += 1;

        let mut rows = Vec::new();
        let mut source_rows = Vec::new();
        for (idx, row) in table.rows.iter().enumerate() {
            let hit = row
                .get(col)
                .and_then(|cell| cell.search_text())
                .is_some_and(|text| contains_ignore_case(&text, &term_lower));
            if hit {
                rows.push(row.clone());
                source_rows.push(idx);
            }
        }

        tracing::debug!(
            file = %table.source.display(),
            rows = table.rows.len(),
            matched = rows.len(),
            "Table searched"
        );

        if !rows.is_empty() {
            outcome.matches.push(MatchSet {
                source: table.source.clone(),
                schema: table.schema,
                columns: table.columns.clone(),
                rows,
                source_rows,
            });
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CellValue;
    use std::path::PathBuf;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn table(name: &str, values: Vec<CellValue>) -> NormalizedTable {
        NormalizedTable {
            source: PathBuf::from(name),
            schema: "test",
            columns: vec!["docno".to_string(), "propertydescription".to_string()],
            rows: values
                .into_iter()
                .enumerate()
                .map(|(i, v)| vec![CellValue::Int(i as i64), v])
                .collect(),
        }
    }

    #[test]
    fn test_case_insensitive_term() {
        let t = table(
            "a.xlsx",
            vec![text("PLOT No 5"), text("Flat 3"), text("open plot")],
        );
        let out = apply_search(&[t], &SearchCriterion::new("PropertyDescription", "Plot"));
        assert_eq!(out.matches.len(), 1);
        assert_eq!(out.matches[0].source_rows, vec![0, 2]);
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_column_name_case_variants_agree() {
        let t = table("a.xlsx", vec![text("x"), text("y")]);
        let lower = apply_search(std::slice::from_ref(&t), &SearchCriterion::new("docno", "1"));
        let upper = apply_search(std::slice::from_ref(&t), &SearchCriterion::new("DOCNO", "1"));
        assert_eq!(lower.matches[0].source_rows, upper.matches[0].source_rows);
        assert_eq!(lower.matches[0].source_rows, vec![1]);
    }

    #[test]
    fn test_literal_not_pattern() {
        let t = table(
            "a.xlsx",
            vec![text("Survey 12.5"), text("Survey 1245"), text("a*b")],
        );
        let dot = apply_search(
            std::slice::from_ref(&t),
            &SearchCriterion::new("propertydescription", "2.5"),
        );
        assert_eq!(dot.matches[0].source_rows, vec![0]);

        let star = apply_search(&[t], &SearchCriterion::new("propertydescription", "*"));
        assert_eq!(star.matches[0].source_rows, vec![2]);
    }

    #[test]
    fn test_empty_cells_never_match() {
        let t = table("a.xlsx", vec![CellValue::Empty, text(""), text("abc")]);
        let out = apply_search(&[t], &SearchCriterion::new("propertydescription", ""));
        // Empty term matches every non-null cell, including empty text.
        assert_eq!(out.matches[0].source_rows, vec![1, 2]);
    }

    #[test]
    fn test_numbers_match_on_text_form() {
        let t = NormalizedTable {
            source: PathBuf::from("n.xlsx"),
            schema: "test",
            columns: vec!["docno".to_string()],
            rows: vec![
                vec![CellValue::Float(1204.0)],
                vec![CellValue::Float(99.0)],
            ],
        };
        let out = apply_search(&[t], &SearchCriterion::new("DocNo", "120"));
        assert_eq!(out.matches[0].source_rows, vec![0]);
    }

    #[test]
    fn test_missing_column_skips_table_with_diagnostic() {
        let t = table("a.xlsx", vec![text("Plot")]);
        let out = apply_search(&[t], &SearchCriterion::new("SellerParty", "plot"));
        assert!(out.matches.is_empty());
        assert_eq!(out.tables_searched, 0);
        assert_eq!(
            out.diagnostics,
            vec![Diagnostic::ColumnMissing {
                column: "SellerParty".to_string(),
                file_name: "a.xlsx".to_string(),
            }]
        );
    }

    #[test]
    fn test_tables_without_hits_contribute_nothing() {
        let a = table("a.xlsx", vec![text("Flat")]);
        let b = table("b.xlsx", vec![text("Plot")]);
        let out = apply_search(&[a, b], &SearchCriterion::new("propertydescription", "plot"));
        assert_eq!(out.tables_searched, 2);
        assert_eq!(out.matches.len(), 1);
        assert_eq!(out.matches[0].source, PathBuf::from("b.xlsx"));
    }
}
