// DeedFinder - core/aggregate.rs
//
// Concatenation of per-table matches into the single displayed result.

use crate::core::model::{AggregatedResult, CellValue, MatchSet, ResultRow};

/// Concatenate `sets` in order and number rows from zero.
///
/// Returns `None` when there is nothing to show. Column order is taken from
/// the first set; later sets are realigned by column name, so tables of
/// different schemas line up. A column a later set lacks is left empty.
pub fn aggregate(sets: Vec<MatchSet>) -> Option<AggregatedResult> {
    let columns = sets.first()?.columns.clone();
    let mut rows: Vec<ResultRow> = Vec::with_capacity(sets.iter().map(|s| s.rows.len()).sum());

    for set in sets {
        let mapping: Vec<Option<usize>> = columns
            .iter()
            .map(|name| set.columns.iter().position(|c| c == name))
            .collect();
        let identity = mapping
            .iter()
            .enumerate()
            .all(|(i, m)| *m == Some(i))
            && set.columns.len() == columns.len();

        for cells in set.rows {
            let cells = if identity {
                cells
            } else {
                realign(&cells, &mapping)
            };
            rows.push(ResultRow {
                index: rows.len(),
                source: set.source.clone(),
                cells,
            });
        }
    }

    if rows.is_empty() {
        return None;
    }

    tracing::debug!(rows = rows.len(), columns = columns.len(), "Results aggregated");
    Some(AggregatedResult { columns, rows })
}

fn realign(cells: &[CellValue], mapping: &[Option<usize>]) -> Vec<CellValue> {
    mapping
        .iter()
        .map(|m| m.and_then(|i| cells.get(i)).cloned().unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn set(name: &str, columns: &[&str], rows: Vec<Vec<CellValue>>) -> MatchSet {
        let n = rows.len();
        MatchSet {
            source: PathBuf::from(name),
            schema: "test",
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
            source_rows: (0..n).collect(),
        }
    }

    #[test]
    fn test_no_sets_is_no_result() {
        assert!(aggregate(Vec::new()).is_none());
    }

    #[test]
    fn test_concatenates_in_order_and_renumbers() {
        let a = set(
            "a.xlsx",
            &["docno", "sellerparty"],
            vec![vec![text("1"), text("Acme")], vec![text("2"), text("Acme Ltd")]],
        );
        let b = set("b.xlsx", &["docno", "sellerparty"], vec![vec![text("9"), text("acme")]]);

        let result = aggregate(vec![a, b]).unwrap();
        assert_eq!(result.len(), 3);
        let indices: Vec<usize> = result.rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(result.rows[2].source, PathBuf::from("b.xlsx"));
        assert_eq!(result.rows[2].cells[0], text("9"));
    }

    #[test]
    fn test_realigns_columns_by_name() {
        let a = set("a.xlsx", &["docno", "sellerparty"], vec![vec![text("1"), text("A")]]);
        let b = set("b.xlsx", &["sellerparty", "docno"], vec![vec![text("B"), text("2")]]);

        let result = aggregate(vec![a, b]).unwrap();
        assert_eq!(result.columns, vec!["docno".to_string(), "sellerparty".to_string()]);
        assert_eq!(result.rows[1].cells, vec![text("2"), text("B")]);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let build = || {
            vec![
                set("a.xlsx", &["docno"], vec![vec![text("1")]]),
                set("b.xlsx", &["docno"], vec![vec![text("2")]]),
            ]
        };
        assert_eq!(aggregate(build()), aggregate(build()));
    }
}
