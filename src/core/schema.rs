// DeedFinder - core/schema.rs
//
// Known spreadsheet layouts and the matcher that recognises them.
//
// Schemas are data, not branches: matching walks KNOWN_SCHEMAS in order and
// the first schema whose every column is present wins. Column containment is
// case-sensitive; only the projected output is lowercased.

use crate::core::model::{NormalizedTable, RawTable};
use std::collections::{HashMap, HashSet};

/// A named, ordered list of required column names.
#[derive(Debug, PartialEq, Eq)]
pub struct SchemaDefinition {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// Registry export layout with all-lowercase headers.
pub const SCHEMA_A: SchemaDefinition = SchemaDefinition {
    name: "lowercase",
    columns: &[
        "srocode",
        "internaldocumentnumber",
        "docno",
        "docname",
        "registrationdate",
        "sroname",
        "micrno",
        "bank_type",
        "party_code",
        "sellerparty",
        "purchaserparty",
        "propertydescription",
        "areaname",
        "consideration_amt",
        "marketvalue",
        "dateofexecution",
        "stampdutypaid",
        "registrationfees",
        "status",
    ],
};

/// Registry export layout with CamelCase headers and a different column order.
pub const SCHEMA_B: SchemaDefinition = SchemaDefinition {
    name: "camelcase",
    columns: &[
        "SROCode",
        "InternalDocumentNumber",
        "DocNo",
        "DocName",
        "RegistrationDate",
        "SROName",
        "SellerParty",
        "PurchaserParty",
        "PropertyDescription",
        "AreaName",
        "consideration_amt",
        "MarketValue",
        "DateOfExecution",
        "StampDutyPaid",
        "RegistrationFees",
        "status",
        "micrno",
        "party_code",
        "bank_type",
    ],
};

/// All recognised layouts, in match-priority order.
pub const KNOWN_SCHEMAS: &[&SchemaDefinition] = &[&SCHEMA_A, &SCHEMA_B];

impl SchemaDefinition {
    /// True if every column of this schema is in `present`.
    pub fn is_satisfied_by(&self, present: &HashSet<&str>) -> bool {
        self.columns.iter().all(|c| present.contains(c))
    }
}

/// Find the first known schema whose columns are all present.
pub fn match_schema(present: &HashSet<&str>) -> Option<&'static SchemaDefinition> {
    match_schema_in(KNOWN_SCHEMAS, present)
}

/// Like [`match_schema`] over an explicit schema list.
pub fn match_schema_in(
    schemas: &[&'static SchemaDefinition],
    present: &HashSet<&str>,
) -> Option<&'static SchemaDefinition> {
    schemas.iter().copied().find(|s| s.is_satisfied_by(present))
}

/// Project `raw` onto `schema`: keep only schema columns, in schema order,
/// with lowercased names. Where a header repeats, the first occurrence wins.
///
/// The caller guarantees `schema` was matched against `raw`'s columns; any
/// column that is nonetheless absent yields empty cells.
pub fn project(raw: RawTable, schema: &'static SchemaDefinition) -> NormalizedTable {
    let mut first_index: HashMap<&str, usize> = HashMap::with_capacity(raw.columns.len());
    for (idx, name) in raw.columns.iter().enumerate() {
        first_index.entry(name.as_str()).or_insert(idx);
    }

    let picks: Vec<Option<usize>> = schema
        .columns
        .iter()
        .map(|c| first_index.get(c).copied())
        .collect();

    let rows = raw
        .rows
        .into_iter()
        .map(|mut row| {
            picks
                .iter()
                .map(|pick| match pick {
                    Some(idx) => row.get_mut(*idx).map(std::mem::take).unwrap_or_default(),
                    None => Default::default(),
                })
                .collect()
        })
        .collect();

    NormalizedTable {
        source: raw.source,
        schema: schema.name,
        columns: schema.columns.iter().map(|c| c.to_lowercase()).collect(),
        rows,
    }
}

/// Match and project in one step. `None` if no known schema fits.
pub fn normalize(raw: RawTable) -> Option<NormalizedTable> {
    let schema = {
        let present: HashSet<&str> = raw.columns.iter().map(String::as_str).collect();
        match_schema(&present)?
    };
    tracing::debug!(
        file = %raw.source.display(),
        schema = schema.name,
        rows = raw.row_count(),
        "Schema matched"
    );
    Some(project(raw, schema))
}
