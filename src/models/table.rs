//! Remote table snapshot and system-column filtering

use serde::{Deserialize, Serialize};

/// Internal OBM bookkeeping columns that never appear in generated templates.
pub const EXCLUDED_FIELDS: [&str; 6] = [
    "obm_id",
    "obm_uploading_id",
    "obm_modifier_id",
    "obm_validation",
    "obm_comments",
    "obm_geometry",
];

/// A rectangular result fetched from the platform for one `schema.table`.
///
/// Column order is the source's column order and is preserved everywhere
/// downstream. The snapshot lives only for the duration of one generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteTable {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl RemoteTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<serde_json::Value>>) -> Self {
        Self { columns, rows }
    }

    /// Column names with the system columns removed, source order preserved.
    ///
    /// Matching against [`EXCLUDED_FIELDS`] is exact and case-sensitive. The
    /// result feeds both the variable sheet rows and the `species_var` /
    /// `population_var` dropdowns, so it is computed once per generation.
    pub fn filtered_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|name| !EXCLUDED_FIELDS.contains(&name.as_str()))
            .cloned()
            .collect()
    }
}
