//! Metadata record types backing the two template sheets
//!
//! A [`TableMetadataRecord`] describes the dataset as a whole and fills the
//! single data row of `table_metadata.xlsx`. One [`VariableMetadataRecord`]
//! per surviving column fills the rows of `variable_metadata.xlsx`. Both are
//! intentionally sparse: only the identifying field is pre-filled, everything
//! else is left blank for the annotator.

use serde::{Deserialize, Serialize};

/// Header row of the "metadata" sheet, in column order.
pub const TABLE_METADATA_HEADERS: [&str; 10] = [
    "table_owner",
    "date_uploading",
    "table_name",
    "focus_group",
    "data_type",
    "data_type_var",
    "species_var",
    "population_var",
    "date_end_datacollection",
    "comment",
];

/// Header row of the "variable_metadata" sheet, in column order.
pub const VARIABLE_METADATA_HEADERS: [&str; 5] = [
    "variable_name",
    "var_category",
    "var_unit",
    "var_type",
    "var_description",
];

/// Table-level metadata, one record per generated template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableMetadataRecord {
    pub table_owner: String,
    pub date_uploading: String,
    pub table_name: String,
    pub focus_group: String,
    pub data_type: String,
    pub data_type_var: String,
    pub species_var: String,
    pub population_var: String,
    pub date_end_datacollection: String,
    pub comment: String,
}

impl TableMetadataRecord {
    /// Create a record with only `table_name` filled in.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    /// Field values in [`TABLE_METADATA_HEADERS`] order.
    pub fn fields(&self) -> [&str; 10] {
        [
            &self.table_owner,
            &self.date_uploading,
            &self.table_name,
            &self.focus_group,
            &self.data_type,
            &self.data_type_var,
            &self.species_var,
            &self.population_var,
            &self.date_end_datacollection,
            &self.comment,
        ]
    }
}

/// Variable-level metadata, one record per surviving source column.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariableMetadataRecord {
    pub variable_name: String,
    pub var_category: String,
    pub var_unit: String,
    pub var_type: String,
    pub var_description: String,
}

impl VariableMetadataRecord {
    /// Create a record with only `variable_name` filled in.
    pub fn new(variable_name: impl Into<String>) -> Self {
        Self {
            variable_name: variable_name.into(),
            ..Self::default()
        }
    }

    /// Field values in [`VARIABLE_METADATA_HEADERS`] order.
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.variable_name,
            &self.var_category,
            &self.var_unit,
            &self.var_type,
            &self.var_description,
        ]
    }
}
