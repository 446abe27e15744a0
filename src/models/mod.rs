//! Models module for the SDK
//!
//! Defines the data structures exchanged between the platform client and the
//! template writers: the fetched table snapshot, the two metadata record
//! types and the fixed dropdown option lists.

pub mod options;
pub mod records;
pub mod table;

pub use options::{
    category_description, category_reference_rows, CategoryReferenceRow, CATEGORY_SHEET_HEADERS,
    DATA_TYPE_OPTIONS, FOCUS_GROUP_OPTIONS, VAR_CATEGORY_OPTIONS, VAR_TYPE_OPTIONS,
};
pub use records::{
    TableMetadataRecord, VariableMetadataRecord, TABLE_METADATA_HEADERS, VARIABLE_METADATA_HEADERS,
};
pub use table::{RemoteTable, EXCLUDED_FIELDS};
