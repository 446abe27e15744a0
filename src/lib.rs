//! OBM Metadata Templates - annotation templates for OpenBioMaps tables
//!
//! Provides a small pipeline around one operation:
//! - Fetch a schema-qualified table from an OpenBioMaps project
//! - Drop the platform's internal bookkeeping columns
//! - Write `table_metadata.xlsx` and `variable_metadata.xlsx`, spreadsheet
//!   templates with dropdown-constrained fields for a human annotator
//!
//! ```rust,no_run
//! use obm_metadata_templates::generate_templates;
//!
//! # fn main() -> Result<(), obm_metadata_templates::GenerateError> {
//! let templates = generate_templates("Behaviour")?;
//! println!("{} variables to annotate", templates.variables.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod generator;
pub mod models;
pub mod template;

// Re-export commonly used types
pub use client::{DataSource, ObmError, ObmSession};
pub use generator::{
    generate_templates, generate_templates_with, GenerateError, GeneratedTemplates,
    MetadataTemplateGenerator,
};
pub use models::{
    RemoteTable, TableMetadataRecord, VariableMetadataRecord, EXCLUDED_FIELDS,
    TABLE_METADATA_HEADERS, VARIABLE_METADATA_HEADERS,
};
pub use template::{TemplateError, TABLE_METADATA_FILE, VARIABLE_METADATA_FILE};
