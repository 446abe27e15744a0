//! Template generation orchestration
//!
//! Fetch the table, filter out the platform's bookkeeping columns, then write
//! the two templates. The table workbook is saved before the variable
//! workbook is built, so a failure in the second half can leave
//! `table_metadata.xlsx` behind; a fetch failure writes nothing.

use std::path::PathBuf;

use tracing::info;

use crate::client::{
    DataSource, ObmError, ObmSession, DEFAULT_API_VERSION, DEFAULT_PROJECT, DEFAULT_SCHEMA,
    DEFAULT_URL,
};
use crate::models::{TableMetadataRecord, VariableMetadataRecord};
use crate::template::{write_table_metadata, write_variable_metadata, TemplateError};

/// Error during template generation
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Source(#[from] ObmError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// The records behind the two written files, returned for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTemplates {
    pub table: TableMetadataRecord,
    pub variables: Vec<VariableMetadataRecord>,
}

/// Builds the two metadata templates for one platform table.
#[derive(Debug, Clone)]
pub struct MetadataTemplateGenerator {
    schema_name: String,
    output_dir: PathBuf,
}

impl Default for MetadataTemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataTemplateGenerator {
    /// Generator for the default schema, writing into the working directory.
    pub fn new() -> Self {
        Self {
            schema_name: DEFAULT_SCHEMA.to_string(),
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_schema(mut self, schema_name: impl Into<String>) -> Self {
        self.schema_name = schema_name.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Fetch `schema.table_name` from `source` and write both templates.
    ///
    /// The filtered column list is computed once and reused for the variable
    /// rows and for the `species_var` / `population_var` dropdowns, so the
    /// three always agree. Existing output files are overwritten.
    pub fn generate(
        &self,
        source: &dyn DataSource,
        table_name: &str,
    ) -> Result<GeneratedTemplates, GenerateError> {
        let qualified = format!("{}.{}", self.schema_name, table_name);
        info!("Querying table: {}", qualified);
        let remote = source.get_data("*", &qualified)?;
        let columns = remote.filtered_columns();

        let table = TableMetadataRecord::new(table_name);
        write_table_metadata(&self.output_dir, &table, &columns)?;

        let variables: Vec<VariableMetadataRecord> = columns
            .iter()
            .map(VariableMetadataRecord::new)
            .collect();
        write_variable_metadata(&self.output_dir, &variables)?;

        Ok(GeneratedTemplates { table, variables })
    }
}

/// Generate both templates for `table_name` with the platform defaults,
/// writing into the current working directory.
///
/// Opens and authenticates a fresh session per call; connection, auth and
/// query failures propagate unchanged.
pub fn generate_templates(table_name: &str) -> Result<GeneratedTemplates, GenerateError> {
    generate_templates_with(table_name, DEFAULT_SCHEMA, DEFAULT_URL, DEFAULT_PROJECT)
}

/// Like [`generate_templates`] with an explicit schema, platform URL and
/// project.
pub fn generate_templates_with(
    table_name: &str,
    schema_name: &str,
    url: &str,
    project: &str,
) -> Result<GeneratedTemplates, GenerateError> {
    let mut session = ObmSession::init(project, url, DEFAULT_API_VERSION)?;
    session.authenticate()?;
    MetadataTemplateGenerator::new()
        .with_schema(schema_name)
        .generate(&session, table_name)
}
